mod model;
pub use model::{HeroView, StatCard};

mod view;
pub use view::HeroSection;

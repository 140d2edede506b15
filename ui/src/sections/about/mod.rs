mod model;
pub use model::{AboutPanel, AboutView, ExperienceCard, QualificationCard};

mod view;
pub use view::AboutSection;

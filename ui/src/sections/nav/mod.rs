mod model;
pub use model::{nav_label, NavItem, NavView};

mod view;
pub use view::NavPills;

mod model;
pub use model::{ProjectAccent, ProjectDetail, ProjectTab, ProjectsView, TechBadge};

mod view;
pub use view::ProjectsSection;

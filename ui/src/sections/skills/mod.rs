mod model;
pub use model::{RatingBar, SkillButton, SkillDetail, SkillsPanel, SkillsView};

mod view;
pub use view::SkillsSection;

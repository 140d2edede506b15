mod model;
pub use model::{ContactCard, ContactView, ResumeCard, TalkCard};

mod view;
pub use view::ContactSection;

pub mod config;
pub mod decor;
pub mod format;
pub mod highlight;
pub mod listeners;
pub mod locale;
pub mod scroll;
pub mod selection;
pub mod session;
pub mod text;
pub mod timing;

pub use config::PageConfig;
pub use locale::Locale;
pub use session::{PageEvent, PageSession};

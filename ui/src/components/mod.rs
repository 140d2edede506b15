//! Page chrome shared by every platform shell.

pub mod dom;

mod background;
pub use background::Background;

mod back_to_top;
pub use back_to_top::BackToTop;

mod cursor_glow;
pub use cursor_glow::CursorGlow;

mod floating_nav;
pub use floating_nav::FloatingNav;

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod loading_screen;
pub use loading_screen::LoadingScreen;

mod site_header;
pub use site_header::SiteHeader;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

use dioxus::prelude::*;

use crate::sections::nav::{NavPills, NavView};
use crate::sections::use_session_view;

use super::ThemeToggle;

/// Compact nav that slides in once the header has scrolled away.
#[component]
pub fn FloatingNav() -> Element {
    let view = use_session_view(
        |s| (s.state().locale(), s.state().nav_reading()),
        |s| NavView::build(s.state()),
    );
    let view = view();
    if !view.show_floating_nav {
        return rsx! {};
    }

    rsx! {
        div { class: "floating-nav",
            NavPills { view, class: "floating-nav__pills" }
            ThemeToggle {}
        }
    }
}

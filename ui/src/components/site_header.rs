use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::sections::nav::{NavPills, NavView};
use crate::sections::use_session_view;

use super::ThemeToggle;

#[component]
pub fn SiteHeader() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let view = use_session_view(
        |s| (s.state().locale(), s.state().nav_reading()),
        |s| NavView::build(s.state()),
    );
    let owner = session.peek().state().catalog().owner;

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                a { class: "site-header__logo", href: "#hero", "{owner}" }
                NavPills { view: view(), class: "site-header__nav" }
                ThemeToggle {}
            }
        }
    }
}

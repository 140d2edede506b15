use dioxus::prelude::*;
use tracing::debug;

use crate::core::session::PageSession;
use crate::t;

use super::dom;

#[component]
pub fn ThemeToggle() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let theme = use_memo(move || session.read().theme());
    let locale = use_memo(move || session.read().state().locale());
    let icon = if theme().is_dark() { "☀" } else { "☾" };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: t!(locale(), "theme-toggle-label"),
            title: t!(locale(), "theme-toggle-label"),
            onclick: move |_| {
                let current = session.peek().theme();
                let next = current.toggled();
                debug!(?next, "theme toggle");
                dom::apply_theme_class(next.class_name(), current.class_name());
            },
            "{icon}"
        }
    }
}

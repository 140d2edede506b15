use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::t;

use super::dom;

#[component]
pub fn BackToTop() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let visible = use_memo(move || session.read().state().show_back_to_top());
    let locale = use_memo(move || session.read().state().locale());
    if !visible() {
        return rsx! {};
    }

    rsx! {
        button {
            r#type: "button",
            class: "back-to-top",
            aria_label: t!(locale(), "back-to-top-label"),
            onclick: move |_| dom::scroll_to_top(),
            "↑"
        }
    }
}

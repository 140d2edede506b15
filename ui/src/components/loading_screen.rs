use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::t;

#[component]
pub fn LoadingScreen() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let loading = use_memo(move || session.read().state().is_loading());
    let locale = use_memo(move || session.read().state().locale());
    if !loading() {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-screen", role: "status", aria_live: "polite",
            div { class: "loading-screen__spinner", aria_hidden: "true" }
            p { class: "loading-screen__label", {t!(locale(), "loading-portfolio")} }
        }
    }
}

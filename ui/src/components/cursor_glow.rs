use dioxus::prelude::*;

use crate::core::session::PageSession;

/// Hidden until the first pointer sample arrives.
#[component]
pub fn CursorGlow() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let glow = use_memo(move || *session.read().glow());
    let glow = glow();
    let Some((left, top)) = glow.origin() else {
        return rsx! {};
    };
    let size = glow.radius() * 2.0;

    rsx! {
        div {
            class: "cursor-glow",
            aria_hidden: "true",
            style: "transform: translate({left}px, {top}px); width: {size}px; height: {size}px;",
        }
    }
}

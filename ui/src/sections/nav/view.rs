use dioxus::prelude::*;

use crate::components::dom;
use crate::core::session::PageSession;

use super::model::NavView;

/// Anchor pills for every section, the active one highlighted.
#[component]
pub fn NavPills(view: NavView, class: &'static str) -> Element {
    let session = use_context::<Signal<PageSession>>();

    rsx! {
        nav { class: "{class}", aria_label: "{view.aria_label}",
            for item in view.items {
                a {
                    key: "{item.href}",
                    href: "{item.href}",
                    class: crate::sections::tab_class("nav-pill", item.active),
                    aria_current: if item.active { "true" } else { "false" },
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let offset = session.peek().config().nav.anchor_offset;
                        dom::scroll_to_section(item.id, offset);
                    },
                    "{item.label}"
                }
            }
        }
    }
}

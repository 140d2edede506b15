use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::sections::use_session_view;
use crate::sections::tab_class;

use super::model::{AboutPanel, AboutView};

#[component]
pub fn AboutSection() -> Element {
    let mut session = use_context::<Signal<PageSession>>();
    let view = use_session_view(|s| s.state().content_key(), |s| AboutView::build(s.state()));
    let view = view();

    rsx! {
        section { id: "about", class: "section section-about",
            div { class: "section-card",
                div { class: "section-card__header",
                    div {
                        p { class: "section-label", "{view.heading.label}" }
                        h2 { class: "section-title", "{view.heading.title}" }
                    }
                    div { class: "tabs", role: "tablist",
                        for tab in view.tabs {
                            button {
                                key: "{tab.label}",
                                r#type: "button",
                                role: "tab",
                                class: tab_class("tabs__tab", tab.active),
                                aria_selected: if tab.active { "true" } else { "false" },
                                onclick: move |_| session.write().state_mut().set_about_tab(tab.value),
                                "{tab.label}"
                            }
                        }
                    }
                }
                p { class: "section-about__intro", "{view.intro}" }
                {match view.panel {
                    AboutPanel::Qualifications(cards) => rsx! {
                        div { class: "card-grid card-grid--two",
                            for card in cards {
                                article { key: "{card.key}", class: "card",
                                    h3 { class: "card__title", "{card.title}" }
                                    p { class: "card__body", "{card.description}" }
                                }
                            }
                        }
                    },
                    AboutPanel::Experience(cards) => rsx! {
                        div { class: "card-stack",
                            for card in cards {
                                article { key: "{card.key}", class: "card",
                                    div { class: "card__title card__title--split",
                                        span { "{card.role}" }
                                        span { class: "card__period", "{card.period}" }
                                    }
                                    p { class: "card__body", "{card.description}" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

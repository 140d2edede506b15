use dioxus::prelude::*;

use crate::sections::use_session_view;

use super::model::{ContactCard, ContactView};

#[component]
pub fn ContactSection() -> Element {
    let view = use_session_view(|s| s.state().content_key(), |s| ContactView::build(s.state()));
    let view = view();
    let resume = view.resume;
    let talk = view.talk;

    rsx! {
        section { id: "contact", class: "section section-contact",
            div { class: "section-card",
                div { class: "section-card__header section-card__header--stacked",
                    p { class: "section-label", "{view.label}" }
                    h2 { class: "section-title", "{view.title}" }
                    p { class: "muted", "{view.subtitle}" }
                }
                div { class: "card-grid card-grid--three",
                    for card in view.cards {
                        ChannelCard { key: "{card.href}", card }
                    }
                }
                div { class: "card-grid card-grid--two",
                    article { class: "card",
                        h3 { class: "card__title", "{resume.title}" }
                        p { class: "card__body", "{resume.subtitle}" }
                        div { class: "card__actions",
                            a {
                                class: "button button--primary",
                                href: resume.href,
                                download: "",
                                "{resume.download_cta}"
                            }
                            a {
                                class: "button button--ghost",
                                href: resume.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{resume.view_cta}"
                            }
                        }
                    }
                    article { class: "card card--accent",
                        h3 { class: "card__title", "{talk.title}" }
                        p { class: "card__body", "{talk.subtitle}" }
                        div { class: "card__actions",
                            a { class: "button button--primary", href: talk.email_href, "{talk.email_cta}" }
                            a {
                                class: "button button--ghost",
                                href: talk.linkedin_href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{talk.linkedin_cta}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChannelCard(card: ContactCard) -> Element {
    let target = if card.opens_new_tab() { "_blank" } else { "_self" };
    rsx! {
        a {
            class: "card card--link",
            href: card.href,
            target,
            rel: "noopener noreferrer",
            span { class: "section-label", "{card.label}" }
            span { class: "card__title", "{card.info}" }
            span { class: "muted", "{card.hint}" }
            span { class: "card__cta", "{card.open_cta} →" }
        }
    }
}

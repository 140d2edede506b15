use dioxus::prelude::*;

use crate::components::dom;
use crate::core::scroll::SectionId;
use crate::core::session::PageSession;
use crate::sections::use_session_view;

use super::model::{HeroView, StatCard};

#[component]
pub fn HeroSection() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let view = use_session_view(
        |s| (s.state().content_key(), s.highlight_index()),
        |s| HeroView::build(s.state(), s.highlight_index()),
    );
    let view = view();

    let jump = move |id: SectionId| {
        move |evt: MouseEvent| {
            evt.prevent_default();
            let offset = session.peek().config().nav.anchor_offset;
            dom::scroll_to_section(id, offset);
        }
    };

    rsx! {
        section { id: "hero", class: "section section-hero",
            div { class: "section-card",
                div { class: "section-hero__meta",
                    span { class: "badge", "{view.badge}" }
                    span { class: "section-hero__status",
                        span { class: "section-hero__status-dot" }
                        "{view.status}"
                    }
                }
                div { class: "section-hero__grid",
                    div { class: "section-hero__copy",
                        h1 { class: "section-hero__title",
                            for (idx, segment) in view.title.iter().enumerate() {
                                if segment.target.is_some() {
                                    span {
                                        key: "{idx}",
                                        class: if view.is_emphasized(segment) {
                                            "highlight highlight--active"
                                        } else {
                                            "highlight"
                                        },
                                        "{segment.text}"
                                    }
                                } else {
                                    span { key: "{idx}", class: "section-hero__plain", "{segment.text}" }
                                }
                            }
                        }
                        p { class: "section-hero__subtitle", "{view.subtitle}" }
                        div { class: "section-hero__actions",
                            a {
                                class: "button button--primary",
                                href: "#contact",
                                onclick: jump(SectionId::Contact),
                                "{view.cta} ↗"
                            }
                            a {
                                class: "button button--secondary",
                                href: "#projects",
                                onclick: jump(SectionId::Projects),
                                "{view.secondary_cta}"
                            }
                        }
                        div { class: "section-hero__stats",
                            StatTile { card: view.experience.clone(), accent: false }
                            StatTile { card: view.stack.clone(), accent: true }
                        }
                    }
                    div { class: "section-hero__aside",
                        img {
                            class: "section-hero__avatar",
                            src: "{view.avatar}",
                            alt: "{view.avatar_alt}",
                            width: "128",
                            height: "128",
                        }
                        div { class: "section-hero__connections",
                            p { class: "muted", "{view.connections_title}" }
                            div { class: "section-hero__socials",
                                for social in view.socials.iter() {
                                    a {
                                        key: "{social.label}",
                                        class: "social-link",
                                        href: "{social.href}",
                                        target: "_blank",
                                        rel: "noreferrer",
                                        span { "{social.label}" }
                                        span { class: "social-link__arrow", aria_hidden: "true", "↗" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(card: StatCard, accent: bool) -> Element {
    rsx! {
        div { class: "stat-tile",
            p { class: "stat-tile__title", "{card.title}" }
            p { class: if accent { "stat-tile__value stat-tile__value--accent" } else { "stat-tile__value" },
                "{card.value}"
            }
            p { class: "muted", "{card.subtitle}" }
        }
    }
}

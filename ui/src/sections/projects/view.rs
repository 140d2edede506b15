use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::sections::use_session_view;
use crate::sections::tab_class;

use super::model::{ProjectDetail, ProjectsView, TechBadge};

#[component]
pub fn ProjectsSection() -> Element {
    let mut session = use_context::<Signal<PageSession>>();
    let view = use_session_view(|s| s.state().content_key(), |s| ProjectsView::build(s.state()));
    let view = view();

    rsx! {
        section { id: "projects", class: "section section-projects",
            div { class: "section-card",
                div { class: "section-card__header",
                    div {
                        p { class: "section-label", "{view.heading.label}" }
                        h2 { class: "section-title", "{view.heading.title}" }
                    }
                    div { class: "tabs tabs--scroll", role: "tablist",
                        for tab in view.tabs {
                            button {
                                key: "{tab.id}",
                                r#type: "button",
                                role: "tab",
                                class: tab_class("tabs__tab", tab.active),
                                aria_selected: if tab.active { "true" } else { "false" },
                                onclick: move |_| {
                                    session.write().state_mut().set_active_project(tab.index);
                                },
                                "{tab.label}"
                            }
                        }
                    }
                }
                if let Some(detail) = view.detail {
                    ProjectCard { detail }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(detail: ProjectDetail) -> Element {
    let accent = detail.accent.clone();
    let preview = accent.preview_background();

    rsx! {
        article {
            class: "project",
            style: "--accent: {accent.solid}; --accent-outline: {accent.outline};",
            div { class: "project__preview", style: "background: {preview}",
                if let Some(src) = detail.image {
                    img {
                        class: "project__image",
                        src,
                        alt: "{detail.preview_alt}",
                        loading: "lazy",
                    }
                }
            }
            div { class: "project__body",
                span {
                    class: "badge",
                    style: "border-color: {accent.badge_border}; background: {accent.wash}",
                    "{detail.category}"
                }
                h3 { class: "project__title", "{detail.title}" }
                p { class: "project__subtitle", "{detail.subtitle}" }
                p { class: "card__body", "{detail.description}" }
                p { class: "section-label", "{detail.tech_label}" }
                ul { class: "tech-list",
                    for tech in detail.techs {
                        {match tech {
                            TechBadge::Logo { name, src } => rsx! {
                                li { key: "{name}", class: "tech-list__item", title: name,
                                    img { src, alt: name, width: "20", height: "20" }
                                    span { "{name}" }
                                }
                            },
                            TechBadge::Text(name) => rsx! {
                                li { key: "{name}", class: "tech-list__item tech-list__item--text", "{name}" }
                            },
                        }}
                    }
                }
                div { class: "project__actions",
                    a {
                        class: "button button--primary",
                        href: detail.live_link,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "background: {accent.solid}",
                        "{detail.visit_cta}"
                    }
                    if let Some((label, href)) = detail.figma {
                        a {
                            class: "button button--ghost",
                            href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

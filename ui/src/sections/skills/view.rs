use dioxus::prelude::*;

use crate::core::session::PageSession;
use crate::sections::use_session_view;
use crate::sections::tab_class;

use super::model::{RatingBar, SkillDetail, SkillsPanel, SkillsView};

#[component]
pub fn SkillsSection() -> Element {
    let mut session = use_context::<Signal<PageSession>>();
    let view = use_session_view(|s| s.state().content_key(), |s| SkillsView::build(s.state()));
    let view = view();

    rsx! {
        section { id: "skills", class: "section section-skills",
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
                                onclick: move |_| session.write().state_mut().set_skills_tab(tab.value),
                                "{tab.label}"
                            }
                        }
                    }
                }
                {match view.panel {
                    SkillsPanel::Toolkit { columns } => rsx! {
                        div { class: "card-grid card-grid--two",
                            for (idx, column) in columns.into_iter().enumerate() {
                                div { key: "{idx}", class: "card-stack",
                                    for bar in column {
                                        RatingCard { key: "{bar.name}", bar }
                                    }
                                }
                            }
                        }
                    },
                    SkillsPanel::Presentation { categories_title, categories, skills, split, detail } => rsx! {
                        div { class: "section-skills__showcase",
                            div { class: "card",
                                h3 { class: "card__title", "{categories_title}" }
                                div { class: "chips",
                                    for chip in categories {
                                        button {
                                            key: "{chip.label}",
                                            r#type: "button",
                                            class: tab_class("chip", chip.active),
                                            onclick: move |_| session.write().state_mut().set_skill_category(chip.value),
                                            "{chip.label}"
                                        }
                                    }
                                }
                                hr { class: "separator" }
                                div { class: if split { "skill-list skill-list--split" } else { "skill-list" },
                                    for skill in skills {
                                        button {
                                            key: "{skill.id}",
                                            r#type: "button",
                                            class: tab_class("skill-list__item", skill.selected),
                                            onclick: move |_| {
                                                session.write().state_mut().set_selected_skill(skill.id);
                                            },
                                            "{skill.label}"
                                        }
                                    }
                                }
                            }
                            DetailCard { detail }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn RatingCard(bar: RatingBar) -> Element {
    rsx! {
        article { class: "card",
            div { class: "card__title card__title--split",
                span { "{bar.label}" }
                span { class: "muted", "{bar.percent}" }
            }
            div {
                class: "progress",
                role: "progressbar",
                aria_valuenow: "{bar.level}",
                aria_valuemin: "0",
                aria_valuemax: "100",
                div { class: "progress__fill", style: "width: {bar.level}%" }
            }
        }
    }
}

#[component]
fn DetailCard(detail: SkillDetail) -> Element {
    let class = if detail.is_placeholder() {
        "card skill-detail skill-detail--placeholder"
    } else {
        "card skill-detail"
    };
    rsx! {
        article { class,
            div {
                class: "skill-detail__art",
                aria_hidden: "true",
                style: "background-image: url('{detail.image}')",
            }
            h3 { class: "card__title", "{detail.title}" }
            p { class: "card__body", "{detail.description}" }
        }
    }
}

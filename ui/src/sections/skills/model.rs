use crate::content::{SkillCategory, SkillRating, DEFAULT_SKILL_IMAGE};
use crate::core::format::format_percent;
use crate::core::locale::Locale;
use crate::core::selection::{SelectionState, SkillsTab};
use crate::t;

use super::super::{SectionHeading, TabLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingBar {
    pub name: &'static str,
    pub label: &'static str,
    pub level: u8,
    pub percent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillButton {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Detail card; shows placeholder copy when nothing is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDetail {
    pub id: Option<&'static str>,
    pub title: String,
    pub description: String,
    pub image: &'static str,
}

impl SkillDetail {
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkillsPanel {
    Toolkit {
        columns: [Vec<RatingBar>; 2],
    },
    Presentation {
        categories_title: String,
        categories: Vec<TabLabel<SkillCategory>>,
        skills: Vec<SkillButton>,
        split: bool,
        detail: SkillDetail,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsView {
    pub heading: SectionHeading,
    pub tabs: Vec<TabLabel<SkillsTab>>,
    pub panel: SkillsPanel,
}

impl SkillsView {
    pub fn build(state: &SelectionState) -> Self {
        let locale = state.locale();
        let current = state.skills_tab();
        let panel = match current {
            SkillsTab::Toolkit => toolkit(state),
            SkillsTab::Presentation => presentation(state),
        };
        Self {
            heading: SectionHeading {
                label: t!(locale, "skills-label"),
                title: t!(locale, "skills-title"),
            },
            tabs: vec![
                TabLabel::new(
                    SkillsTab::Presentation,
                    t!(locale, "skills-tab-presentation"),
                    &current,
                ),
                TabLabel::new(SkillsTab::Toolkit, t!(locale, "skills-tab-toolkit"), &current),
            ],
            panel,
        }
    }
}

fn toolkit(state: &SelectionState) -> SkillsPanel {
    let (left, right) = state.rating_columns();
    let bars = |column: &'static [SkillRating]| -> Vec<RatingBar> {
        column
            .iter()
            .map(|rating| RatingBar {
                name: rating.name,
                label: state.catalog().rating_name(rating.name, state.locale()),
                level: rating.level.min(100),
                percent: format_percent(rating.level),
            })
            .collect()
    };
    SkillsPanel::Toolkit {
        columns: [bars(left), bars(right)],
    }
}

fn presentation(state: &SelectionState) -> SkillsPanel {
    let locale = state.locale();
    let category = state.skill_category();
    let selected = state.selected_skill_id();

    let categories = SkillCategory::ALL
        .into_iter()
        .map(|value| TabLabel::new(value, category_label(locale, value), &category))
        .collect();
    let skills = state
        .category_skills()
        .into_iter()
        .map(|skill| SkillButton {
            id: skill.id,
            label: skill.label.resolve(locale),
            selected: Some(skill.id) == selected,
        })
        .collect();
    let detail = match state.selected_skill() {
        Some(skill) => SkillDetail {
            id: Some(skill.id),
            title: skill.label.resolve(locale).to_string(),
            description: skill.description.resolve(locale).to_string(),
            image: skill.image.unwrap_or(DEFAULT_SKILL_IMAGE),
        },
        None => SkillDetail {
            id: None,
            title: t!(locale, "skills-placeholder-title"),
            description: t!(locale, "skills-placeholder-body"),
            image: DEFAULT_SKILL_IMAGE,
        },
    };

    SkillsPanel::Presentation {
        categories_title: t!(locale, "skills-categories-title"),
        categories,
        skills,
        split: state.should_split_skill_list(),
        detail,
    }
}

pub fn category_label(locale: Locale, category: SkillCategory) -> String {
    match category {
        SkillCategory::Languages => t!(locale, "skills-category-languages"),
        SkillCategory::Front => t!(locale, "skills-category-front"),
        SkillCategory::Back => t!(locale, "skills-category-back"),
        SkillCategory::Other => t!(locale, "skills-category-other"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn presentation_parts(view: SkillsView) -> (Vec<SkillButton>, bool, SkillDetail) {
        match view.panel {
            SkillsPanel::Presentation {
                skills,
                split,
                detail,
                ..
            } => (skills, split, detail),
            SkillsPanel::Toolkit { .. } => panic!("expected presentation panel"),
        }
    }

    #[test]
    fn empty_category_shows_placeholder() {
        let state = SelectionState::new(Catalog::builtin(), 0);
        let (skills, split, detail) = presentation_parts(SkillsView::build(&state));
        assert!(skills.is_empty());
        assert!(!split);
        assert!(detail.is_placeholder());
        assert_eq!(detail.title, "Selecione uma skill");
        assert_eq!(detail.description, "Escolha uma skill para ver os detalhes.");
        assert_eq!(detail.image, DEFAULT_SKILL_IMAGE);
    }

    #[test]
    fn category_switch_fills_the_detail_card() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::EnUs);
        state.set_skill_category(SkillCategory::Other);
        let (skills, _, detail) = presentation_parts(SkillsView::build(&state));
        assert_eq!(skills.iter().filter(|s| s.selected).count(), 1);
        assert!(skills[0].selected);
        assert_eq!(detail.id, Some(skills[0].id));
        assert!(!detail.description.is_empty());
    }

    #[test]
    fn missing_skill_art_uses_the_default_image() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_skill_category(SkillCategory::Other);
        assert!(state.set_selected_skill("git"));
        let (_, _, detail) = presentation_parts(SkillsView::build(&state));
        assert_eq!(detail.image, DEFAULT_SKILL_IMAGE);
    }

    #[test]
    fn toolkit_columns_carry_localized_names_and_percentages() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::EnUs);
        state.set_skills_tab(SkillsTab::Toolkit);
        let view = SkillsView::build(&state);
        assert!(view.tabs[1].active);
        let SkillsPanel::Toolkit { columns } = view.panel else {
            panic!("expected toolkit panel");
        };
        assert_eq!((columns[0].len(), columns[1].len()), (4, 3));
        assert_eq!(columns[0][0].percent, "90%");
        let names: Vec<&str> = columns[1].iter().map(|bar| bar.label).collect();
        assert!(names.contains(&"Testing & QA"));
    }
}

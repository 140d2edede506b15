use crate::core::selection::{AboutTab, SelectionState};
use crate::t;

use super::super::{SectionHeading, TabLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationCard {
    /// Default-locale title; stable across locale switches.
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceCard {
    pub key: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutPanel {
    Qualifications(Vec<QualificationCard>),
    Experience(Vec<ExperienceCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub heading: SectionHeading,
    pub intro: &'static str,
    pub tabs: Vec<TabLabel<AboutTab>>,
    pub panel: AboutPanel,
}

impl AboutView {
    pub fn build(state: &SelectionState) -> Self {
        let locale = state.locale();
        let current = state.about_tab();
        let panel = match current {
            AboutTab::Qualifications => AboutPanel::Qualifications(
                state
                    .unique_qualifications()
                    .into_iter()
                    .map(|item| QualificationCard {
                        key: item.title.default_text(),
                        title: item.title.resolve(locale),
                        description: item.description.resolve(locale),
                    })
                    .collect(),
            ),
            AboutTab::Experience => AboutPanel::Experience(
                state
                    .catalog()
                    .experiences
                    .iter()
                    .map(|item| ExperienceCard {
                        key: item.role.default_text(),
                        role: item.role.resolve(locale),
                        period: item.period.resolve(locale),
                        description: item.description.resolve(locale),
                    })
                    .collect(),
            ),
        };

        Self {
            heading: SectionHeading {
                label: t!(locale, "about-label"),
                title: t!(locale, "about-title"),
            },
            intro: state.catalog().about.resolve(locale),
            tabs: vec![
                TabLabel::new(
                    AboutTab::Qualifications,
                    t!(locale, "about-tab-qualifications"),
                    &current,
                ),
                TabLabel::new(AboutTab::Experience, t!(locale, "about-tab-experience"), &current),
            ],
            panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::core::locale::Locale;

    #[test]
    fn qualifications_panel_by_default() {
        let state = SelectionState::new(Catalog::builtin(), 0);
        let view = AboutView::build(&state);
        assert!(view.tabs[0].active && !view.tabs[1].active);
        match view.panel {
            AboutPanel::Qualifications(cards) => {
                assert_eq!(cards.len(), state.unique_qualifications().len());
                assert!(cards.iter().all(|card| !card.description.is_empty()));
            }
            AboutPanel::Experience(_) => panic!("expected qualifications"),
        }
    }

    #[test]
    fn experience_panel_keeps_table_order() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::EnUs);
        state.set_about_tab(AboutTab::Experience);
        let view = AboutView::build(&state);
        assert_eq!(view.heading.title, "Who am I?");
        let AboutPanel::Experience(cards) = view.panel else {
            panic!("expected experience");
        };
        let roles: Vec<&str> = cards.iter().map(|c| c.role).collect();
        let expected: Vec<&str> = Catalog::builtin()
            .experiences
            .iter()
            .map(|e| e.role.resolve(Locale::EnUs))
            .collect();
        assert_eq!(roles, expected);
    }

    #[test]
    fn card_keys_do_not_change_with_locale() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        let AboutPanel::Qualifications(pt) = AboutView::build(&state).panel else {
            unreachable!()
        };
        state.set_locale(Locale::FrFr);
        let AboutPanel::Qualifications(fr) = AboutView::build(&state).panel else {
            unreachable!()
        };
        let pt_keys: Vec<_> = pt.iter().map(|c| c.key).collect();
        let fr_keys: Vec<_> = fr.iter().map(|c| c.key).collect();
        assert_eq!(pt_keys, fr_keys);
    }
}

use crate::core::format::accent_with_alpha;
use crate::core::selection::SelectionState;
use crate::t;

use crate::sections::SectionHeading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTab {
    pub index: usize,
    pub id: u32,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechBadge {
    Logo { name: &'static str, src: &'static str },
    Text(&'static str),
}

/// Accent colours derived from a project's `#rrggbb` theme colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAccent {
    pub solid: &'static str,
    pub glow: String,
    pub wash: String,
    pub badge_border: String,
    pub outline: String,
}

impl ProjectAccent {
    pub fn from_theme(color: &'static str) -> Self {
        Self {
            solid: color,
            glow: accent_with_alpha(color, "40"),
            wash: accent_with_alpha(color, "25"),
            badge_border: accent_with_alpha(color, "66"),
            outline: accent_with_alpha(color, "80"),
        }
    }

    pub fn preview_background(&self) -> String {
        format!(
            "radial-gradient(circle at 30% 20%, {}, transparent 45%), linear-gradient(135deg, {}, transparent 60%)",
            self.glow, self.wash
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image: Option<&'static str>,
    pub preview_alt: String,
    pub tech_label: String,
    pub techs: Vec<TechBadge>,
    pub visit_cta: String,
    pub live_link: &'static str,
    /// Label and link of the design file, when there is one.
    pub figma: Option<(String, &'static str)>,
    pub accent: ProjectAccent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView {
    pub heading: SectionHeading,
    pub tabs: Vec<ProjectTab>,
    pub detail: Option<ProjectDetail>,
}

impl ProjectsView {
    pub fn build(state: &SelectionState) -> Self {
        let locale = state.locale();
        let catalog = state.catalog();
        let active = state.active_project_index();

        let tabs = catalog
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectTab {
                index,
                id: project.id,
                label: project.title.resolve(locale),
                active: index == active,
            })
            .collect();

        let detail = state.active_project().map(|project| {
            let title = project.title.resolve(locale);
            ProjectDetail {
                id: project.id,
                title,
                subtitle: project.subtitle.resolve(locale),
                description: project.description.resolve(locale),
                category: project.category.resolve(locale),
                image: project.image,
                preview_alt: t!(locale, "projects-preview-alt", title = title),
                tech_label: t!(locale, "projects-tech-label"),
                techs: project
                    .skills
                    .iter()
                    .map(|&tech| match catalog.tech_logo(tech) {
                        Some(src) => TechBadge::Logo { name: tech, src },
                        None => TechBadge::Text(tech),
                    })
                    .collect(),
                visit_cta: t!(locale, "projects-visit-cta"),
                live_link: project.live_link,
                figma: project
                    .figma_link
                    .map(|href| (t!(locale, "projects-figma-cta"), href)),
                accent: ProjectAccent::from_theme(project.theme_color),
            }
        });

        Self {
            heading: SectionHeading {
                label: t!(locale, "projects-label"),
                title: t!(locale, "projects-title"),
            },
            tabs,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::core::locale::Locale;

    #[test]
    fn first_project_is_active_initially() {
        let state = SelectionState::new(Catalog::builtin(), 0);
        let view = ProjectsView::build(&state);
        assert_eq!(view.tabs.len(), Catalog::builtin().projects.len());
        assert!(view.tabs[0].active);
        let detail = view.detail.unwrap();
        assert_eq!(detail.id, Catalog::builtin().projects[0].id);
        assert_eq!(detail.accent.badge_border, "#8b5cf666");
    }

    #[test]
    fn technologies_without_logo_become_text_badges() {
        let state = SelectionState::new(Catalog::builtin(), 0);
        let view = ProjectsView::build(&state);
        for badge in view.detail.unwrap().techs {
            match badge {
                TechBadge::Logo { name, src } => {
                    assert_eq!(Catalog::builtin().tech_logo(name), Some(src))
                }
                TechBadge::Text(name) => assert_eq!(Catalog::builtin().tech_logo(name), None),
            }
        }
    }

    #[test]
    fn figma_cta_only_when_linked() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::EnUs);
        let without = Catalog::builtin()
            .projects
            .iter()
            .position(|p| p.figma_link.is_none())
            .unwrap();
        state.set_active_project(without);
        let detail = ProjectsView::build(&state).detail.unwrap();
        assert!(detail.figma.is_none());
        assert_eq!(detail.visit_cta, "Visit");

        state.set_active_project(0);
        let detail = ProjectsView::build(&state).detail.unwrap();
        assert_eq!(detail.figma.map(|(label, _)| label).as_deref(), Some("Figma"));
    }

    #[test]
    fn preview_alt_names_the_project() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::EnUs);
        let detail = ProjectsView::build(&state).detail.unwrap();
        assert_eq!(detail.preview_alt, format!("Project preview: {}", detail.title));
    }
}

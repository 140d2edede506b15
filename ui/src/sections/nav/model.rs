use crate::core::locale::Locale;
use crate::core::scroll::SectionId;
use crate::core::selection::SelectionState;
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub items: Vec<NavItem>,
    pub aria_label: String,
    pub show_floating_nav: bool,
    pub show_back_to_top: bool,
}

impl NavView {
    pub fn build(state: &SelectionState) -> Self {
        let locale = state.locale();
        let items = SectionId::ORDER
            .into_iter()
            .map(|id| NavItem {
                id,
                href: format!("#{}", id.anchor()),
                label: nav_label(locale, id),
                active: id == state.active_section(),
            })
            .collect();
        Self {
            items,
            aria_label: t!(locale, "nav-aria-label"),
            show_floating_nav: state.show_floating_nav(),
            show_back_to_top: state.show_back_to_top(),
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.items.iter().find(|item| item.active).map(|item| item.id)
    }
}

pub fn nav_label(locale: Locale, id: SectionId) -> String {
    match id {
        SectionId::Hero => t!(locale, "nav-hero"),
        SectionId::About => t!(locale, "nav-about"),
        SectionId::Skills => t!(locale, "nav-skills"),
        SectionId::Projects => t!(locale, "nav-projects"),
        SectionId::Contact => t!(locale, "nav-contact"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::core::scroll::NavReading;

    #[test]
    fn five_items_in_page_order_with_one_active() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.apply_nav(NavReading {
            active: SectionId::Skills,
            show_floating_nav: true,
            show_back_to_top: true,
        });
        let view = NavView::build(&state);

        let hrefs: Vec<&str> = view.items.iter().map(|i| i.href.as_str()).collect();
        assert_eq!(hrefs, ["#hero", "#about", "#skills", "#projects", "#contact"]);
        assert_eq!(view.items.iter().filter(|i| i.active).count(), 1);
        assert_eq!(view.active(), Some(SectionId::Skills));
        assert!(view.show_floating_nav);
    }

    #[test]
    fn labels_follow_locale() {
        let mut state = SelectionState::new(Catalog::builtin(), 0);
        state.set_locale(Locale::FrFr);
        let view = NavView::build(&state);
        assert_eq!(view.items[1].label, "À propos");
        assert_eq!(view.items[2].label, "Compétences");
    }
}

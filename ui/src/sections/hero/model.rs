use crate::content::SocialLink;
use crate::core::highlight::{segment_title, TitleSegment};
use crate::core::selection::SelectionState;
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub badge: &'static str,
    pub status: String,
    pub title: Vec<TitleSegment>,
    /// Target index currently emphasized in `title`.
    pub highlight: usize,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub secondary_cta: &'static str,
    pub experience: StatCard,
    pub stack: StatCard,
    pub connections_title: String,
    pub socials: &'static [SocialLink],
    pub avatar: &'static str,
    pub avatar_alt: String,
}

impl HeroView {
    pub fn build(state: &SelectionState, highlight: usize) -> Self {
        let catalog = state.catalog();
        let locale = state.locale();
        let hero = &catalog.hero;
        Self {
            badge: catalog.badge,
            status: t!(locale, "hero-status"),
            title: segment_title(hero.title.resolve(locale), catalog.highlight_targets),
            highlight,
            subtitle: hero.subtitle.resolve(locale),
            cta: hero.cta.resolve(locale),
            secondary_cta: hero.secondary_cta.resolve(locale),
            experience: StatCard {
                title: t!(locale, "hero-exp-title"),
                value: t!(locale, "hero-exp-value"),
                subtitle: t!(locale, "hero-exp-subtitle"),
            },
            stack: StatCard {
                title: t!(locale, "hero-stack-title"),
                value: t!(locale, "hero-stack-value"),
                subtitle: t!(locale, "hero-stack-subtitle"),
            },
            connections_title: t!(locale, "hero-connections-title"),
            socials: catalog.socials,
            avatar: catalog.avatar,
            avatar_alt: t!(locale, "hero-avatar-alt"),
        }
    }

    pub fn is_emphasized(&self, segment: &TitleSegment) -> bool {
        segment.target == Some(self.highlight)
    }
}

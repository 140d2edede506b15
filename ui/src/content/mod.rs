//! Static, compiled-in portfolio content.
//!
//! Every table lives in [`data`]; the [`Catalog`] bundles them so the
//! selection model can run against the built-in content or a test fixture.

mod data;

use crate::core::locale::Locale;
use crate::core::text::LocalizedText;

pub use data::DEFAULT_SKILL_IMAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillCategory {
    #[default]
    Languages,
    Front,
    Back,
    Other,
}

impl SkillCategory {
    /// Chip order in the presentation panel.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::Front,
        SkillCategory::Back,
        SkillCategory::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroCopy {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub cta: LocalizedText,
    pub secondary_cta: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactCopy {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Qualification {
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// Display order is table order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceEntry {
    pub role: LocalizedText,
    pub period: LocalizedText,
    pub description: LocalizedText,
}

/// A toolkit bar. `level` is a 0–100 percentage used only as a display magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRating {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseSkill {
    /// Unique within a catalogue; the selection key.
    pub id: &'static str,
    pub category: SkillCategory,
    pub label: LocalizedText,
    pub description: LocalizedText,
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub description: LocalizedText,
    pub category: LocalizedText,
    /// Technology names, in badge order.
    pub skills: &'static [&'static str],
    pub live_link: &'static str,
    pub figma_link: Option<&'static str>,
    pub image: Option<&'static str>,
    /// `#rrggbb` accent colour.
    pub theme_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Email,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub info: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    pub owner: &'static str,
    pub badge: &'static str,
    pub avatar: &'static str,
    pub hero: HeroCopy,
    /// Keywords of the hero title that take turns being emphasized.
    pub highlight_targets: &'static [&'static str],
    pub about: LocalizedText,
    pub qualifications: &'static [Qualification],
    pub experiences: &'static [ExperienceEntry],
    pub ratings: &'static [SkillRating],
    /// Localized display names for [`SkillRating::name`].
    pub rating_names: &'static [(&'static str, LocalizedText)],
    pub showcase: &'static [ShowcaseSkill],
    pub projects: &'static [Project],
    /// Technology name → logo asset path.
    pub tech_logos: &'static [(&'static str, &'static str)],
    pub contact: ContactCopy,
    pub socials: &'static [SocialLink],
    pub channels: &'static [ContactChannel],
    pub resume_href: &'static str,
    pub email_href: &'static str,
    pub linkedin_href: &'static str,
}

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &data::CATALOG
    }

    /// Showcase skills tagged `category`, in table order.
    pub fn skills_in(
        &self,
        category: SkillCategory,
    ) -> impl Iterator<Item = &'static ShowcaseSkill> {
        let showcase: &'static [ShowcaseSkill] = self.showcase;
        showcase
            .iter()
            .filter(move |skill| skill.category == category)
    }

    pub fn showcase_skill(&self, id: &str) -> Option<&'static ShowcaseSkill> {
        let showcase: &'static [ShowcaseSkill] = self.showcase;
        showcase.iter().find(|skill| skill.id == id)
    }

    /// Localized toolkit name; names without a table entry are shown as-is.
    pub fn rating_name(&self, name: &'static str, locale: Locale) -> &'static str {
        self.rating_names
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| text.resolve(locale))
            .unwrap_or(name)
    }

    pub fn tech_logo(&self, tech: &str) -> Option<&'static str> {
        self.tech_logos
            .iter()
            .find(|(name, _)| *name == tech)
            .map(|(_, path)| *path)
    }

    pub fn channel(&self, kind: ContactKind) -> Option<&'static ContactChannel> {
        let channels: &'static [ContactChannel] = self.channels;
        channels.iter().find(|channel| channel.kind == kind)
    }
}

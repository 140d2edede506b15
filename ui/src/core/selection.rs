//! Selection state model.
//!
//! [`SelectionState`] is the only mutable value of a page session. It holds
//! cursors into the static [`Catalog`] (tabs, category, selected skill, active
//! project), the nav reading written by the tracker, the scroll scalar that
//! drives the background and the one-shot loading flag.
//!
//! Derived lists (category skills, deduplicated qualifications, columns) are
//! recomputed on demand and never stored.
//!
//! Policies for inputs the UI should never produce:
//! - selecting a skill outside the active category is rejected;
//! - an out-of-range project index is clamped;
//! - scroll progress is clamped into `[0, 1]`, NaN becomes 0.

use tracing::{debug, info, warn};

use super::locale::Locale;
use super::scroll::{NavReading, SectionId};
use crate::content::{Catalog, Project, Qualification, ShowcaseSkill, SkillCategory, SkillRating};

/// Lists longer than this are shown in two columns.
pub const SPLIT_LIST_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AboutTab {
    #[default]
    Qualifications,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillsTab {
    #[default]
    Presentation,
    Toolkit,
}

/// Everything section content is derived from. Scroll and nav readings are
/// left out so that scrolling never rebuilds the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentKey {
    pub locale: Locale,
    pub about_tab: AboutTab,
    pub skills_tab: SkillsTab,
    pub skill_category: SkillCategory,
    pub selected_skill: Option<&'static str>,
    pub active_project: usize,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: &'static Catalog,
    locale: Locale,
    about_tab: AboutTab,
    skills_tab: SkillsTab,
    skill_category: SkillCategory,
    selected_skill: Option<&'static str>,
    active_project: usize,
    active_section: SectionId,
    show_floating_nav: bool,
    show_back_to_top: bool,
    scroll_progress: f64,
    loading: bool,
    elapsed_ms: u64,
    loading_delay_ms: u64,
}

// The catalogue is static and compared by address.
impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog)
            && self.content_key() == other.content_key()
            && self.nav_reading() == other.nav_reading()
            && self.scroll_progress == other.scroll_progress
            && self.elapsed_ms == other.elapsed_ms
            && self.loading_delay_ms == other.loading_delay_ms
    }
}

impl SelectionState {
    pub fn new(catalog: &'static Catalog, loading_delay_ms: u64) -> Self {
        let skill_category = SkillCategory::default();
        let selected_skill = catalog.skills_in(skill_category).next().map(|s| s.id);
        Self {
            catalog,
            locale: Locale::DEFAULT,
            about_tab: AboutTab::default(),
            skills_tab: SkillsTab::default(),
            skill_category,
            selected_skill,
            active_project: 0,
            active_section: SectionId::default(),
            show_floating_nav: false,
            show_back_to_top: false,
            scroll_progress: 0.0,
            loading: true,
            elapsed_ms: 0,
            loading_delay_ms,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn about_tab(&self) -> AboutTab {
        self.about_tab
    }

    pub fn skills_tab(&self) -> SkillsTab {
        self.skills_tab
    }

    pub fn skill_category(&self) -> SkillCategory {
        self.skill_category
    }

    pub fn selected_skill_id(&self) -> Option<&'static str> {
        self.selected_skill
    }

    pub fn active_project_index(&self) -> usize {
        self.active_project
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn show_floating_nav(&self) -> bool {
        self.show_floating_nav
    }

    pub fn show_back_to_top(&self) -> bool {
        self.show_back_to_top
    }

    pub fn nav_reading(&self) -> NavReading {
        NavReading {
            active: self.active_section,
            show_floating_nav: self.show_floating_nav,
            show_back_to_top: self.show_back_to_top,
        }
    }

    pub fn content_key(&self) -> ContentKey {
        ContentKey {
            locale: self.locale,
            about_tab: self.about_tab,
            skills_tab: self.skills_tab,
            skill_category: self.skill_category,
            selected_skill: self.selected_skill,
            active_project: self.active_project,
            loading: self.loading,
        }
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            debug!(from = %self.locale, to = %locale, "locale changed");
        }
        self.locale = locale;
    }

    pub fn set_about_tab(&mut self, tab: AboutTab) {
        debug!(?tab, "about tab");
        self.about_tab = tab;
    }

    pub fn set_skills_tab(&mut self, tab: SkillsTab) {
        debug!(?tab, "skills tab");
        self.skills_tab = tab;
    }

    /// Switch category and select its first skill, or clear the selection when
    /// the category is empty.
    pub fn set_skill_category(&mut self, category: SkillCategory) {
        self.skill_category = category;
        self.selected_skill = self.catalog.skills_in(category).next().map(|s| s.id);
        debug!(?category, selected = ?self.selected_skill, "skill category");
    }

    /// Returns `false` (and keeps the current selection) when `id` is not part
    /// of the active category.
    pub fn set_selected_skill(&mut self, id: &str) -> bool {
        let found = self
            .catalog
            .skills_in(self.skill_category)
            .find(|skill| skill.id == id);
        match found {
            Some(skill) => {
                debug!(id = skill.id, "skill selected");
                self.selected_skill = Some(skill.id);
                true
            }
            None => {
                warn!(id, category = ?self.skill_category, "skill outside active category ignored");
                false
            }
        }
    }

    /// Set the active project, clamped to the catalogue; returns the index
    /// that was stored.
    pub fn set_active_project(&mut self, index: usize) -> usize {
        let last = self.catalog.projects.len().saturating_sub(1);
        let clamped = index.min(last);
        if clamped != index {
            warn!(index, clamped, "project index out of range");
        }
        self.active_project = clamped;
        clamped
    }

    pub fn set_scroll_progress(&mut self, value: f64) {
        self.scroll_progress = clamp_progress(value);
    }

    pub fn apply_nav(&mut self, reading: NavReading) {
        self.active_section = reading.active;
        self.show_floating_nav = reading.show_floating_nav;
        self.show_back_to_top = reading.show_back_to_top;
    }

    /// Advance the session clock. Returns `true` on the single call that ends
    /// loading.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.loading && self.elapsed_ms >= self.loading_delay_ms {
            self.loading = false;
            info!(after_ms = self.elapsed_ms, "loading finished");
            return true;
        }
        false
    }

    /// Time left before loading ends; `None` once ready.
    pub fn loading_remaining_ms(&self) -> Option<u64> {
        self.loading
            .then(|| self.loading_delay_ms.saturating_sub(self.elapsed_ms))
    }

    pub fn category_skills(&self) -> Vec<&'static ShowcaseSkill> {
        self.catalog.skills_in(self.skill_category).collect()
    }

    pub fn selected_skill(&self) -> Option<&'static ShowcaseSkill> {
        self.selected_skill
            .and_then(|id| self.catalog.showcase_skill(id))
    }

    pub fn should_split_skill_list(&self) -> bool {
        self.catalog.skills_in(self.skill_category).count() > SPLIT_LIST_THRESHOLD
    }

    pub fn unique_qualifications(&self) -> Vec<&'static Qualification> {
        let qualifications: &'static [Qualification] = self.catalog.qualifications;
        dedupe_by_default_title(qualifications)
    }

    /// Toolkit ratings in two columns.
    pub fn rating_columns(&self) -> (&'static [SkillRating], &'static [SkillRating]) {
        let ratings: &'static [SkillRating] = self.catalog.ratings;
        split_columns(ratings)
    }

    pub fn active_project(&self) -> Option<&'static Project> {
        let projects: &'static [Project] = self.catalog.projects;
        projects.get(self.active_project)
    }
}

/// First occurrence per default-locale title, source order preserved.
pub fn dedupe_by_default_title(items: &[Qualification]) -> Vec<&Qualification> {
    let mut seen: Vec<&str> = Vec::with_capacity(items.len());
    items
        .iter()
        .filter(|item| {
            let key = item.title.default_text();
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        })
        .collect()
}

/// Split into two ordered halves; the first gets the extra item.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Scroll progress as stored: clamped into `[0, 1]`, NaN becomes 0.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

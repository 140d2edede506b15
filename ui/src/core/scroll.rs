//! Scroll/nav tracking.
//!
//! The tracker never touches the DOM. Every reading is taken from a
//! [`Viewport`], which in the browser is a [`ScrollSample`] posted by the scroll
//! watch script and in tests is a hand-built fake.

use serde::{Deserialize, Serialize};

use super::config::NavConfig;

/// Anchor targets, in page order. The order doubles as the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ORDER: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id / anchor fragment.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

pub trait Viewport {
    /// Vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;
    /// Document scroll progress in `[0, 1]`.
    fn scroll_progress(&self) -> f64;
    /// Top edge of a section relative to the viewport top; `None` when the
    /// section is not in the document.
    fn section_top(&self, id: SectionId) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub progress: f64,
    #[serde(default)]
    pub sections: Vec<SectionTop>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionTop {
    pub id: SectionId,
    pub top: Option<f64>,
}

impl Viewport for ScrollSample {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_progress(&self) -> f64 {
        self.progress
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .and_then(|section| section.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavReading {
    pub active: SectionId,
    pub show_floating_nav: bool,
    pub show_back_to_top: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavTracker {
    config: NavConfig,
}

impl NavTracker {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Section whose top edge is closest to the active offset. Exact ties go
    /// to the section that comes first in [`SectionId::ORDER`]; missing
    /// sections are infinitely far away.
    pub fn active_section(&self, viewport: &dyn Viewport) -> SectionId {
        let mut best = SectionId::ORDER[0];
        let mut best_distance = f64::INFINITY;
        for id in SectionId::ORDER {
            let distance = viewport
                .section_top(id)
                .map(|top| (top - self.config.active_offset).abs())
                .filter(|distance| !distance.is_nan())
                .unwrap_or(f64::INFINITY);
            if distance < best_distance {
                best = id;
                best_distance = distance;
            }
        }
        best
    }

    pub fn observe(&self, viewport: &dyn Viewport) -> NavReading {
        let scroll_y = viewport.scroll_y();
        NavReading {
            active: self.active_section(viewport),
            show_floating_nav: scroll_y > self.config.floating_threshold,
            show_back_to_top: scroll_y > self.config.back_to_top_threshold,
        }
    }
}

impl Default for NavTracker {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_y: f64, tops: &[(SectionId, Option<f64>)]) -> ScrollSample {
        ScrollSample {
            scroll_y,
            progress: 0.0,
            sections: tops
                .iter()
                .map(|(id, top)| SectionTop { id: *id, top: *top })
                .collect(),
        }
    }

    #[test]
    fn picks_section_nearest_the_offset() {
        let tracker = NavTracker::default();
        let viewport = sample(
            900.0,
            &[
                (SectionId::Hero, Some(-900.0)),
                (SectionId::About, Some(-120.0)),
                (SectionId::Skills, Some(210.0)),
                (SectionId::Projects, Some(1100.0)),
                (SectionId::Contact, Some(2000.0)),
            ],
        );
        assert_eq!(tracker.active_section(&viewport), SectionId::Skills);
    }

    #[test]
    fn exact_ties_go_to_the_earlier_section() {
        let tracker = NavTracker::default();
        // About sits 40 above the offset, Projects 40 below.
        let viewport = sample(
            500.0,
            &[
                (SectionId::Hero, Some(-500.0)),
                (SectionId::About, Some(120.0)),
                (SectionId::Skills, None),
                (SectionId::Projects, Some(200.0)),
                (SectionId::Contact, Some(900.0)),
            ],
        );
        assert_eq!(tracker.active_section(&viewport), SectionId::About);
    }

    #[test]
    fn missing_sections_default_to_hero() {
        let tracker = NavTracker::default();
        let viewport = sample(0.0, &[]);
        assert_eq!(tracker.active_section(&viewport), SectionId::Hero);
    }

    #[test]
    fn floating_nav_and_back_to_top_thresholds() {
        let tracker = NavTracker::default();
        assert!(!tracker.observe(&sample(140.0, &[])).show_floating_nav);
        let reading = tracker.observe(&sample(141.0, &[]));
        assert!(reading.show_floating_nav);
        assert!(!reading.show_back_to_top);
        assert!(tracker.observe(&sample(321.0, &[])).show_back_to_top);
    }

    #[test]
    fn decodes_watch_payload() {
        let json = r#"{
            "scroll_y": 12.5,
            "progress": 0.25,
            "sections": [
                { "id": "hero", "top": -12.5 },
                { "id": "contact", "top": null }
            ]
        }"#;
        let decoded: ScrollSample = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.scroll_y(), 12.5);
        assert_eq!(decoded.section_top(SectionId::Hero), Some(-12.5));
        assert_eq!(decoded.section_top(SectionId::Contact), None);
        assert_eq!(decoded.section_top(SectionId::About), None);
    }

    #[test]
    fn section_ids_serialize_as_anchors() {
        let encoded = serde_json::to_string(&SectionId::ORDER).unwrap();
        assert_eq!(
            encoded,
            r#"["hero","about","skills","projects","contact"]"#
        );
    }
}

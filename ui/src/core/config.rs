//! Page tuning knobs. Everything here is compiled in; the platform shells may
//! hand a customised [`PageConfig`] to the page root.

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// One-shot delay before the loading overlay is dismissed.
    pub loading_delay_ms: u64,
    pub nav: NavConfig,
    pub highlight: HighlightTiming,
    pub background: BackgroundConfig,
    /// Cursor glow radius; the glow is centered on the pointer.
    pub glow_radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    /// Distance from the viewport top that sections are measured against.
    pub active_offset: f64,
    pub floating_threshold: f64,
    pub back_to_top_threshold: f64,
    /// Landing offset for smooth anchor scrolling (sticky header height).
    pub anchor_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTiming {
    pub step_ms: u64,
    /// Pause after the last target before wrapping to the first.
    pub pause_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    pub point_count: usize,
    pub spread: f32,
    pub seed: u64,
    pub frame_interval_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 3_000,
            nav: NavConfig::default(),
            highlight: HighlightTiming::default(),
            background: BackgroundConfig::default(),
            glow_radius: 128.0,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            active_offset: 160.0,
            floating_threshold: 140.0,
            back_to_top_threshold: 320.0,
            anchor_offset: 80.0,
        }
    }
}

impl Default for HighlightTiming {
    fn default() -> Self {
        Self {
            step_ms: 1_700,
            pause_ms: 10_000,
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            point_count: 700,
            spread: 12.0,
            seed: 0x5EED_F011,
            frame_interval_ms: 16,
        }
    }
}

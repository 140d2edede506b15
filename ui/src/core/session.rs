//! Page session: the single owner of everything mutable on the page.
//!
//! A session is mounted once, fed DOM samples through [`PageSession::handle`]
//! and clock time through [`PageSession::advance`], and torn down once. After
//! [`PageSession::teardown`] every listener is detached and every timer
//! cancelled, so late events and late clock ticks are ignored.

use tracing::{debug, trace};

use super::config::PageConfig;
use super::decor::{CursorGlow, PointerSample, Theme, ThemeSample};
use super::highlight::{HighlightRotation, RotationStep};
use super::listeners::{ListenerKind, ListenerSet};
use super::scroll::{NavTracker, ScrollSample, Viewport};
use super::selection::{clamp_progress, SelectionState};
use super::timing::Timeline;
use crate::content::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled(ScrollSample),
    PointerMoved(PointerSample),
    ThemeChanged(ThemeSample),
}

impl PageEvent {
    /// Listener that has to be attached for the event to be applied.
    pub fn listener(&self) -> ListenerKind {
        match self {
            PageEvent::Scrolled(_) => ListenerKind::Scroll,
            PageEvent::PointerMoved(_) => ListenerKind::PointerMove,
            PageEvent::ThemeChanged(_) => ListenerKind::ThemeWatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageTimer {
    Highlight(RotationStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Mounted,
    TornDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSession {
    config: PageConfig,
    state: SelectionState,
    tracker: NavTracker,
    highlight: HighlightRotation,
    timeline: Timeline<PageTimer>,
    listeners: ListenerSet,
    glow: CursorGlow,
    theme: Theme,
    phase: Phase,
}

impl PageSession {
    pub fn new(catalog: &'static Catalog, config: PageConfig) -> Self {
        Self {
            state: SelectionState::new(catalog, config.loading_delay_ms),
            tracker: NavTracker::new(config.nav.clone()),
            highlight: HighlightRotation::new(catalog.highlight_targets.len(), config.highlight),
            timeline: Timeline::new(),
            listeners: ListenerSet::new(),
            glow: CursorGlow::new(config.glow_radius),
            theme: Theme::default(),
            phase: Phase::Idle,
            config,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight.index()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.is_mounted() && self.listeners.is_attached(kind)
    }

    /// Attach listeners, take the first nav reading and start the highlight
    /// chain. Only the first call on a fresh session does anything.
    pub fn mount(&mut self, viewport: &dyn Viewport) {
        if self.phase != Phase::Idle {
            return;
        }
        for kind in ListenerKind::ALL {
            self.listeners.attach(kind);
        }
        self.state.apply_nav(self.tracker.observe(viewport));
        self.state.set_scroll_progress(viewport.scroll_progress());
        if let Some(step) = self.highlight.first_step() {
            self.timeline
                .schedule(step.delay_ms, PageTimer::Highlight(step));
        }
        self.phase = Phase::Mounted;
        debug!(listeners = self.listeners.len(), "page session mounted");
    }

    /// Whether [`PageSession::handle`] would change anything for `event`.
    /// Read-only, so callers can skip a write that would only notify.
    pub fn would_change(&self, event: &PageEvent) -> bool {
        if !self.is_listening(event.listener()) {
            return false;
        }
        match event {
            PageEvent::Scrolled(sample) => {
                self.tracker.observe(sample) != self.state.nav_reading()
                    || clamp_progress(sample.progress) != self.state.scroll_progress()
            }
            PageEvent::PointerMoved(sample) => self.glow.moves_to(*sample),
            PageEvent::ThemeChanged(sample) => Theme::from_dark(sample.dark) != self.theme,
        }
    }

    /// Apply a DOM sample. Returns `true` if visible state changed.
    pub fn handle(&mut self, event: PageEvent) -> bool {
        if !self.is_listening(event.listener()) {
            trace!(?event, "event ignored, listener detached");
            return false;
        }
        match event {
            PageEvent::Scrolled(sample) => {
                let reading = self.tracker.observe(&sample);
                let progress = clamp_progress(sample.progress);
                let changed = reading != self.state.nav_reading()
                    || progress != self.state.scroll_progress();
                self.state.apply_nav(reading);
                self.state.set_scroll_progress(progress);
                changed
            }
            PageEvent::PointerMoved(sample) => self.glow.follow(sample),
            PageEvent::ThemeChanged(sample) => {
                let theme = Theme::from_dark(sample.dark);
                let changed = theme != self.theme;
                if changed {
                    debug!(?theme, "theme changed");
                }
                self.theme = theme;
                changed
            }
        }
    }

    /// Move the session clock forward, firing the loading timer and any due
    /// highlight steps. Returns `true` if visible state changed.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let until = self.timeline.now_ms().saturating_add(elapsed_ms);
        let mut changed = self.state.tick(elapsed_ms);
        while let Some(timer) = self.timeline.pop_due(until) {
            match timer {
                PageTimer::Highlight(step) => {
                    if let Some(next) = self.highlight.apply(step) {
                        self.timeline
                            .schedule(next.delay_ms, PageTimer::Highlight(next));
                    }
                    trace!(index = self.highlight.index(), "highlight step");
                    changed = true;
                }
            }
        }
        self.timeline.settle(until);
        changed
    }

    /// Milliseconds until the next loading or highlight deadline.
    pub fn next_wake_ms(&self) -> Option<u64> {
        if !self.is_mounted() {
            return None;
        }
        match (self.state.loading_remaining_ms(), self.timeline.next_due_in()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Detach every listener and cancel every timer.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        let detached = self.listeners.detach_all();
        let cancelled = self.timeline.cancel_all();
        self.phase = Phase::TornDown;
        debug!(detached, cancelled, "page session torn down");
    }
}

//! Drives a whole page session with a fake viewport and a virtual clock.

use ui::content::Catalog;
use ui::core::decor::PointerSample;
use ui::core::listeners::ListenerKind;
use ui::core::scroll::{ScrollSample, SectionId, SectionTop, Viewport};
use ui::core::{Locale, PageConfig, PageEvent, PageSession};

/// Sections stacked 800px apart starting at the document top.
struct StackedPage {
    scroll_y: f64,
    height: f64,
}

impl Viewport for StackedPage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_progress(&self) -> f64 {
        self.scroll_y / self.height
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        let idx = SectionId::ORDER.iter().position(|s| *s == id)?;
        Some(idx as f64 * 800.0 - self.scroll_y)
    }
}

fn sample_at(scroll_y: f64) -> ScrollSample {
    let page = StackedPage {
        scroll_y,
        height: 4_000.0,
    };
    ScrollSample {
        scroll_y,
        progress: page.scroll_progress(),
        sections: SectionId::ORDER
            .iter()
            .map(|&id| SectionTop {
                id,
                top: page.section_top(id),
            })
            .collect(),
    }
}

fn mounted() -> PageSession {
    let mut session = PageSession::new(Catalog::builtin(), PageConfig::default());
    session.mount(&StackedPage {
        scroll_y: 0.0,
        height: 4_000.0,
    });
    session
}

#[test]
fn loading_ends_exactly_once() {
    let mut session = mounted();
    assert!(session.state().is_loading());

    session.advance(2_999);
    assert!(session.state().is_loading());
    session.advance(1);
    assert!(!session.state().is_loading());

    session.advance(60_000);
    assert!(!session.state().is_loading());
}

#[test]
fn highlight_chain_steps_then_pauses() {
    let mut session = mounted();
    assert_eq!(session.highlight_index(), 0);

    session.advance(1_699);
    assert_eq!(session.highlight_index(), 0);
    session.advance(1);
    assert_eq!(session.highlight_index(), 1);

    session.advance(1_700);
    assert_eq!(session.highlight_index(), 2);

    // Last target holds for the long pause before wrapping.
    session.advance(9_999);
    assert_eq!(session.highlight_index(), 2);
    session.advance(1);
    assert_eq!(session.highlight_index(), 0);

    session.advance(1_700);
    assert_eq!(session.highlight_index(), 1);
    assert_eq!(session.pending_timers(), 1);
}

#[test]
fn one_large_advance_fires_every_due_step() {
    let mut session = mounted();
    session.advance(1_700 + 1_700 + 10_000);
    assert_eq!(session.highlight_index(), 0);
    assert_eq!(session.pending_timers(), 1);
}

#[test]
fn scrolling_moves_the_active_section() {
    let mut session = mounted();
    assert_eq!(session.state().active_section(), SectionId::Hero);
    assert!(!session.state().show_floating_nav());

    assert!(session.handle(PageEvent::Scrolled(sample_at(1_700.0))));
    assert_eq!(session.state().active_section(), SectionId::Skills);
    assert!(session.state().show_floating_nav());
    assert!(session.state().show_back_to_top());
    assert!((session.state().scroll_progress() - 0.425).abs() < 1e-9);

    assert!(!session.handle(PageEvent::Scrolled(sample_at(1_700.0))));
}

#[test]
fn selections_survive_clock_and_scroll() {
    let mut session = mounted();
    session.state_mut().set_locale(Locale::FrFr);
    session.state_mut().set_active_project(2);
    session.advance(5_000);
    session.handle(PageEvent::Scrolled(sample_at(2_300.0)));

    assert_eq!(session.state().locale(), Locale::FrFr);
    assert_eq!(session.state().active_project_index(), 2);
    assert_eq!(session.state().active_section(), SectionId::Projects);
}

#[test]
fn teardown_stops_the_page() {
    let mut session = mounted();
    assert!(session.is_listening(ListenerKind::AnimationFrame));
    session.advance(1_700);
    session.teardown();

    assert_eq!(session.pending_timers(), 0);
    assert_eq!(session.next_wake_ms(), None);
    for kind in ListenerKind::ALL {
        assert!(!session.is_listening(kind));
    }

    let index = session.highlight_index();
    assert!(!session.advance(60_000));
    assert!(!session.handle(PageEvent::PointerMoved(PointerSample { x: 5.0, y: 5.0 })));
    assert_eq!(session.highlight_index(), index);
    assert!(session.state().is_loading());
    assert_eq!(session.glow().origin(), None);
}

//! The single portfolio page.
//!
//! `Home` owns the [`PageSession`] and shares it with every section through
//! context. The session is mounted against a top-of-page viewport when the
//! page is created and the page clock starts right away, so loading ends on
//! time even if no DOM sample ever arrives. The scroll watch posts a sample as
//! soon as it attaches, which corrects the nav reading. Samples that would not
//! change anything never write the session. Dropping the page tears the
//! session down, which stops the clock and the background frames.

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, trace};

use crate::components::dom::{self, use_dom_watch};
use crate::components::{
    Background, BackToTop, CursorGlow, FloatingNav, LanguageSwitcher, LoadingScreen, SiteHeader,
};
use crate::content::Catalog;
use crate::core::decor::{PointerSample, ThemeSample};
use crate::core::listeners::ListenerKind;
use crate::core::scroll::ScrollSample;
use crate::core::timing::sleep_ms;
use crate::core::{PageConfig, PageEvent, PageSession};
use crate::sections::about::AboutSection;
use crate::sections::contact::ContactSection;
use crate::sections::footer::SiteFooter;
use crate::sections::hero::HeroSection;
use crate::sections::projects::ProjectsSection;
use crate::sections::skills::SkillsSection;

#[component]
pub fn Home(#[props(default)] config: PageConfig) -> Element {
    let mut session = use_context_provider(|| {
        let mut session = PageSession::new(Catalog::builtin(), config);
        session.mount(&ScrollSample::default());
        Signal::new(session)
    });
    use_hook(move || spawn_clock(session));

    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            if session.peek().is_torn_down() {
                break;
            }
            if !session.peek().would_change(&event) {
                continue;
            }
            let changed = session.write().handle(event);
            trace!(changed, "page event");
        }
    });

    use_dom_watch(ListenerKind::Scroll, dom::scroll_watch_script(), move |sample: ScrollSample| {
        events.send(PageEvent::Scrolled(sample));
    });
    use_dom_watch(ListenerKind::PointerMove, dom::pointer_watch_script(), move |sample: PointerSample| {
        events.send(PageEvent::PointerMoved(sample));
    });
    use_dom_watch(ListenerKind::ThemeWatch, dom::theme_watch_script(), move |sample: ThemeSample| {
        events.send(PageEvent::ThemeChanged(sample));
    });

    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            session.teardown();
        }
    });

    let loading = use_memo(move || session.read().state().is_loading());
    let content_class = if loading() {
        "page-content page-content--loading"
    } else {
        "page-content"
    };

    rsx! {
        Background {}
        CursorGlow {}
        LoadingScreen {}
        div {
            class: content_class,
            aria_busy: if loading() { "true" } else { "false" },
            SiteHeader {}
            FloatingNav {}
            main { class: "page",
                HeroSection {}
                AboutSection {}
                SkillsSection {}
                ProjectsSection {}
                ContactSection {}
            }
            SiteFooter {}
        }
        div { class: "corner-controls",
            LanguageSwitcher {}
            BackToTop {}
        }
    }
}

/// Sleep until the session's next deadline and advance it, until nothing is
/// pending or the session is torn down.
fn spawn_clock(mut session: Signal<PageSession>) {
    spawn(async move {
        debug!("page clock started");
        loop {
            let wake = session.try_peek().ok().and_then(|s| s.next_wake_ms());
            let Some(wait) = wake else {
                break;
            };
            sleep_ms(wait).await;
            match session.try_write() {
                Ok(mut current) => {
                    current.advance(wait);
                }
                Err(_) => break,
            }
        }
        debug!("page clock stopped");
    });
}

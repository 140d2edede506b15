use dioxus::prelude::*;

use crate::core::config::BackgroundConfig;
use crate::core::decor::{FrameClock, Palette, PointField};
use crate::core::format::translate3d;
use crate::core::listeners::ListenerKind;
use crate::core::session::PageSession;
use crate::core::timing::sleep_ms;

/// Pixels per point-field unit.
const POINT_SCALE_PX: f32 = 60.0;

/// Rotating point field behind the page. Reads the scroll progress and the
/// theme; never writes to the session.
#[component]
pub fn Background() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let mut clock = use_signal(FrameClock::default);
    let config = use_hook(|| session.peek().config().background.clone());
    let frame_ms = config.frame_interval_ms.max(1);

    use_future(move || async move {
        loop {
            sleep_ms(frame_ms).await;
            let Ok(current) = session.try_peek() else {
                break;
            };
            if current.is_torn_down() {
                break;
            }
            let listening = current.is_listening(ListenerKind::AnimationFrame);
            drop(current);
            if listening {
                clock.write().advance(frame_ms);
            }
        }
    });

    let progress = use_memo(move || session.read().state().scroll_progress());
    let palette = use_memo(move || Palette::for_theme(session.read().theme()));
    let transform = clock.read().rotation(progress()).css_transform();
    let palette = palette();

    rsx! {
        div {
            class: "backdrop",
            aria_hidden: "true",
            style: "opacity: {palette.opacity}; mix-blend-mode: {palette.blend};",
            div {
                class: "backdrop__field",
                style: "transform: {transform}",
                PointCloud { config, color: palette.color }
            }
        }
    }
}

#[component]
fn PointCloud(config: BackgroundConfig, color: &'static str) -> Element {
    let field = use_hook(|| PointField::generate(&config));

    rsx! {
        for (idx, offset) in field
            .points()
            .iter()
            .map(|p| translate3d(p.x * POINT_SCALE_PX, p.y * POINT_SCALE_PX, p.z * POINT_SCALE_PX))
            .enumerate()
        {
            span {
                key: "{idx}",
                class: "backdrop__point",
                style: "background: {color}; transform: {offset}",
            }
        }
    }
}

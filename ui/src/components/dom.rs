//! DOM interop through `document::eval`.
//!
//! Watches are small scripts that post JSON samples back with `dioxus.send`.
//! Every watch registers a detach function under
//! `window.__folioWatchers[<key>]`; installing a key again first detaches the
//! previous registration, and [`use_dom_watch`] runs the detach script when the
//! owning component is dropped.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::core::listeners::ListenerKind;
use crate::core::scroll::SectionId;

const REGISTRY: &str = "window.__folioWatchers = window.__folioWatchers || {}";

/// Run `install` as a watch for `kind` and feed every posted sample to
/// `on_sample` until the component is dropped.
pub fn use_dom_watch<T, F>(kind: ListenerKind, install: String, mut on_sample: F)
where
    T: DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    let key = kind.key();
    use_hook(move || {
        spawn(async move {
            debug!(key, "dom watch attached");
            let mut eval = document::eval(&wrap_install(key, &install));
            loop {
                match eval.recv::<T>().await {
                    Ok(sample) => {
                        trace!(key, "dom sample");
                        on_sample(sample);
                    }
                    Err(err) => {
                        warn!(key, ?err, "dom watch channel closed");
                        break;
                    }
                }
            }
        });
    });
    use_drop(move || {
        debug!(key, "dom watch detached");
        let _ = document::eval(&detach_script(key));
    });
}

/// `body` must define `attach()` returning its own cleanup function.
fn wrap_install(key: &str, body: &str) -> String {
    format!(
        r#"
        const registry = ({REGISTRY});
        if (registry["{key}"]) registry["{key}"]();
        {body}
        await new Promise((resolve) => {{
            const cleanup = attach();
            registry["{key}"] = () => {{
                cleanup();
                delete registry["{key}"];
                resolve();
            }};
        }});
        "#
    )
}

fn detach_script(key: &str) -> String {
    format!(
        r#"
        const registry = ({REGISTRY});
        if (registry["{key}"]) registry["{key}"]();
        "#
    )
}

/// Passive scroll watch posting a [`ScrollSample`] at install and on every
/// scroll event.
///
/// [`ScrollSample`]: crate::core::scroll::ScrollSample
pub fn scroll_watch_script() -> String {
    let ids: Vec<&str> = SectionId::ORDER.iter().map(|id| id.anchor()).collect();
    let ids = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
        const ids = {ids};
        const sample = () => {{
            const doc = document.documentElement;
            const max = doc.scrollHeight - window.innerHeight;
            dioxus.send({{
                scroll_y: window.scrollY,
                progress: max > 0 ? window.scrollY / max : 0,
                sections: ids.map((id) => {{
                    const el = document.getElementById(id);
                    return {{ id, top: el ? el.getBoundingClientRect().top : null }};
                }}),
            }});
        }};
        const attach = () => {{
            window.addEventListener("scroll", sample, {{ passive: true }});
            window.addEventListener("resize", sample, {{ passive: true }});
            sample();
            return () => {{
                window.removeEventListener("scroll", sample);
                window.removeEventListener("resize", sample);
            }};
        }};
        "#
    )
}

pub fn pointer_watch_script() -> String {
    r#"
    const move = (event) => dioxus.send({ x: event.clientX, y: event.clientY });
    const attach = () => {
        window.addEventListener("mousemove", move, { passive: true });
        return () => window.removeEventListener("mousemove", move);
    };
    "#
    .to_string()
}

/// Dark unless the root element carries the `light` class.
pub fn theme_watch_script() -> String {
    r#"
    const root = document.documentElement;
    const read = () => dioxus.send({ dark: !root.classList.contains("light") });
    const attach = () => {
        const observer = new MutationObserver(read);
        observer.observe(root, { attributes: true, attributeFilter: ["class"] });
        read();
        return () => observer.disconnect();
    };
    "#
    .to_string()
}

/// Smooth-scroll so the section lands `offset` pixels below the viewport top.
pub fn scroll_to_section(id: SectionId, offset: f64) {
    let anchor = id.anchor();
    let _ = document::eval(&format!(
        r#"
        const el = document.getElementById("{anchor}");
        if (el) {{
            const top = el.getBoundingClientRect().top + window.scrollY - {offset};
            window.scrollTo({{ top, behavior: "smooth" }});
        }}
        "#
    ));
}

pub fn scroll_to_top() {
    let _ = document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}

/// Swap the theme class on the root element; the theme watch reports it back.
pub fn apply_theme_class(class_name: &str, previous: &str) {
    let _ = document::eval(&format!(
        r#"
        const root = document.documentElement;
        root.classList.remove("{previous}");
        root.classList.add("{class_name}");
        "#
    ));
}

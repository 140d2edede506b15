//! Page sections.
//!
//! Each section has a pure `model` that projects the [`SelectionState`] (plus
//! the Fluent chrome strings) into a `PartialEq` view value, and a `view` with
//! the Dioxus component that renders it. Components build their model through
//! [`use_session_view`], keyed on the inputs the section reads, so scroll and
//! pointer samples do not rebuild it and a section only re-renders when its
//! own view value changes.
//!
//! [`SelectionState`]: crate::core::selection::SelectionState

use dioxus::prelude::{use_context, use_memo, Memo, Readable, Signal};

use crate::core::session::PageSession;

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;

/// A tab or chip; `value` is what selecting it applies.
#[derive(Debug, Clone, PartialEq)]
pub struct TabLabel<T> {
    pub value: T,
    pub label: String,
    pub active: bool,
}

impl<T: PartialEq> TabLabel<T> {
    pub fn new(value: T, label: String, current: &T) -> Self {
        let active = value == *current;
        Self {
            value,
            label,
            active,
        }
    }
}

/// Small uppercase label plus the section title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    pub label: String,
    pub title: String,
}

/// Memo of a view built from the shared session. `build` only re-runs when
/// `key` changes, so samples that leave the key alone cost one key read.
pub(crate) fn use_session_view<K, T>(
    key: fn(&PageSession) -> K,
    build: fn(&PageSession) -> T,
) -> Memo<T>
where
    K: PartialEq + 'static,
    T: PartialEq + 'static,
{
    let session = use_context::<Signal<PageSession>>();
    let inputs = use_memo(move || key(&session.read()));
    use_memo(move || {
        let _inputs = inputs.read();
        build(&session.peek())
    })
}

/// Class list for a pill-style tab button.
pub(crate) fn tab_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} {base}--active")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_label_marks_the_current_value() {
        let tab = TabLabel::new(2, "two".to_string(), &2);
        assert!(tab.active);
        assert!(!TabLabel::new(1, "one".to_string(), &2).active);
    }

    #[test]
    fn active_tabs_get_a_modifier_class() {
        assert_eq!(tab_class("tabs__tab", true), "tabs__tab tabs__tab--active");
        assert_eq!(tab_class("tabs__tab", false), "tabs__tab");
    }
}

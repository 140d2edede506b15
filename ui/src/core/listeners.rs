//! Bookkeeping for page-level listeners.
//!
//! Every mount-time registration must be matched by a teardown-time
//! unregistration. [`ListenerSet`] records what is attached so teardown can
//! detach everything and tests can assert nothing lingers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    PointerMove,
    ThemeWatch,
    AnimationFrame,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::Scroll,
        ListenerKind::PointerMove,
        ListenerKind::ThemeWatch,
        ListenerKind::AnimationFrame,
    ];

    /// Stable registry key shared with the DOM install/detach scripts.
    pub fn key(self) -> &'static str {
        match self {
            ListenerKind::Scroll => "scroll",
            ListenerKind::PointerMove => "pointer",
            ListenerKind::ThemeWatch => "theme",
            ListenerKind::AnimationFrame => "frame",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerSet {
    attached: Vec<ListenerKind>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `kind` was already attached.
    pub fn attach(&mut self, kind: ListenerKind) -> bool {
        if self.is_attached(kind) {
            return false;
        }
        self.attached.push(kind);
        true
    }

    pub fn detach(&mut self, kind: ListenerKind) -> bool {
        let before = self.attached.len();
        self.attached.retain(|attached| *attached != kind);
        before != self.attached.len()
    }

    pub fn detach_all(&mut self) -> usize {
        let detached = self.attached.len();
        self.attached.clear();
        detached
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_idempotent() {
        let mut set = ListenerSet::new();
        assert!(set.attach(ListenerKind::Scroll));
        assert!(!set.attach(ListenerKind::Scroll));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn detach_all_leaves_nothing_behind() {
        let mut set = ListenerSet::new();
        for kind in ListenerKind::ALL {
            set.attach(kind);
        }
        assert_eq!(set.detach_all(), 4);
        assert!(ListenerKind::ALL.iter().all(|kind| !set.is_attached(*kind)));
        assert!(!set.detach(ListenerKind::ThemeWatch));
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = ListenerKind::ALL.iter().map(|k| k.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ListenerKind::ALL.len());
    }
}

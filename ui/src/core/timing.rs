//! Timer utilities.
//!
//! [`Timeline`] is a virtual clock with one-shot timers. The page session keeps
//! all of its pending timers here, so cancelling everything is a single
//! [`Timeline::cancel_all`] call and tests can fast-forward deterministically.
//! [`sleep_ms`] is the platform sleep the UI uses to move the clock forward.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, PartialEq)]
struct Pending<E> {
    id: TimerId,
    due_ms: u64,
    event: E,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<E> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            event,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        before != self.pending.len()
    }

    /// Drop every pending timer; returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Milliseconds until the earliest pending timer is due.
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|timer| timer.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its deadline. Equal deadlines pop in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
            .map(|(idx, _)| idx)?;
        let timer = self.pending.remove(position);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.event)
    }

    /// Move the clock forward to `until_ms` without firing anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u64::from(u32::MAX)) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

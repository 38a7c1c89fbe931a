//! Delay scheduler
//!
//! One-shot deadlines keyed by [`TimerId`]. Nothing runs on its own: the
//! owner polls [`DelayScheduler::take_due`] from its frame tick and reacts to
//! the ids that fired.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use vloop_core::clock::Millis;

new_key_type! {
    pub struct TimerId;
}

/// Pending one-shot timers
#[derive(Debug, Default)]
pub struct DelayScheduler {
    timers: SlotMap<TimerId, Millis>,
}

impl DelayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer that becomes due `delay_ms` after `now`
    pub fn post_delayed(&mut self, now: Millis, delay_ms: Millis) -> TimerId {
        let deadline = now.saturating_add(delay_ms);
        let id = self.timers.insert(deadline);
        tracing::trace!(?id, deadline, "timer posted");
        id
    }

    /// Cancel one timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            tracing::trace!(count = self.timers.len(), "timers cancelled");
        }
        self.timers.clear();
    }

    /// Remove and return all timers due at `now` with their deadlines,
    /// earliest first
    pub fn take_due(&mut self, now: Millis) -> SmallVec<[(TimerId, Millis); 2]> {
        let mut due: SmallVec<[(TimerId, Millis); 2]> = self
            .timers
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(id, &deadline)| (id, deadline))
            .collect();
        due.sort_by_key(|&(_, deadline)| deadline);

        for &(id, _) in &due {
            self.timers.remove(id);
        }
        due
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.values().copied().min()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_at_deadline() {
        let mut scheduler = DelayScheduler::new();
        let id = scheduler.post_delayed(100, 1000);

        assert!(scheduler.take_due(1099).is_empty());
        assert_eq!(scheduler.take_due(1100).as_slice(), &[(id, 1100)]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_due_timers_ordered_by_deadline() {
        let mut scheduler = DelayScheduler::new();
        let late = scheduler.post_delayed(0, 300);
        let early = scheduler.post_delayed(0, 100);

        assert_eq!(scheduler.next_deadline(), Some(100));
        assert_eq!(scheduler.take_due(500).as_slice(), &[(early, 100), (late, 300)]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = DelayScheduler::new();
        let id = scheduler.post_delayed(0, 10);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(100).is_empty());
    }

    #[test]
    fn test_cancel_all_is_idempotent() {
        let mut scheduler = DelayScheduler::new();
        scheduler.post_delayed(0, 10);
        scheduler.post_delayed(0, 20);

        scheduler.cancel_all();
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_deadline(), None);
    }
}

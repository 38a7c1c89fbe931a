//! Time sources
//!
//! Everything time-driven in vloop reads a [`Clock`] instead of calling
//! `Instant::now()` directly, so tests can step virtual time frame by frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds since the clock's origin
pub type Millis = u64;

/// A monotonic millisecond time source
pub trait Clock {
    /// Current time in milliseconds. Never decreases.
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Virtual clock advanced by hand
///
/// Clones share the same time, so a test can keep a handle while the widget
/// owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    /// Create a clock starting at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at `ms`
    pub fn starting_at(ms: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(ms)),
        }
    }

    /// Move time forward by `ms`
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time. Earlier times are ignored to keep the clock monotonic.
    pub fn set(&self, ms: Millis) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(16);
        handle.advance(16);
        assert_eq!(clock.now_ms(), 32);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::starting_at(100);
        clock.set(50);
        assert_eq!(clock.now_ms(), 100);

        clock.set(150);
        assert_eq!(clock.now_ms(), 150);
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}

//! Integer value animator
//!
//! Interpolates an `i32` from a start to an end value over a fixed duration.
//! The animator does not own a timer: the caller samples it with the current
//! clock time on every frame.

use vloop_core::clock::Millis;

use crate::easing::Easing;

/// One sampled frame of a [`ValueAnimator`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    pub value: i32,
    /// True on the frame that reached the end value
    pub finished: bool,
}

/// A time-based animation of a single integer value
#[derive(Clone, Debug)]
pub struct ValueAnimator {
    from: i32,
    to: i32,
    duration_ms: Millis,
    easing: Easing,
    started_at: Option<Millis>,
    value: i32,
    finished: bool,
}

impl ValueAnimator {
    pub fn new(from: i32, to: i32, duration_ms: Millis) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
            started_at: None,
            value: from,
            finished: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start (or restart) the animation at `now`
    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
        self.value = self.from;
        self.finished = false;
    }

    /// Started and not yet finished
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Time at which the animation reaches its end value, once started
    pub fn end_time(&self) -> Option<Millis> {
        self.started_at
            .map(|started_at| started_at.saturating_add(self.duration_ms))
    }

    /// Linear progress in `[0, 1]` at `now`
    pub fn progress(&self, now: Millis) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.finished || self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(started_at);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    /// Sample the animation at `now`
    ///
    /// The returned value never moves back towards `from`, even if the
    /// easing curve rounds unevenly. `finished` is reported exactly once.
    pub fn sample(&mut self, now: Millis) -> Option<AnimationFrame> {
        if !self.is_running() {
            return None;
        }

        let progress = self.progress(now);
        if progress >= 1.0 {
            return Some(self.finish());
        }

        let eased = self.easing.apply(progress);
        let raw = self.from + ((self.to - self.from) as f32 * eased).round() as i32;
        self.value = if self.to >= self.from {
            raw.clamp(self.value, self.to)
        } else {
            raw.clamp(self.to, self.value)
        };

        Some(AnimationFrame {
            value: self.value,
            finished: false,
        })
    }

    /// Jump straight to the end value
    ///
    /// Returns the final frame if the animation was running, `None` if it had
    /// not started or already finished.
    pub fn end(&mut self) -> Option<AnimationFrame> {
        self.is_running().then(|| self.finish())
    }

    fn finish(&mut self) -> AnimationFrame {
        self.value = self.to;
        self.finished = true;
        AnimationFrame {
            value: self.to,
            finished: true,
        }
    }
}

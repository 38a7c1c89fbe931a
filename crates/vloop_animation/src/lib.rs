//! vloop Animation System
//!
//! Time-based value animation and delayed work, driven by a
//! [`vloop_core::Clock`] rather than wall-clock sleeps.
//!
//! # Features
//!
//! - **Easing**: monotonic curves, accelerate-decelerate by default
//! - **Value animators**: integer interpolation that can be force-ended
//! - **Delay scheduler**: one-shot deadlines that can be cancelled in bulk

pub mod animator;
pub mod easing;
pub mod scheduler;

pub use animator::{AnimationFrame, ValueAnimator};
pub use easing::Easing;
pub use scheduler::{DelayScheduler, TimerId};

//! vloop Core Runtime
//!
//! Foundational primitives shared by the vloop crates:
//!
//! - **Clocks**: a monotonic millisecond time source, real or virtual
//! - **State Machines**: flat `(state, event) -> state` tables for widget phases
//! - **Geometry**: integer pixel sizes, rectangles and measure specs
//!
//! # Example
//!
//! ```rust
//! use vloop_core::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let handle = clock.clone();
//!
//! handle.advance(250);
//! assert_eq!(clock.now_ms(), 250);
//! ```

pub mod clock;
pub mod fsm;
pub mod geometry;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{MeasureSpec, Rect, Size};

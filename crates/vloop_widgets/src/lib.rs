//! vloop Widget Library
//!
//! The looping view and the binder contract its content plugs into.

pub mod binder;
pub mod comment;
pub mod config;
pub mod error;
pub mod layout;
pub mod looping;

pub use binder::{SlotBinder, SlotRole};
pub use comment::{CommentBinder, CommentSlot, CommentStyle};
pub use config::LoopConfig;
pub use error::ConfigError;
pub use layout::{FadingEdges, SlotLayout, SlotRects};
pub use looping::{LoopPhase, LoopState, LoopingView, TickOutcome};

//! Slot binder contract
//!
//! A [`LoopingView`](crate::looping::LoopingView) owns exactly two render
//! targets and knows nothing about what is drawn in them. A [`SlotBinder`]
//! creates those targets, renders items into them, and measures them.

use vloop_core::geometry::{MeasureSpec, Size};

/// The two render targets of a looping view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// Slot resting at the visible center
    Main,
    /// Slot staged below the viewport, revealed by the next slide
    Next,
}

impl SlotRole {
    pub const ALL: [SlotRole; 2] = [SlotRole::Main, SlotRole::Next];

    /// Index into the view's slot array
    pub const fn index(self) -> usize {
        match self {
            SlotRole::Main => 0,
            SlotRole::Next => 1,
        }
    }
}

/// Renders logical items into the two slots of a looping view
pub trait SlotBinder {
    /// Element type of the data sequence
    type Item;
    /// Rendered content of one slot
    type Slot: Clone;

    /// Construct the render target for `role`. Called once per role.
    fn create_slot(&mut self, role: SlotRole) -> Self::Slot;

    /// Render `item`, found at logical `position`, into `slot`
    fn bind(&mut self, role: SlotRole, slot: &mut Self::Slot, position: usize, item: &Self::Item);

    /// Make `main` show exactly what `next` shows.
    ///
    /// Runs at the end of every slide, right before `next` is rebound. It must
    /// copy the *rendered* state rather than re-render the same position:
    /// renderers that ellipsize or otherwise transform content while drawing
    /// would otherwise flash a different result for one frame.
    fn carry_over(&mut self, next: &Self::Slot, main: &mut Self::Slot) {
        main.clone_from(next);
    }

    /// Desired size of `slot` under the given specs
    fn measure(&self, slot: &Self::Slot, width: MeasureSpec, height: MeasureSpec) -> Size;
}

//! Slot measurement and placement
//!
//! The viewport is one item tall plus `spacing` above and below. MAIN rests
//! centered in it; NEXT rests one full viewport height below the top. Both
//! move up by the same offset, so after one stride (item height plus one
//! spacing) NEXT sits exactly where MAIN started.

use vloop_core::geometry::{Rect, Size};

/// Measured sizes for one layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotLayout {
    viewport: Size,
    main: Size,
    next: Size,
    spacing: i32,
    inset: i32,
}

/// Placed rectangles of both slots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotRects {
    pub main: Rect,
    pub next: Rect,
}

impl SlotLayout {
    /// Record a measure pass. `main` and `next` are the slots' measured sizes.
    pub fn new(width: i32, main: Size, next: Size, spacing: i32, inset: i32) -> Self {
        Self {
            viewport: Size::new(width, main.height + spacing * 2),
            main,
            next,
            spacing,
            inset,
        }
    }

    /// Size reported to the parent
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Width left for the slots after the horizontal inset
    pub fn available_width(width: i32, inset: i32) -> i32 {
        (width - inset * 2).max(0)
    }

    /// Distance both slots travel during one slide
    pub fn stride(&self) -> i32 {
        self.main.height + self.spacing
    }

    /// Place both slots for the given upward offset
    pub fn place(&self, offset: i32) -> SlotRects {
        let main_top = (self.viewport.height - self.main.height) / 2 - offset;
        let next_top = self.viewport.height - offset;
        SlotRects {
            main: Rect::from_origin_size(self.inset, main_top, self.main),
            next: Rect::from_origin_size(self.inset, next_top, self.next),
        }
    }
}

/// Fading edge description for the host renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadingEdges {
    pub length: i32,
    pub top_strength: f32,
    pub bottom_strength: f32,
}

impl FadingEdges {
    /// Both edges at full strength, whatever the scroll state
    pub fn full(length: i32) -> Self {
        Self {
            length,
            top_strength: 1.0,
            bottom_strength: 1.0,
        }
    }
}

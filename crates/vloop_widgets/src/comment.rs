//! Comment binder
//!
//! Renders plain-text comments into single-line slots. Text longer than the
//! configured budget is ellipsized while rendering, which is exactly the
//! kind of lossy transform carry-over exists for: MAIN must inherit NEXT's
//! ellipsized text, not re-derive it.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use vloop_core::geometry::{MeasureSpec, Size};

use crate::binder::{SlotBinder, SlotRole};

const ELLIPSIS: &str = "…";

/// Metrics used to measure and ellipsize comments
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentStyle {
    /// Advance of one display cell, in pixels. Wide (CJK, emoji) graphemes
    /// take two cells.
    pub char_width: i32,
    pub line_height: i32,
    /// Padding (horizontal, vertical)
    pub padding: (i32, i32),
    /// Widest rendered text in display cells, ellipsis included. `None`
    /// renders in full.
    pub max_width: Option<usize>,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 20,
            padding: (12, 4),
            max_width: None,
        }
    }
}

/// One rendered comment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentSlot {
    comment: Option<String>,
    text: String,
    position: Option<usize>,
}

impl CommentSlot {
    /// Source comment, as supplied
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Text as drawn (possibly ellipsized)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Logical position last rendered into this slot
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_none()
    }
}

/// [`SlotBinder`] for `String` comments
#[derive(Clone, Debug, Default)]
pub struct CommentBinder {
    style: CommentStyle,
    binds: usize,
}

impl CommentBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: CommentStyle) -> Self {
        Self { style, binds: 0 }
    }

    pub fn style(&self) -> &CommentStyle {
        &self.style
    }

    /// Change the metrics used by later binds. Slots already rendered keep
    /// their text until rebound.
    pub fn set_style(&mut self, style: CommentStyle) {
        self.style = style;
    }

    /// Number of `bind` calls so far
    pub fn bind_count(&self) -> usize {
        self.binds
    }

    fn render(&self, comment: &str) -> String {
        match self.style.max_width {
            Some(max) => ellipsize(comment, max),
            None => comment.to_string(),
        }
    }
}

impl SlotBinder for CommentBinder {
    type Item = String;
    type Slot = CommentSlot;

    fn create_slot(&mut self, _role: SlotRole) -> CommentSlot {
        CommentSlot::default()
    }

    fn bind(&mut self, role: SlotRole, slot: &mut CommentSlot, position: usize, item: &String) {
        self.binds += 1;
        slot.text = self.render(item);
        slot.comment = Some(item.clone());
        slot.position = Some(position);
        tracing::trace!(?role, position, text = %slot.text, "comment bound");
    }

    fn measure(&self, slot: &CommentSlot, width: MeasureSpec, height: MeasureSpec) -> Size {
        if slot.is_empty() {
            return Size::new(width.resolve(0), height.resolve(0));
        }

        let (pad_h, pad_v) = self.style.padding;
        let cells = slot.text.width() as i32;
        let desired_width = cells * self.style.char_width + pad_h * 2;
        let desired_height = self.style.line_height + pad_v * 2;

        Size::new(width.resolve(desired_width), height.resolve(desired_height))
    }
}

/// Shorten `text` to at most `max_width` display cells, ending in an ellipsis
///
/// Cuts only between grapheme clusters, so flags, ZWJ sequences and combining
/// marks are kept whole or dropped whole. A budget too small for the ellipsis
/// truncates without one.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ELLIPSIS.width();
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width);
    }

    let mut out = truncate_to_width(text, max_width - ellipsis_width);
    out.push_str(ELLIPSIS);
    out
}

/// Longest grapheme-aligned prefix of `text` that fits in `max_width` cells
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if used + width > max_width {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out
}

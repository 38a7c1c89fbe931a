//! Text rendering of a looping view
//!
//! Each pixel row of the view becomes one terminal row and each pixel column
//! one display cell, so the demo uses one-cell comment metrics. Wide
//! graphemes fill two cells.

use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use vloop_core::clock::Clock;
use vloop_core::geometry::Rect;
use vloop_widgets::{CommentBinder, CommentSlot, CommentStyle, LoopingView};

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Comment metrics where one pixel is one cell and one line is one row
pub fn terminal_style(width: i32) -> CommentStyle {
    CommentStyle {
        char_width: 1,
        line_height: 1,
        padding: (1, 0),
        max_width: Some((width - 2).max(1) as usize),
    }
}

/// Rasterize the view's last layout into rows exactly `width` cells wide
pub fn rasterize<C: Clock>(view: &LoopingView<CommentBinder, C>, width: i32, height: i32) -> Vec<String> {
    let rects = view.slot_rects();
    let padding = view.binder().style().padding;
    let width = width.max(0) as usize;

    (0..height)
        .map(|y| {
            // The second cell of a wide grapheme is left empty
            let mut cells = vec![" ".to_string(); width];
            for (rect, slot) in [(rects.main, view.main_slot()), (rects.next, view.next_slot())] {
                paint(&mut cells, y, rect, slot, padding);
            }
            cells.concat()
        })
        .collect()
}

fn paint(cells: &mut [String], y: i32, rect: Rect, slot: &CommentSlot, padding: (i32, i32)) {
    let line = y - rect.top - padding.1;
    if y < rect.top || y >= rect.bottom || line != 0 {
        return;
    }
    let start = (rect.left + padding.0).max(0) as usize;
    let end = ((rect.right - padding.0).max(0) as usize).min(cells.len());

    let mut col = start;
    for grapheme in slot.text().graphemes(true) {
        let width = grapheme.width();
        if width == 0 {
            continue;
        }
        if col + width > end {
            break;
        }
        cells[col] = grapheme.to_string();
        for cell in &mut cells[col + 1..col + width] {
            cell.clear();
        }
        col += width;
    }
}

/// Redraws a view in place on an ANSI terminal, or appends plain lines
pub struct TextRenderer {
    width: i32,
    plain: bool,
    drawn_rows: usize,
}

impl TextRenderer {
    pub fn new(width: i32, plain: bool) -> Self {
        Self {
            width,
            plain,
            drawn_rows: 0,
        }
    }

    /// Draw the whole viewport, replacing the previous frame
    pub fn draw<C: Clock, W: Write>(
        &mut self,
        view: &LoopingView<CommentBinder, C>,
        height: i32,
        out: &mut W,
    ) -> io::Result<()> {
        let rows = rasterize(view, self.width, height);
        let fade = view.fading_edges().length.max(0) as usize;

        if self.drawn_rows > 0 {
            write!(out, "\x1b[{}A", self.drawn_rows)?;
        }
        for (i, row) in rows.iter().enumerate() {
            let faded = i < fade || i + fade >= rows.len();
            if faded {
                writeln!(out, "\x1b[2K{DIM}|{row}|{RESET}")?;
            } else {
                writeln!(out, "\x1b[2K|{row}|")?;
            }
        }
        self.drawn_rows = rows.len();
        out.flush()
    }

    /// Print the settled item on its own line
    pub fn draw_settled<C: Clock, W: Write>(
        &mut self,
        view: &LoopingView<CommentBinder, C>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(
            out,
            "[{:>3}] {}",
            view.current_position(),
            view.main_slot().text()
        )?;
        out.flush()
    }

    pub fn is_plain(&self) -> bool {
        self.plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vloop_core::clock::ManualClock;
    use vloop_widgets::LoopConfig;

    fn view(width: i32) -> (LoopingView<CommentBinder, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = LoopConfig::default().spacing(1).fade_length(1);
        let binder = CommentBinder::with_style(terminal_style(width));
        (LoopingView::with_clock(binder, config, clock.clone()), clock)
    }

    #[test]
    fn test_rest_frame_shows_main_only() {
        let (mut view, _clock) = view(12);
        let comments: Arc<[String]> = vec!["first".to_string(), "second".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(12);
        view.layout();

        let rows = rasterize(&view, 12, size.height);
        assert_eq!(rows, vec![" ".repeat(12), " first      ".to_string(), " ".repeat(12)]);
    }

    #[test]
    fn test_slide_end_frame_shows_next_in_main_place() {
        let (mut view, clock) = view(12);
        let comments: Arc<[String]> = vec!["first".to_string(), "second".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(12);

        clock.advance(1500);
        view.tick();
        view.measure(12);
        view.layout();

        let rows = rasterize(&view, 12, size.height);
        assert_eq!(rows[1], " second     ");
    }

    #[test]
    fn test_long_comment_is_ellipsized_to_width() {
        let (mut view, _clock) = view(8);
        let comments: Arc<[String]> = vec!["a very long comment".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(8);
        view.layout();

        let rows = rasterize(&view, 8, size.height);
        assert_eq!(rows[1], " a ver… ");
    }

    #[test]
    fn test_wide_text_keeps_row_width() {
        let (mut view, _clock) = view(8);
        let comments: Arc<[String]> = vec!["漢字漢字".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(8);
        view.layout();

        let rows = rasterize(&view, 8, size.height);
        assert_eq!(rows[1], " 漢字…  ");
        assert!(rows.iter().all(|row| row.width() == 8));
    }

    #[test]
    fn test_flag_is_painted_whole() {
        let (mut view, _clock) = view(10);
        let comments: Arc<[String]> = vec!["🇫🇷 ok".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(10);
        view.layout();

        let rows = rasterize(&view, 10, size.height);
        assert!(rows[1].contains("🇫🇷"));
        assert!(rows[1].ends_with("ok "));
    }

    #[test]
    fn test_draw_redraws_in_place() {
        let (mut view, _clock) = view(10);
        let comments: Arc<[String]> = vec!["x".to_string()].into();
        view.set_data(Some(comments), 0);
        let size = view.measure(10);
        view.layout();

        let mut renderer = TextRenderer::new(10, false);
        let mut out = Vec::new();
        renderer.draw(&view, size.height, &mut out).unwrap();
        renderer.draw(&view, size.height, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[3A").count(), 1);
    }
}

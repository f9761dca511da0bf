//! Clipped drawing on top of a [`Surface`].

use crate::buffer::Style;
use crate::layout::Viewport;
use crate::terminal::Surface;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A surface plus the viewport of the frame being drawn.
///
/// [`Canvas::print`] never writes on or right of the border column; the
/// frame itself is drawn with [`Canvas::put`].
pub struct Canvas<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    view: Viewport,
}

impl<'a, S: Surface + ?Sized> Canvas<'a, S> {
    /// Wrap `surface` for one frame of size `view`.
    pub fn new(surface: &'a mut S, view: Viewport) -> Self {
        Self { surface, view }
    }

    /// Viewport of this frame.
    pub const fn view(&self) -> Viewport {
        self.view
    }

    /// Fill every cell with a blank in `style`.
    pub fn fill(&mut self, style: Style) {
        for y in 0..self.view.height {
            for x in 0..self.view.width {
                self.surface.set_cell(x, y, ' ', style);
            }
        }
    }

    /// Draw one character with no border clipping.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.surface.set_cell(x, y, ch, style);
    }

    /// Print `text` starting at column `x` of row `y`.
    ///
    /// Characters left of column 0 are skipped; printing stops at the first
    /// character that would reach the right border. Returns the number of
    /// columns the text advanced, whether drawn or clipped.
    pub fn print(&mut self, x: i32, y: u16, text: &str, style: Style) -> i32 {
        let limit = i32::from(self.view.right_limit());
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = i32::try_from(grapheme.width()).unwrap_or(1).clamp(1, 2);
            if col + width > limit {
                break;
            }
            if let (Ok(cx), Some(ch)) = (u16::try_from(col), grapheme.chars().next()) {
                self.surface.set_cell(cx, y, ch, style);
            }
            col += width;
        }
        col - x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MemorySurface;

    fn printed(width: u16, x: i32, text: &str) -> String {
        let mut surface = MemorySurface::new(width, 1);
        let mut canvas = Canvas::new(&mut surface, Viewport::new(width, 1));
        canvas.print(x, 0, text, Style::DEFAULT);
        surface.present().unwrap();
        surface.row(0)
    }

    #[test]
    fn test_print_stops_before_border() {
        assert_eq!(printed(10, 2, "abcdefghij"), "  abcdefg");
        assert_eq!(printed(10, 9, "x"), "");
        assert_eq!(printed(10, 50, "x"), "");
    }

    #[test]
    fn test_print_skips_left_of_origin() {
        assert_eq!(printed(10, -2, "abcdef"), "cdef");
    }

    #[test]
    fn test_wide_char_not_split_at_border() {
        // '日' at column 8 would touch the border column 9
        assert_eq!(printed(10, 7, "a日"), "       a");
    }

    #[test]
    fn test_fill() {
        let mut surface = MemorySurface::new(3, 2);
        let style = Style::new(crate::buffer::Rgb::YELLOW, crate::buffer::Rgb::BLACK);
        Canvas::new(&mut surface, Viewport::new(3, 2)).fill(style);
        surface.present().unwrap();
        assert_eq!(surface.cell(2, 1).unwrap().fg(), crate::buffer::Rgb::YELLOW);
    }
}

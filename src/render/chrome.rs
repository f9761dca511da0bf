//! Everything around the page content: frame, title, menu bar and the
//! instructions row.

use super::canvas::Canvas;
use crate::app::Page;
use crate::config::Theme;
use crate::layout::{centered_x, char_len, glyphs, section_title, top_edge, Ink, MenuGeometry, MIN_START_X};
use crate::terminal::Surface;

/// Key help shown above the menu.
pub const INSTRUCTIONS: &str = "← → Navigate | ↑ ↓ Scroll | Mouse: Click/Wheel | Q Quit";

/// Draw the box border with `title` centered in the top edge.
///
/// An empty title falls back to [`Page::FALLBACK_TITLE`].
pub fn draw_frame<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme, title: &str) {
    let view = canvas.view();
    let (width, height) = (view.width, view.height);
    if width == 0 || height == 0 {
        return;
    }
    let title = if title.is_empty() { Page::FALLBACK_TITLE } else { title };

    for glyph in top_edge(title, width) {
        let style = match glyph.ink {
            Ink::Border => theme.border,
            Ink::Title => theme.title,
        };
        canvas.put(glyph.x, 0, glyph.ch, style);
    }

    if height > 1 {
        let bottom = height - 1;
        canvas.put(0, bottom, glyphs::BOTTOM_LEFT, theme.border);
        for x in 1..width.saturating_sub(1) {
            canvas.put(x, bottom, glyphs::HORIZONTAL, theme.border);
        }
        if width > 1 {
            canvas.put(width - 1, bottom, glyphs::BOTTOM_RIGHT, theme.border);
        }
    }

    for y in 1..height.saturating_sub(1) {
        canvas.put(0, y, glyphs::VERTICAL, theme.border);
        canvas.put(width - 1, y, glyphs::VERTICAL, theme.border);
    }
}

/// Draw `───[ title ]───` at (x, y). Nothing is drawn on the top border row.
pub fn draw_section_title<S: Surface + ?Sized>(
    canvas: &mut Canvas<'_, S>,
    theme: &Theme,
    x: i32,
    y: u16,
    title: &str,
) {
    if y < 1 {
        return;
    }
    canvas.print(x, y, &section_title(title), theme.section);
}

/// Draw the page menu, highlighting `selected`.
///
/// Uses the same [`MenuGeometry`] the dispatcher hit-tests against.
pub fn draw_menu<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme, selected: Page) {
    let view = canvas.view();
    let Some(row) = view.menu_row().filter(|row| *row >= 1) else {
        return;
    };

    let menu = MenuGeometry::compute(&Page::LABELS, view.width);
    for (item, label) in menu.items().iter().zip(Page::LABELS) {
        let style = if item.index == selected.index() {
            theme.reverse
        } else {
            theme.normal
        };
        canvas.print(i32::from(item.x), row, &format!("[{label}]"), style);
    }
}

/// Draw the key help row above the menu.
pub fn draw_instructions<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme) {
    let view = canvas.view();
    let Some(row) = view.instructions_row().filter(|row| *row >= 1) else {
        return;
    };
    let x = centered_x(char_len(INSTRUCTIONS), view.width, i32::from(MIN_START_X));
    canvas.print(x, row, INSTRUCTIONS, theme.normal);
}

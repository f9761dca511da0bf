//! Screen regions derived from the terminal size.

/// First row available to page content.
pub const CONTENT_TOP: i64 = 2;
/// Rows reserved below the content area: instructions, menu, bottom border
/// and one spacer.
const CONTENT_BOTTOM_MARGIN: i64 = 4;

/// Drawable regions for one terminal size.
///
/// Recomputed on every render; nothing here is cached between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

impl Viewport {
    /// Viewport for a terminal of the given size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Exclusive lower bound of the content rows.
    #[inline]
    pub fn content_bottom(&self) -> i64 {
        i64::from(self.height) - CONTENT_BOTTOM_MARGIN
    }

    /// Check whether logical row `y` falls inside the content area.
    #[inline]
    pub fn shows_row(&self, y: i64) -> bool {
        y >= CONTENT_TOP && y < self.content_bottom()
    }

    /// The right border column; content must stay strictly left of it.
    #[inline]
    pub const fn right_limit(&self) -> u16 {
        self.width.saturating_sub(1)
    }

    /// Row holding the page menu.
    #[inline]
    pub fn menu_row(&self) -> Option<u16> {
        self.height.checked_sub(2)
    }

    /// Row holding the key instructions.
    #[inline]
    pub fn instructions_row(&self) -> Option<u16> {
        self.height.checked_sub(3)
    }

    /// Check whether a click on row `y` targets the menu bar.
    pub fn is_menu_click_row(&self, y: u16) -> bool {
        self.menu_row() == Some(y) || self.instructions_row() == Some(y)
    }
}

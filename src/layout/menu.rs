//! Menu bar geometry.
//!
//! The same [`MenuGeometry`] value is used to draw the menu and to resolve
//! mouse clicks, so what the user sees and what a click selects can never
//! disagree.

use super::text::char_len;

/// Columns added to each label: `[`, `]` and one separator space.
pub const ITEM_PADDING: u16 = 3;
/// Closest a menu may start to the left border.
pub const MIN_START_X: u16 = 2;

/// One laid-out menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Page index this item selects.
    pub index: usize,
    /// First column of the item.
    pub x: u16,
    /// Unclipped span (`label length + 3`).
    pub span: u16,
    /// Clickable/drawable columns after clipping at the right border.
    pub visible: u16,
}

impl MenuItem {
    /// Check whether column `x` falls on this item.
    #[inline]
    pub const fn contains(&self, x: u16) -> bool {
        x >= self.x && x - self.x < self.visible
    }

    /// Exclusive end column of the clickable span.
    #[inline]
    pub const fn end(&self) -> u16 {
        self.x + self.visible
    }
}

/// Horizontal layout of the menu bar for one terminal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGeometry {
    /// Column of the first item.
    pub start_x: u16,
    /// Sum of spans minus the trailing separator.
    pub total_width: u16,
    items: Vec<MenuItem>,
}

impl MenuGeometry {
    /// Lay out `labels` centered in a terminal `width` columns wide.
    ///
    /// Spans are clipped so that nothing lands on or past the right border
    /// column (`width - 1`).
    pub fn compute<S: AsRef<str>>(labels: &[S], width: u16) -> Self {
        let spans: Vec<u16> = labels
            .iter()
            .map(|label| {
                let len = u16::try_from(char_len(label.as_ref())).unwrap_or(u16::MAX);
                len.saturating_add(ITEM_PADDING)
            })
            .collect();

        let total_width = spans
            .iter()
            .fold(0u16, |acc, span| acc.saturating_add(*span))
            .saturating_sub(1);

        let centered = (i32::from(width) - i32::from(total_width)).div_euclid(2);
        let start_x = u16::try_from(centered.max(i32::from(MIN_START_X))).unwrap_or(MIN_START_X);

        let limit = width.saturating_sub(1);
        let mut x = start_x;
        let items = spans
            .iter()
            .enumerate()
            .map(|(index, &span)| {
                let visible = limit.saturating_sub(x).min(span);
                let item = MenuItem {
                    index,
                    x,
                    span,
                    visible,
                };
                x = x.saturating_add(span);
                item
            })
            .collect();

        Self {
            start_x,
            total_width,
            items,
        }
    }

    /// All items in page order.
    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Resolve column `x` to the page index under it.
    pub fn hit_test(&self, x: u16) -> Option<usize> {
        self.items.iter().find(|item| item.contains(x)).map(|item| item.index)
    }
}

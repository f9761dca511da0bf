//! Multi-column grid for feature name lists.

/// Width of one column, in cells.
pub const COLUMN_WIDTH: u16 = 30;
/// Upper bound on the number of columns.
pub const MAX_COLUMNS: usize = 4;

/// Row-major placement of `count` items into fixed-width columns.
///
/// Item `index` lives at row `index / columns`, column `index % columns`.
/// Cells after the last item in the final row stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    count: usize,
    columns: usize,
    rows: usize,
}

impl ColumnLayout {
    /// Lay out `count` items in `available_width` columns of screen.
    ///
    /// The width may be negative on very narrow terminals; the layout then
    /// falls back to a single column.
    pub fn new(count: usize, available_width: i32) -> Self {
        let fit = available_width / i32::from(COLUMN_WIDTH);
        let columns = usize::try_from(fit).unwrap_or(0).clamp(1, MAX_COLUMNS);
        Self {
            count,
            columns,
            rows: count.div_ceil(columns),
        }
    }

    /// Number of columns in use.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows needed.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Row and column of item `index`, or `None` past the end.
    pub const fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.count {
            Some((index / self.columns, index % self.columns))
        } else {
            None
        }
    }

    /// `(column, item index)` pairs populated in `row`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, usize)> {
        let start = row * self.columns;
        let end = (start + self.columns).min(self.count);
        (start..end).map(move |index| (index - start, index))
    }

    /// Horizontal offset of `column` from the grid's left edge.
    #[inline]
    pub fn column_offset(column: usize) -> u16 {
        u16::try_from(column).map_or(u16::MAX, |c| c.saturating_mul(COLUMN_WIDTH))
    }
}

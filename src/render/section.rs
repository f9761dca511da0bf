//! Page content as a list of logical lines, and the clipping cursor that
//! paints them.
//!
//! Page modules only describe content: they push sections, field tables,
//! free text and column grids into a [`PageBuilder`]. [`paint`] is the one
//! routine that decides which lines land on screen.

use super::canvas::Canvas;
use super::chrome::draw_section_title;
use crate::config::Theme;
use crate::layout::{truncate, ColumnLayout, Viewport, COLUMN_WIDTH, CONTENT_TOP};
use crate::terminal::Surface;

/// Left edge of page content.
pub const CONTENT_X: i32 = 3;
/// Indent of field rows relative to [`CONTENT_X`].
pub const FIELD_INDENT: u16 = 4;
/// Indent of nested rows relative to [`CONTENT_X`].
pub const NESTED_INDENT: u16 = 8;

/// Longest name shown in a grid cell.
const GRID_NAME_WIDTH: usize = COLUMN_WIDTH as usize - 2;

/// Style selector for body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Theme's normal style.
    Normal,
    /// Theme's section style.
    Section,
}

/// One logical line of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `───[ title ]───` at the content edge.
    Title(String),
    /// Text indented from the content edge.
    Text {
        /// Columns right of [`CONTENT_X`].
        indent: u16,
        /// Content.
        text: String,
        /// Style selector.
        tone: Tone,
    },
    /// One row of a column grid.
    Grid {
        /// Columns right of [`CONTENT_X`] of the first column.
        indent: u16,
        /// Cell texts, left to right.
        cells: Vec<String>,
    },
    /// Nothing.
    Blank,
}

/// How a field value is fitted to the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Shown as is; the canvas clips at the border.
    Full,
    /// Truncated to the terminal width minus this many columns.
    Reserve(u16),
}

/// A labeled row in a field table.
pub struct Field<T> {
    /// Label including its colon. Empty prints the value alone.
    pub label: &'static str,
    /// Reads the value from the record.
    pub value: fn(&T) -> String,
    /// Whether the row applies to the record.
    pub visible: fn(&T) -> bool,
    /// Width rule for the value.
    pub fit: Fit,
}

/// Visibility predicate for rows that always apply.
pub const fn always<T>(_: &T) -> bool {
    true
}

/// Rows sharing a label column.
pub struct FieldTable<T: 'static> {
    /// Width of the label column including the separating space.
    pub label_width: usize,
    /// Rows in display order.
    pub fields: &'static [Field<T>],
}

/// Format one field row.
///
/// The label is padded to `label_width - 1` and followed by one space, so a
/// label that fills the column still gets a single space before the value.
pub fn field_text(label: &str, label_width: usize, value: &str) -> String {
    if label.is_empty() {
        return value.to_string();
    }
    let pad = label_width.saturating_sub(1);
    format!("{label:<pad$} {value}")
}

/// Accumulates the logical lines of a page.
#[derive(Debug)]
pub struct PageBuilder {
    lines: Vec<Line>,
    width: u16,
}

impl PageBuilder {
    /// Empty page laid out for `view`.
    pub const fn new(view: Viewport) -> Self {
        Self {
            lines: Vec::new(),
            width: view.width,
        }
    }

    /// Terminal width the page is laid out for.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Section heading.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Title(title.into()));
        self
    }

    /// One indented line of text.
    pub fn text(&mut self, indent: u16, text: impl Into<String>, tone: Tone) -> &mut Self {
        self.lines.push(Line::Text {
            indent,
            text: text.into(),
            tone,
        });
        self
    }

    /// `count` empty lines.
    pub fn blank(&mut self, count: usize) -> &mut Self {
        self.lines.extend(std::iter::repeat(Line::Blank).take(count));
        self
    }

    /// Every visible row of `table` for `record`, at the field indent.
    pub fn fields<T>(&mut self, table: &FieldTable<T>, record: &T) -> &mut Self {
        let width = self.width();
        for field in table.fields.iter().filter(|field| (field.visible)(record)) {
            let value = (field.value)(record);
            let value = match field.fit {
                Fit::Full => value,
                Fit::Reserve(reserve) => {
                    truncate(&value, usize::from(width.saturating_sub(reserve))).into_owned()
                }
            };
            let text = field_text(field.label, table.label_width, &value);
            self.text(FIELD_INDENT, text, Tone::Normal);
        }
        self
    }

    /// Names laid out in columns at `indent`.
    ///
    /// Column count comes from the width left of the border after `indent`.
    pub fn grid<N: AsRef<str>>(&mut self, indent: u16, names: &[N]) -> &mut Self {
        let available = i32::from(self.width()) - CONTENT_X - i32::from(indent);
        let layout = ColumnLayout::new(names.len(), available);
        for row in 0..layout.rows() {
            let cells = layout
                .row(row)
                .map(|(_, index)| truncate(names[index].as_ref(), GRID_NAME_WIDTH).into_owned())
                .collect();
            self.lines.push(Line::Grid { indent, cells });
        }
        self
    }

    /// The accumulated lines.
    pub fn finish(self) -> Vec<Line> {
        self.lines
    }
}

/// Running line counter deciding which logical lines are on screen.
///
/// Starts at the first content row minus the scroll offset and advances by
/// one per logical line, drawn or not.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    y: i64,
    view: Viewport,
}

impl Cursor {
    /// Cursor for the first line of a page scrolled by `scroll`.
    pub fn new(view: Viewport, scroll: u32) -> Self {
        Self {
            y: CONTENT_TOP - i64::from(scroll),
            view,
        }
    }

    /// Screen row of the current line, if it is inside the content area.
    pub fn row(&self) -> Option<u16> {
        if self.view.shows_row(self.y) {
            u16::try_from(self.y).ok()
        } else {
            None
        }
    }

    /// Whether this and every later line is below the content area.
    pub fn is_past_end(&self) -> bool {
        self.y >= self.view.content_bottom()
    }

    /// Move to the next logical line.
    pub fn advance(&mut self) {
        self.y += 1;
    }
}

/// Draw the on-screen part of `lines`.
pub fn paint<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme, lines: &[Line], scroll: u32) {
    let mut cursor = Cursor::new(canvas.view(), scroll);
    for line in lines {
        if cursor.is_past_end() {
            break;
        }
        if let Some(y) = cursor.row() {
            draw_line(canvas, theme, line, y);
        }
        cursor.advance();
    }
}

fn draw_line<S: Surface + ?Sized>(canvas: &mut Canvas<'_, S>, theme: &Theme, line: &Line, y: u16) {
    match line {
        Line::Title(title) => draw_section_title(canvas, theme, CONTENT_X, y, title),
        Line::Text { indent, text, tone } => {
            let style = match tone {
                Tone::Normal => theme.normal,
                Tone::Section => theme.section,
            };
            canvas.print(CONTENT_X + i32::from(*indent), y, text, style);
        }
        Line::Grid { indent, cells } => {
            for (col, cell) in (0i32..).zip(cells) {
                let x = CONTENT_X + i32::from(*indent) + col * i32::from(COLUMN_WIDTH);
                canvas.print(x, y, cell, theme.normal);
            }
        }
        Line::Blank => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MemorySurface;

    struct Record {
        name: &'static str,
        hidden: bool,
    }

    static TABLE: FieldTable<Record> = FieldTable {
        label_width: 12,
        fields: &[
            Field {
                label: "Name:",
                value: |r| r.name.to_string(),
                visible: always,
                fit: Fit::Full,
            },
            Field {
                label: "Short:",
                value: |r| r.name.to_string(),
                visible: always,
                fit: Fit::Reserve(20),
            },
            Field {
                label: "Secret:",
                value: |_| "x".to_string(),
                visible: |r| !r.hidden,
                fit: Fit::Full,
            },
            Field {
                label: "",
                value: |_| "raw | value".to_string(),
                visible: always,
                fit: Fit::Full,
            },
        ],
    };

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|line| match line {
                Line::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_field_text_padding() {
        assert_eq!(field_text("Vendor:", 12, "Intel"), "Vendor:     Intel");
        assert_eq!(field_text("Model Number:", 15, "158"), "Model Number:  158");
        assert_eq!(field_text("Phys Addr Bits:", 15, "39"), "Phys Addr Bits: 39");
        assert_eq!(field_text("Linear Addr Bits:", 15, "48"), "Linear Addr Bits: 48");
        assert_eq!(field_text("Core Type:", 0, "P"), "Core Type: P");
        assert_eq!(field_text("", 15, "a | b"), "a | b");
    }

    #[test]
    fn test_fields_visibility_and_fit() {
        let record = Record {
            name: "Intel(R) Core(TM) i7-9750H",
            hidden: true,
        };
        let mut page = PageBuilder::new(Viewport::new(30, 24));
        page.fields(&TABLE, &record);
        let lines = page.finish();

        assert_eq!(
            texts(&lines),
            vec![
                "Name:       Intel(R) Core(TM) i7-9750H",
                "Short:      Intel(R...",
                "raw | value",
            ]
        );
    }

    #[test]
    fn test_grid_rows() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        // 3 + 4 + 4 * 30 + 1 leaves room for four columns
        let mut page = PageBuilder::new(Viewport::new(128, 24));
        page.grid(FIELD_INDENT, &names[..]);
        let lines = page.finish();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            Line::Grid {
                indent: FIELD_INDENT,
                cells: vec!["e".to_string(), "f".to_string(), "g".to_string()],
            }
        );
    }

    #[test]
    fn test_grid_truncates_names() {
        let long = "x".repeat(40);
        let mut page = PageBuilder::new(Viewport::new(80, 24));
        page.grid(NESTED_INDENT, std::slice::from_ref(&long));
        match &page.finish()[0] {
            Line::Grid { cells, .. } => assert_eq!(cells[0].chars().count(), 28),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cursor_visibility() {
        let view = Viewport::new(80, 24);
        let mut cursor = Cursor::new(view, 3);
        assert_eq!(cursor.row(), None);
        for _ in 0..3 {
            cursor.advance();
        }
        assert_eq!(cursor.row(), Some(2));
        for _ in 0..18 {
            cursor.advance();
        }
        assert_eq!(cursor.row(), None);
        assert!(cursor.is_past_end());
    }

    #[test]
    fn test_paint_scrolls_lines() {
        let mut lines = Vec::new();
        for i in 0..40 {
            lines.push(Line::Text {
                indent: 0,
                text: format!("line {i}"),
                tone: Tone::Normal,
            });
        }
        let theme = Theme::default();
        let mut surface = MemorySurface::new(40, 24);
        let mut canvas = Canvas::new(&mut surface, Viewport::new(40, 24));
        paint(&mut canvas, &theme, &lines, 5);
        surface.present().unwrap();

        assert_eq!(surface.row(1), "");
        assert_eq!(surface.row(2), "   line 5");
        assert_eq!(surface.row(19), "   line 22");
        assert_eq!(surface.row(20), "");
    }
}

//! Diffing Engine: Generate minimal ANSI sequences from buffer changes.
//!
//! This module is what makes `present` flicker-free:
//! 1. Compare the last presented frame with the next one
//! 2. Generate escape sequences for changed cells only
//! 3. Skip cursor moves when writing adjacent cells
//! 4. Track color state to avoid redundant SGR sequences
//!
//! All output is accumulated in a single buffer and flushed with one syscall.

use super::{Buffer, Cell, Modifiers, Rgb};
use std::io::Write;

/// State tracker for the diffing algorithm.
///
/// This tracks the "current" terminal state (cursor position, colors, modifiers)
/// to minimize the number of escape sequences we need to emit.
#[derive(Debug, Clone)]
pub struct DiffState {
    /// Last known cursor X position (0-indexed).
    cursor_x: u16,
    /// Last known cursor Y position (0-indexed).
    cursor_y: u16,
    /// Last emitted foreground color.
    fg: Option<Rgb>,
    /// Last emitted background color.
    bg: Option<Rgb>,
    /// Last emitted modifiers.
    modifiers: Option<Modifiers>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            fg: None,
            bg: None,
            modifiers: None,
        }
    }

    /// Reset the state (e.g., after a full screen repaint).
    pub const fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.modifiers = None;
        // Force cursor move on next write
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// Render the difference between two equally sized buffers.
///
/// Only cells that differ between `current` and `next` produce output.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = usize::from(next.width());

    for (idx, (current_cell, next_cell)) in current.cells().iter().zip(next.cells()).enumerate() {
        if current_cell == next_cell || next_cell.is_wide_continuation() {
            continue;
        }

        result.cells_changed += 1;

        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = ((idx % width) as u16, (idx / width) as u16);
        if state.cursor_y != y || state.cursor_x != x {
            emit_cursor_move(output, x, y);
            state.cursor_x = x;
            state.cursor_y = y;
            result.cursor_moves += 1;
        }

        result.color_changes += emit_style(output, next_cell, state);
        emit_char(output, next_cell);

        state.cursor_x = state
            .cursor_x
            .saturating_add(u16::from(next_cell.display_width().max(1)));
    }

    result
}

/// Generate a full repaint sequence (no diffing).
///
/// This is used for the first frame and after a resize, when the terminal
/// contents are unknown.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>, state: &mut DiffState) {
    state.reset();
    output.extend_from_slice(b"\x1b[?25l\x1b[0m\x1b[2J");

    for (y, row) in (0u16..).zip(buffer.rows()) {
        emit_cursor_move(output, 0, y);
        for cell in row.iter().filter(|cell| !cell.is_wide_continuation()) {
            emit_style(output, cell, state);
            emit_char(output, cell);
        }
    }

    // Leave the cursor position unknown: the terminal may or may not have
    // wrapped after the last column.
    state.cursor_x = u16::MAX;
    state.cursor_y = u16::MAX;
}

/// Emit whatever SGR sequences are needed to draw `cell`.
///
/// Returns the number of color sequences written.
fn emit_style(output: &mut Vec<u8>, cell: &Cell, state: &mut DiffState) -> usize {
    let mut color_changes = 0;

    // Removing a modifier requires a full reset, which also drops colors.
    let next_mods = cell.modifiers();
    let current_mods = state.modifiers.unwrap_or(Modifiers::empty());
    if !current_mods.difference(next_mods).is_empty() {
        output.extend_from_slice(b"\x1b[0m");
        state.fg = None;
        state.bg = None;
        state.modifiers = None;
    }

    if state.fg != Some(cell.fg()) {
        emit_fg_color(output, cell.fg());
        state.fg = Some(cell.fg());
        color_changes += 1;
    }
    if state.bg != Some(cell.bg()) {
        emit_bg_color(output, cell.bg());
        state.bg = Some(cell.bg());
        color_changes += 1;
    }
    if state.modifiers != Some(next_mods) {
        let added = next_mods.difference(state.modifiers.unwrap_or(Modifiers::empty()));
        emit_modifier_set(output, added);
        state.modifiers = Some(next_mods);
    }

    color_changes
}

/// Emit a cursor move sequence.
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row}H` for column 1
/// - `\x1b[{row};{col}H` otherwise
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    // ANSI uses 1-indexed positions
    let row = u32::from(y) + 1;
    let col = u32::from(x) + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit a foreground color sequence (true color).
#[inline]
fn emit_fg_color(output: &mut Vec<u8>, color: Rgb) {
    let _ = write!(output, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
}

/// Emit a background color sequence (true color).
#[inline]
fn emit_bg_color(output: &mut Vec<u8>, color: Rgb) {
    let _ = write!(output, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
}

/// Emit SGR sequences for a set of modifiers.
fn emit_modifier_set(output: &mut Vec<u8>, modifiers: Modifiers) {
    if modifiers.contains(Modifiers::BOLD) {
        output.extend_from_slice(b"\x1b[1m");
    }
    if modifiers.contains(Modifiers::DIM) {
        output.extend_from_slice(b"\x1b[2m");
    }
    if modifiers.contains(Modifiers::ITALIC) {
        output.extend_from_slice(b"\x1b[3m");
    }
    if modifiers.contains(Modifiers::UNDERLINE) {
        output.extend_from_slice(b"\x1b[4m");
    }
    if modifiers.contains(Modifiers::REVERSED) {
        output.extend_from_slice(b"\x1b[7m");
    }
}

#[inline]
fn emit_char(output: &mut Vec<u8>, cell: &Cell) {
    let mut utf8 = [0u8; 4];
    output.extend_from_slice(cell.ch().encode_utf8(&mut utf8).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    fn screen_text(output: &[u8], width: u16, height: u16) -> Vec<String> {
        let mut parser = vt100::Parser::new(height, width, 0);
        parser.process(output);
        parser
            .screen()
            .rows(0, width)
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_diff_identical_buffers() {
        let a = Buffer::new(10, 5);
        let b = Buffer::new(10, 5);
        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_single_cell_change() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        b.set(5, 2, Cell::new('X'));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 1);
        assert_eq!(result.cursor_moves, 1);
        assert!(output.starts_with(b"\x1b[3;6H"));
        assert!(output.ends_with(b"X"));
    }

    #[test]
    fn test_diff_adjacent_cells_no_cursor_move() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        b.set(0, 0, Cell::new('A'));
        b.set(1, 0, Cell::new('B'));
        b.set(2, 0, Cell::new('C'));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 3);
        // Cursor starts at (0,0) and cells are adjacent
        assert_eq!(result.cursor_moves, 0);
    }

    #[test]
    fn test_diff_color_tracking() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        let red = Style::new(Rgb::new(255, 0, 0), Rgb::BLACK);
        b.set(0, 0, Cell::new('A').with_style(red));
        b.set(1, 0, Cell::new('B').with_style(red));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        // fg and bg for the first cell, nothing for the second
        assert_eq!(result.color_changes, 2);
    }

    #[test]
    fn test_cursor_move_optimization() {
        let mut output = Vec::new();

        emit_cursor_move(&mut output, 0, 0);
        assert_eq!(&output, b"\x1b[H");

        output.clear();
        emit_cursor_move(&mut output, 0, 5);
        assert_eq!(&output, b"\x1b[6H");

        output.clear();
        emit_cursor_move(&mut output, 10, 5);
        assert_eq!(&output, b"\x1b[6;11H");
    }

    #[test]
    fn test_render_full_reproduces_buffer() {
        let mut buffer = Buffer::new(12, 3);
        for (i, ch) in "┌─[ HW ]─┐".chars().enumerate() {
            buffer.put_char(u16::try_from(i).unwrap(), 0, ch, Style::DEFAULT);
        }
        buffer.put_char(2, 1, '日', Style::DEFAULT);
        buffer.put_char(4, 1, 'x', Style::DEFAULT);

        let mut output = Vec::new();
        let mut state = DiffState::new();
        render_full(&buffer, &mut output, &mut state);

        let rows = screen_text(&output, 12, 3);
        assert_eq!(rows[0], "┌─[ HW ]─┐");
        assert_eq!(rows[1], "  日x");
    }

    #[test]
    fn test_full_then_diff_matches_next_frame() {
        let mut first = Buffer::new(20, 4);
        for (i, ch) in "Summary".chars().enumerate() {
            first.put_char(u16::try_from(i).unwrap() + 2, 1, ch, Style::DEFAULT);
        }
        let mut second = first.clone();
        for (i, ch) in "CPU    ".chars().enumerate() {
            second.put_char(u16::try_from(i).unwrap() + 2, 1, ch, Style::DEFAULT);
        }
        second.put_char(19, 3, '!', Style::DEFAULT);

        let mut output = Vec::new();
        let mut state = DiffState::new();
        render_full(&first, &mut output, &mut state);
        render_diff(&first, &second, &mut output, &mut state);

        let rows = screen_text(&output, 20, 4);
        assert_eq!(rows[1], "  CPU");
        assert_eq!(rows[3], "                   !");
    }
}

//! Crossterm-backed surface.
//!
//! Owns the double buffers: draw calls land in `next`, and `present` diffs
//! it against `current` (what the terminal already shows) and writes the
//! minimal ANSI sequence in a single write.

use super::event::convert_event;
use super::Surface;
use crate::actor::InputEvent;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::{Buffer, Style};
use crossterm::{event, event::EnableMouseCapture, execute, terminal};
use std::io::{self, Stdout, Write};
use tracing::{trace, warn};

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Frames presented.
    pub frames: u64,
    /// Frames that needed a full repaint.
    pub full_redraws: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
}

/// A [`Surface`] drawing to a real terminal through crossterm.
pub struct CrosstermSurface<W: Write = Stdout> {
    /// What the terminal currently shows.
    current: Buffer,
    /// Frame being drawn.
    next: Buffer,
    /// Cursor/color tracking across presents.
    diff_state: DiffState,
    /// Reused output accumulator.
    output: Vec<u8>,
    writer: W,
    /// Queries the terminal size.
    probe: fn() -> io::Result<(u16, u16)>,
    needs_full_redraw: bool,
    stats: RenderStats,
}

impl CrosstermSurface<Stdout> {
    /// Surface over stdout, sized to the current terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be read.
    pub fn stdout() -> io::Result<Self> {
        Self::with_writer(io::stdout(), terminal::size)
    }
}

impl<W: Write> CrosstermSurface<W> {
    /// Surface writing to `writer`, sized by `probe`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first size probe fails.
    pub fn with_writer(writer: W, probe: fn() -> io::Result<(u16, u16)>) -> io::Result<Self> {
        let (width, height) = probe()?;
        Ok(Self {
            current: Buffer::new(width, height),
            next: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            writer,
            probe,
            needs_full_redraw: true,
            stats: RenderStats::default(),
        })
    }

    /// Presentation counters.
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// The writer, for inspecting captured output.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.needs_full_redraw = true;
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn size(&mut self) -> (u16, u16) {
        match (self.probe)() {
            Ok((width, height)) => {
                if (width, height) != (self.next.width(), self.next.height()) {
                    self.resize(width, height);
                }
            }
            Err(err) => warn!(%err, "terminal size query failed; keeping last size"),
        }
        (self.next.width(), self.next.height())
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) -> u8 {
        self.next.put_char(x, y, ch, style)
    }

    fn clear(&mut self) {
        self.next.clear();
    }

    fn present(&mut self) -> io::Result<()> {
        self.output.clear();

        if self.needs_full_redraw {
            render_full(&self.next, &mut self.output, &mut self.diff_state);
            self.needs_full_redraw = false;
            self.stats.full_redraws += 1;
        } else {
            let result = render_diff(
                &self.current,
                &self.next,
                &mut self.output,
                &mut self.diff_state,
            );
            trace!(cells = result.cells_changed, moves = result.cursor_moves, "diff");
        }

        // Flush to terminal in a single write
        if !self.output.is_empty() {
            if let Err(err) = self
                .writer
                .write_all(&self.output)
                .and_then(|()| self.writer.flush())
            {
                // Terminal state is unknown after a partial write
                self.needs_full_redraw = true;
                return Err(err);
            }
        }

        self.current.copy_from(&self.next);
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        loop {
            match event::read() {
                Ok(raw) => {
                    if let Some(event) = convert_event(raw) {
                        return Some(event);
                    }
                }
                Err(err) => {
                    warn!(%err, "terminal event stream closed");
                    return None;
                }
            }
        }
    }

    fn enable_mouse(&mut self) -> io::Result<()> {
        execute!(self.writer, EnableMouseCapture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> io::Result<(u16, u16)> {
        Ok((20, 4))
    }

    fn screen_rows(bytes: &[u8]) -> Vec<String> {
        let mut parser = vt100::Parser::new(4, 20, 0);
        parser.process(bytes);
        parser
            .screen()
            .rows(0, 20)
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    fn print(surface: &mut CrosstermSurface<Vec<u8>>, x: u16, y: u16, text: &str) {
        for (i, ch) in (0u16..).zip(text.chars()) {
            surface.set_cell(x + i, y, ch, Style::DEFAULT);
        }
    }

    #[test]
    fn test_first_present_is_full_redraw() {
        let mut surface = CrosstermSurface::with_writer(Vec::new(), small).unwrap();
        assert_eq!(surface.size(), (20, 4));
        print(&mut surface, 2, 1, "Summary");
        surface.present().unwrap();

        assert_eq!(surface.stats().full_redraws, 1);
        assert!(surface.writer().starts_with(b"\x1b[?25l\x1b[0m\x1b[2J"));
        assert_eq!(screen_rows(surface.writer())[1], "  Summary");
    }

    #[test]
    fn test_second_present_writes_only_changes() {
        let mut surface = CrosstermSurface::with_writer(Vec::new(), small).unwrap();
        print(&mut surface, 2, 1, "Summary");
        surface.present().unwrap();
        let after_first = surface.writer().len();

        surface.clear();
        print(&mut surface, 2, 1, "Summary");
        surface.present().unwrap();
        assert_eq!(surface.writer().len(), after_first);

        surface.clear();
        print(&mut surface, 2, 1, "CPU");
        surface.present().unwrap();
        assert!(surface.writer().len() > after_first);
        assert_eq!(surface.stats().frames, 3);
        assert_eq!(surface.stats().full_redraws, 1);
        assert_eq!(screen_rows(surface.writer())[1], "  CPU");
    }

    #[test]
    fn test_enable_mouse_writes_capture_sequence() {
        let mut surface = CrosstermSurface::with_writer(Vec::new(), small).unwrap();
        surface.enable_mouse().unwrap();
        assert!(!surface.writer().is_empty());
    }
}

//! In-memory surface for tests and benchmarks.

use super::Surface;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Style};
use std::collections::VecDeque;
use std::io;

/// A [`Surface`] backed by plain buffers and a scripted event queue.
///
/// Draw calls go to a back buffer; [`Surface::present`] copies it to the
/// front buffer, which is what the inspection methods read. When the queue
/// runs dry, [`Surface::poll_event`] reports the stream as closed.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    front: Buffer,
    back: Buffer,
    events: VecDeque<InputEvent>,
    presents: usize,
    mouse_enabled: bool,
    fail_present: bool,
}

impl MemorySurface {
    /// An empty surface of the given size with no queued events.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            events: VecDeque::new(),
            presents: 0,
            mouse_enabled: false,
            fail_present: false,
        }
    }

    /// Queue events to be returned by `poll_event` (builder pattern).
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Queue one more event.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Change the reported size. Both buffers are reset.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.front.resize(width, height);
        self.back.resize(width, height);
    }

    /// Make every following `present` fail with a broken-pipe error.
    pub fn fail_presents(&mut self, fail: bool) {
        self.fail_present = fail;
    }

    /// Number of successful presents.
    pub const fn present_count(&self) -> usize {
        self.presents
    }

    /// Whether `enable_mouse` was called.
    pub const fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// The last presented frame.
    pub const fn frame(&self) -> &Buffer {
        &self.front
    }

    /// Presented row `y` as text, trailing blanks trimmed.
    pub fn row(&self, y: u16) -> String {
        self.front
            .row_text(y)
            .map(|row| row.trim_end().to_string())
            .unwrap_or_default()
    }

    /// All presented rows, trailing blanks trimmed.
    pub fn rows(&self) -> Vec<String> {
        (0..self.front.height()).map(|y| self.row(y)).collect()
    }

    /// Presented cell at (x, y).
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.front.get(x, y)
    }
}

impl Surface for MemorySurface {
    fn size(&mut self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) -> u8 {
        self.back.put_char(x, y, ch, style)
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn present(&mut self) -> io::Result<()> {
        if self.fail_present {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "surface closed"));
        }
        self.front.copy_from(&self.back);
        self.presents += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn enable_mouse(&mut self) -> io::Result<()> {
        self.mouse_enabled = true;
        Ok(())
    }
}

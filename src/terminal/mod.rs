//! Terminal abstraction: the grid surface the UI draws on.
//!
//! The UI only talks to [`Surface`]. [`CrosstermSurface`] drives a real
//! terminal; [`MemorySurface`] keeps frames in memory for tests.

mod backend;
mod event;
mod guard;
mod memory;

pub use backend::{CrosstermSurface, RenderStats};
pub use guard::TerminalGuard;
pub use memory::MemorySurface;

use crate::actor::InputEvent;
use crate::buffer::Style;
use std::io;

/// A fixed-size character grid with an explicit present step.
///
/// Writes outside the grid are dropped. Nothing becomes visible until
/// [`Surface::present`].
pub trait Surface {
    /// Current size as `(width, height)`, refreshed on every call.
    fn size(&mut self) -> (u16, u16);

    /// Put one character at (x, y). Returns the columns it took, 0 if the
    /// position is outside the grid.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) -> u8;

    /// Blank the whole grid.
    fn clear(&mut self);

    /// Make everything drawn since the last present visible.
    fn present(&mut self) -> io::Result<()>;

    /// Block until the next input event. `None` means the stream is closed.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Start reporting mouse events.
    fn enable_mouse(&mut self) -> io::Result<()>;
}

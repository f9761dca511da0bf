//! Event loop plumbing built on crossbeam channels.
//!
//! Two producers report into one completion channel:
//! - **Input pump**: owns the viewer, reads terminal events, renders
//! - **Signal listener**: forwards termination signals
//!
//! The main thread blocks on the first [`ExitReason`] and tears down the
//! terminal.
//!
//! ```text
//! ┌──────────────┐   ExitReason   ┌──────────────┐
//! │  Input Pump  │ ─────────────▶ │              │
//! └──────────────┘                │  Main Thread │
//! ┌──────────────┐   ExitReason   │              │
//! │Signal Handler│ ─────────────▶ │              │
//! └──────────────┘                └──────────────┘
//! ```

mod input;
mod messages;
mod signal;

pub use input::InputPump;
pub use messages::{ExitReason, InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
pub use signal::install as install_signal_handler;

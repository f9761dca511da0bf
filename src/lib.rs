//! # earhw
//!
//! A hardware report viewer for the terminal.
//!
//! earhw reads a one-shot snapshot of the machine's CPU (features, caches,
//! TLBs, topology) and shows it as paginated, scrollable pages inside a
//! bordered frame, driven by keyboard and mouse.
//!
//! ## Core Concepts
//!
//! - **Grid surface**: every frame is drawn into a cell buffer and presented
//!   as a minimal diff
//! - **Logical lines**: pages are built as line lists, then painted through a
//!   clipping cursor that applies the scroll offset
//! - **Shared geometry**: the menu layout used for drawing is the one used
//!   for hit-testing clicks
//! - **Completion channel**: the input pump and the signal listener report
//!   one exit reason to the main thread
//!
//! ## Example
//!
//! ```rust,ignore
//! use earhw::{App, MemorySurface, Theme};
//! use std::sync::Arc;
//!
//! let mut app = App::new(Arc::new(snapshot), MemorySurface::new(80, 24), Theme::default());
//! app.render()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod buffer;
pub mod config;
pub mod error;
pub mod hardware;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use actor::{ExitReason, InputEvent, InputPump, KeyCode, KeyModifiers};
pub use app::{App, Flow, Page, ViewState};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use config::{LogConfig, ProbeConfig, SurfaceConfig, Theme};
pub use error::{Error, Result};
pub use hardware::{platform_source, CollectError, HardwareSnapshot, SnapshotSource};
pub use terminal::{CrosstermSurface, MemorySurface, Surface, TerminalGuard};

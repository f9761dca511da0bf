//! Layout module: pure geometry for everything drawn on screen.
//!
//! Nothing here touches the terminal. Each function takes sizes and labels
//! and returns positions, so drawing and hit-testing share one answer.

mod columns;
mod frame;
mod menu;
mod text;
mod viewport;

pub use columns::{ColumnLayout, COLUMN_WIDTH, MAX_COLUMNS};
pub use frame::{centered_x, glyphs, section_title, section_title_len, top_edge, Glyph, Ink};
pub use menu::{MenuGeometry, MenuItem, ITEM_PADDING, MIN_START_X};
pub use text::{char_len, truncate, ELLIPSIS};
pub use viewport::{Viewport, CONTENT_TOP};

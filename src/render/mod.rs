//! Page renderer: turns the snapshot and view state into draw calls.
//!
//! A frame is drawn in a fixed order: background, border with title, page
//! content through the clipping cursor, then the instructions and menu rows.
//! Drawing is a pure function of snapshot, state and terminal size.

mod canvas;
mod chrome;
mod cpu;
mod section;
mod summary;

pub use chrome::INSTRUCTIONS;
pub use section::{Line, Tone};

use canvas::Canvas;
use crate::app::{Page, ViewState};
use crate::config::Theme;
use crate::hardware::{CpuInfo, HardwareSnapshot};
use crate::layout::Viewport;
use crate::terminal::Surface;

/// Logical content lines of `page`, laid out for `view`.
pub fn page_lines(page: Page, cpu: &CpuInfo, view: Viewport) -> Vec<Line> {
    match page {
        Page::Summary => summary::lines(cpu, view),
        Page::Cpu => cpu::lines(cpu, view),
    }
}

/// Draw a complete frame into `surface` without presenting it.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    snapshot: &HardwareSnapshot,
    state: &ViewState,
) {
    let (width, height) = surface.size();
    let view = Viewport::new(width, height);
    surface.clear();

    let mut canvas = Canvas::new(surface, view);
    canvas.fill(theme.normal);
    chrome::draw_frame(&mut canvas, theme, state.page().title());

    let lines = page_lines(state.page(), &snapshot.cpu, view);
    section::paint(&mut canvas, theme, &lines, state.scroll_offset());

    chrome::draw_instructions(&mut canvas, theme);
    chrome::draw_menu(&mut canvas, theme, state.page());
}

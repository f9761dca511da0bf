//! View controller: owns the view state and redraws after every change.

use super::dispatch::{decode, Action};
use super::state::ViewState;
use crate::actor::InputEvent;
use crate::config::Theme;
use crate::hardware::HardwareSnapshot;
use crate::render;
use crate::terminal::Surface;
use std::io;
use std::sync::Arc;
use tracing::{debug, trace};

/// Whether the event loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Stop the session.
    Quit,
}

/// The report viewer bound to one surface.
///
/// Every state change is followed by exactly one full render; events that
/// change nothing do not render.
pub struct App<S: Surface> {
    snapshot: Arc<HardwareSnapshot>,
    state: ViewState,
    surface: S,
    theme: Theme,
}

impl<S: Surface> App<S> {
    /// Viewer for `snapshot` on the first page, unscrolled.
    pub fn new(snapshot: Arc<HardwareSnapshot>, surface: S, theme: Theme) -> Self {
        Self {
            snapshot,
            state: ViewState::new(),
            surface,
            theme,
        }
    }

    /// Current page and scroll offset.
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The surface being drawn on.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for polling events.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Hand the surface back, ending the viewer.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draw and present a full frame for the current state.
    pub fn render(&mut self) -> io::Result<()> {
        render::draw_frame(&mut self.surface, &self.theme, &self.snapshot, &self.state);
        self.surface.present()
    }

    /// Apply one input event.
    ///
    /// Returns [`Flow::Quit`] for quit requests; render failures are
    /// returned as errors.
    pub fn handle(&mut self, event: &InputEvent) -> io::Result<Flow> {
        let size = self.surface.size();
        let action = decode(event, &self.state, size);
        trace!(?event, ?action, "decoded input");

        match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::Ignore => return Ok(Flow::Continue),
            Action::AdvancePage(delta) => self.state.advance_page(delta),
            Action::SetPage(index) => {
                debug!(index, "menu item clicked");
                if !self.state.set_page(index) {
                    return Ok(Flow::Continue);
                }
            }
            Action::Scroll(delta) => self.state.scroll(delta),
            Action::Redraw => {}
        }

        debug!(
            page = self.state.page().label(),
            scroll = self.state.scroll_offset(),
            "view changed"
        );
        self.render()?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyCode;
    use crate::app::Page;
    use crate::hardware::fixtures;
    use crate::render::INSTRUCTIONS;
    use crate::terminal::MemorySurface;

    fn app(width: u16, height: u16) -> App<MemorySurface> {
        let mut app = App::new(
            Arc::new(fixtures::snapshot()),
            MemorySurface::new(width, height),
            Theme::default(),
        );
        app.render().unwrap();
        app
    }

    fn press(app: &mut App<MemorySurface>, code: KeyCode) -> Flow {
        app.handle(&InputEvent::key(code)).unwrap()
    }

    #[test]
    fn test_first_frame_at_80_by_24() {
        let app = app(80, 24);
        let rows = app.surface().rows();

        assert!(rows[0].starts_with('┌'));
        assert!(rows[0].ends_with('┐'));
        let title = rows[0].find("[ HARDWARE SUMMARY ]").unwrap();
        // Byte offset of the title after the 3-byte corner and ═ fillers
        let column = rows[0][..title].chars().count();
        assert_eq!(column, (80 - 20) / 2);

        assert_eq!(rows[2].trim_matches('│').trim(), "───[ CPU ]───");
        assert!(rows[3].contains("Vendor:     Intel"));
        assert!(rows[21].contains(INSTRUCTIONS));
        assert_eq!(rows[22], format!("│{}[Summary] [CPU]{}│", " ".repeat(31), " ".repeat(32)));
        assert!(rows[23].starts_with('└'));
    }

    #[test]
    fn test_scrolling_past_content_blanks_the_area() {
        let mut app = app(80, 24);
        for _ in 0..50 {
            assert_eq!(press(&mut app, KeyCode::Down), Flow::Continue);
        }
        assert_eq!(app.state().scroll_offset(), 50);
        assert_eq!(app.surface().present_count(), 51);

        let rows = app.surface().rows();
        for row in &rows[2..20] {
            assert!(row.trim_matches('│').trim().is_empty(), "{row:?}");
        }
        assert!(rows[0].contains("[ HARDWARE SUMMARY ]"));
        assert!(rows[22].contains("[Summary] [CPU]"));
    }

    #[test]
    fn test_category_grid_in_four_columns() {
        let mut app = app(131, 120);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().page(), Page::Cpu);

        let rows = app.surface().rows();
        let header = rows.iter().position(|r| r.contains("▸ SIMD (7 features)")).unwrap();
        let glyph = |x: u16, y: usize| {
            app.surface()
                .cell(x, u16::try_from(y).unwrap())
                .map(|c| c.ch())
                .unwrap()
        };

        for x in [11, 41, 71, 101] {
            assert_ne!(glyph(x, header + 1), ' ', "x={x}");
        }
        for x in [11, 41, 71] {
            assert_ne!(glyph(x, header + 2), ' ', "x={x}");
        }
        assert_eq!(glyph(101, header + 2), ' ');
        assert!(rows[header + 1].contains("ssse3"));
        assert!(rows[header + 2].trim_end_matches('│').trim_end().ends_with("avx"));
    }

    #[test]
    fn test_menu_click_selects_first_page() {
        // 21 columns puts "[Summary]" at [3, 13)
        let mut app = app(21, 24);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().page(), Page::Cpu);

        app.handle(&InputEvent::click(3, 22)).unwrap();
        assert_eq!(app.state().page(), Page::Summary);
        assert_eq!(app.state().scroll_offset(), 0);
        assert!(app.surface().rows()[0].contains("HARDWARE SUMMARY"));
    }

    #[test]
    fn test_page_keys_wrap_and_reset_scroll() {
        let mut app = app(80, 24);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().page(), Page::Cpu);
        assert_eq!(app.state().scroll_offset(), 0);
        assert!(app.surface().rows()[0].contains("[ CPU INFORMATION ]"));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().page(), Page::Summary);
    }

    #[test]
    fn test_up_at_top_does_not_render() {
        let mut app = app(80, 24);
        assert_eq!(press(&mut app, KeyCode::Up), Flow::Continue);
        assert_eq!(app.surface().present_count(), 1);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().scroll_offset(), 0);
        assert_eq!(app.surface().present_count(), 3);
    }

    #[test]
    fn test_scrolling_shifts_content_up() {
        let mut app = app(80, 24);
        press(&mut app, KeyCode::Down);
        let rows = app.surface().rows();
        assert!(rows[2].contains("Vendor:"));
        assert!(!rows.iter().any(|r| r.contains("[ CPU ]")));
    }

    #[test]
    fn test_resize_redraws_at_new_size() {
        let mut app = app(80, 24);
        app.surface_mut().resize(100, 30);
        app.handle(&InputEvent::Resize { width: 100, height: 30 }).unwrap();

        let rows = app.surface().rows();
        assert_eq!(rows.len(), 30);
        assert!(rows[28].contains("[Summary] [CPU]"));
        assert_eq!(rows[0].chars().count(), 100);
    }

    #[test]
    fn test_quit_keys_do_not_render() {
        let mut app = app(80, 24);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Flow::Quit);
        assert_eq!(app.surface().present_count(), 1);
    }

    #[test]
    fn test_present_failure_is_reported() {
        let mut app = app(80, 24);
        app.surface_mut().fail_presents(true);
        assert!(app.handle(&InputEvent::key(KeyCode::Down)).is_err());
    }

    #[test]
    fn test_tiny_terminals_do_not_panic() {
        for (width, height) in [(1, 1), (2, 3), (5, 2), (10, 4), (0, 0)] {
            let mut app = app(width, height);
            for code in [KeyCode::Down, KeyCode::Right, KeyCode::Down, KeyCode::Up] {
                press(&mut app, code);
            }
            app.handle(&InputEvent::click(0, height.saturating_sub(2))).unwrap();
        }
    }
}

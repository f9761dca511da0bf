//! Input dispatcher: maps raw events to view actions.
//!
//! Decoding is pure; the controller applies the resulting [`Action`].

use super::state::{Page, ViewState};
use crate::actor::{InputEvent, KeyCode, MouseButton, MouseEvent};
use crate::layout::{MenuGeometry, Viewport};

/// What an input event asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the program.
    Quit,
    /// Step through the pages by the given amount, then render.
    AdvancePage(i32),
    /// Jump to the page at this menu index, then render.
    SetPage(usize),
    /// Move the scroll offset, then render.
    Scroll(i32),
    /// Render without changing state.
    Redraw,
    /// Do nothing.
    Ignore,
}

/// Decode `event` against the current state and terminal size.
pub fn decode(event: &InputEvent, state: &ViewState, (width, height): (u16, u16)) -> Action {
    match event {
        InputEvent::Key { code, modifiers } => match code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c' | 'C') if modifiers.control => Action::Quit,
            KeyCode::Char('q' | 'Q') => Action::Quit,
            KeyCode::Left => Action::AdvancePage(-1),
            KeyCode::Right => Action::AdvancePage(1),
            KeyCode::Up => scroll_up(state),
            KeyCode::Down => Action::Scroll(1),
            _ => Action::Ignore,
        },
        InputEvent::MouseScroll { delta, .. } => match delta.signum() {
            1 => scroll_up(state),
            -1 => Action::Scroll(1),
            _ => Action::Ignore,
        },
        InputEvent::MouseDown(MouseEvent {
            x,
            y,
            button: Some(MouseButton::Left),
            ..
        }) => menu_click(*x, *y, Viewport::new(width, height)),
        InputEvent::Resize { .. } => Action::Redraw,
        _ => Action::Ignore,
    }
}

/// Scrolling up at the top neither moves nor redraws.
const fn scroll_up(state: &ViewState) -> Action {
    if state.scroll_offset() > 0 {
        Action::Scroll(-1)
    } else {
        Action::Ignore
    }
}

fn menu_click(x: u16, y: u16, view: Viewport) -> Action {
    if !view.is_menu_click_row(y) {
        return Action::Ignore;
    }
    MenuGeometry::compute(&Page::LABELS, view.width)
        .hit_test(x)
        .map_or(Action::Ignore, Action::SetPage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyModifiers;

    const SIZE: (u16, u16) = (80, 24);

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::key(code)
    }

    fn scrolled(lines: i32) -> ViewState {
        let mut state = ViewState::new();
        state.scroll(lines);
        state
    }

    #[test]
    fn test_quit_keys() {
        let state = ViewState::new();
        for event in [
            key(KeyCode::Esc),
            key(KeyCode::Char('q')),
            key(KeyCode::Char('Q')),
            InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            },
        ] {
            assert_eq!(decode(&event, &state, SIZE), Action::Quit, "{event:?}");
        }
        assert_eq!(decode(&key(KeyCode::Char('c')), &state, SIZE), Action::Ignore);
    }

    #[test]
    fn test_page_keys() {
        let state = ViewState::new();
        assert_eq!(decode(&key(KeyCode::Left), &state, SIZE), Action::AdvancePage(-1));
        assert_eq!(decode(&key(KeyCode::Right), &state, SIZE), Action::AdvancePage(1));
    }

    #[test]
    fn test_up_at_top_ignored() {
        assert_eq!(decode(&key(KeyCode::Up), &ViewState::new(), SIZE), Action::Ignore);
        assert_eq!(decode(&key(KeyCode::Up), &scrolled(2), SIZE), Action::Scroll(-1));
        assert_eq!(decode(&key(KeyCode::Down), &ViewState::new(), SIZE), Action::Scroll(1));
    }

    #[test]
    fn test_wheel_matches_arrows_anywhere() {
        let up = InputEvent::MouseScroll { x: 70, y: 3, delta: 1 };
        let down = InputEvent::MouseScroll { x: 0, y: 23, delta: -1 };
        assert_eq!(decode(&up, &ViewState::new(), SIZE), Action::Ignore);
        assert_eq!(decode(&up, &scrolled(1), SIZE), Action::Scroll(-1));
        assert_eq!(decode(&down, &ViewState::new(), SIZE), Action::Scroll(1));
    }

    #[test]
    fn test_menu_click_rows() {
        let state = ViewState::new();
        assert_eq!(decode(&InputEvent::click(43, 22), &state, SIZE), Action::SetPage(1));
        assert_eq!(decode(&InputEvent::click(43, 21), &state, SIZE), Action::SetPage(1));
        assert_eq!(decode(&InputEvent::click(43, 20), &state, SIZE), Action::Ignore);
        assert_eq!(decode(&InputEvent::click(32, 22), &state, SIZE), Action::SetPage(0));
        // Separator between the items
        assert_eq!(decode(&InputEvent::click(48, 22), &state, SIZE), Action::Ignore);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let right = InputEvent::MouseDown(MouseEvent {
            x: 43,
            y: 22,
            button: Some(MouseButton::Right),
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(decode(&right, &ViewState::new(), SIZE), Action::Ignore);
    }

    #[test]
    fn test_resize_redraws_and_rest_ignored() {
        let state = ViewState::new();
        assert_eq!(
            decode(&InputEvent::Resize { width: 100, height: 30 }, &state, SIZE),
            Action::Redraw
        );
        assert_eq!(decode(&InputEvent::FocusGained, &state, SIZE), Action::Ignore);
        assert_eq!(decode(&InputEvent::Paste("q".into()), &state, SIZE), Action::Ignore);
        assert_eq!(decode(&key(KeyCode::Enter), &state, SIZE), Action::Ignore);
    }
}

//! Conversion from crossterm events to [`InputEvent`].

use crate::actor::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
use crossterm::event::{self, Event, KeyEventKind};

/// Convert a crossterm event. Returns `None` for events the UI never uses.
pub fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            // Only process key press events (not release or repeat)
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            let code = convert_key_code(key_event.code)?;
            let modifiers = convert_modifiers(key_event.modifiers);

            Some(InputEvent::Key { code, modifiers })
        }

        Event::Mouse(mouse_event) => convert_mouse_event(mouse_event),

        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

        Event::FocusGained => Some(InputEvent::FocusGained),

        Event::FocusLost => Some(InputEvent::FocusLost),

        Event::Paste(text) => Some(InputEvent::Paste(text)),
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

fn convert_mouse_event(mouse: event::MouseEvent) -> Option<InputEvent> {
    let modifiers = convert_modifiers(mouse.modifiers);
    let at = |button| MouseEvent {
        x: mouse.column,
        y: mouse.row,
        button,
        modifiers,
    };

    match mouse.kind {
        event::MouseEventKind::Down(button) => {
            Some(InputEvent::MouseDown(at(Some(convert_mouse_button(button)))))
        }
        event::MouseEventKind::Up(button) => {
            Some(InputEvent::MouseUp(at(Some(convert_mouse_button(button)))))
        }
        event::MouseEventKind::Moved => Some(InputEvent::MouseMove(at(None))),
        event::MouseEventKind::Drag(button) => {
            Some(InputEvent::MouseMove(at(Some(convert_mouse_button(button)))))
        }
        event::MouseEventKind::ScrollUp => Some(InputEvent::MouseScroll {
            x: mouse.column,
            y: mouse.row,
            delta: 1,
        }),
        event::MouseEventKind::ScrollDown => Some(InputEvent::MouseScroll {
            x: mouse.column,
            y: mouse.row,
            delta: -1,
        }),
        _ => None,
    }
}

const fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEventKind};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(event::MouseEvent {
            kind,
            column,
            row,
            modifiers: event::KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_press_converted() {
        let ev = Event::Key(KeyEvent::new(
            event::KeyCode::Char('c'),
            event::KeyModifiers::CONTROL,
        ));
        assert_eq!(
            convert_event(ev),
            Some(InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
    }

    #[test]
    fn test_key_release_dropped() {
        let ev = Event::Key(KeyEvent {
            code: event::KeyCode::Left,
            modifiers: event::KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(ev), None);
    }

    #[test]
    fn test_unused_key_dropped() {
        let ev = Event::Key(KeyEvent::new(event::KeyCode::F(5), event::KeyModifiers::NONE));
        assert_eq!(convert_event(ev), None);
    }

    #[test]
    fn test_mouse_conversion() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(event::MouseButton::Left), 3, 22)),
            Some(InputEvent::click(3, 22))
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(InputEvent::MouseScroll { x: 0, y: 0, delta: -1 })
        );
        assert_eq!(convert_event(mouse(MouseEventKind::ScrollLeft, 0, 0)), None);
    }

    #[test]
    fn test_resize_conversion() {
        assert_eq!(
            convert_event(Event::Resize(100, 40)),
            Some(InputEvent::Resize {
                width: 100,
                height: 40
            })
        );
    }
}

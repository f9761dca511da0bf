//! Input pump: dedicated thread that owns the viewer.
//!
//! The pump draws the first frame, then blocks on the surface for events
//! and feeds them to the controller until one of them ends the session.
//! Exactly one [`ExitReason`] is sent when it stops, including when the
//! controller panics.

use super::messages::ExitReason;
use crate::app::{App, Flow};
use crate::terminal::Surface;
use crossbeam_channel::Sender;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// Handle to the running input thread.
pub struct InputPump {
    handle: Option<JoinHandle<()>>,
}

impl InputPump {
    /// Spawn the pump thread for `app`.
    ///
    /// # Arguments
    ///
    /// * `app` - The viewer; moved onto the new thread.
    /// * `exits` - Completion channel receiving the reason the pump stopped.
    pub fn spawn<S>(app: App<S>, exits: Sender<ExitReason>) -> Self
    where
        S: Surface + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("earhw-input".to_string())
            .spawn(move || {
                let reason = match panic::catch_unwind(AssertUnwindSafe(|| Self::run_loop(app))) {
                    Ok(reason) => reason,
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        error!(%message, "input pump panicked");
                        ExitReason::Failed(message)
                    }
                };
                debug!(?reason, "input pump stopped");
                let _ = exits.send(reason);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the pump thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop<S: Surface>(mut app: App<S>) -> ExitReason {
        if let Err(err) = app.render() {
            error!(%err, "initial render failed");
            return ExitReason::Failed(err.to_string());
        }

        loop {
            let Some(event) = app.surface_mut().poll_event() else {
                return ExitReason::StreamClosed;
            };
            match app.handle(&event) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return ExitReason::Quit,
                Err(err) => {
                    error!(%err, "render failed");
                    return ExitReason::Failed(err.to_string());
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{InputEvent, KeyCode};
    use crate::buffer::Style;
    use crate::config::Theme;
    use crate::hardware::fixtures;
    use crate::terminal::MemorySurface;
    use crossbeam_channel::unbounded;
    use std::io;
    use std::sync::Arc;
    use std::time::Duration;

    fn run(surface: MemorySurface) -> ExitReason {
        let app = App::new(Arc::new(fixtures::snapshot()), surface, Theme::default());
        let (tx, rx) = unbounded();
        let pump = InputPump::spawn(app, tx);
        let reason = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        pump.join();
        reason
    }

    #[test]
    fn test_quit_key_ends_pump() {
        let surface = MemorySurface::new(80, 24).with_events([
            InputEvent::key(KeyCode::Down),
            InputEvent::key(KeyCode::Right),
            InputEvent::key(KeyCode::Char('q')),
            InputEvent::key(KeyCode::Down),
        ]);
        assert_eq!(run(surface), ExitReason::Quit);
    }

    #[test]
    fn test_closed_stream_ends_pump() {
        let surface = MemorySurface::new(80, 24).with_events([InputEvent::key(KeyCode::Down)]);
        assert_eq!(run(surface), ExitReason::StreamClosed);
    }

    #[test]
    fn test_render_failure_reported() {
        let mut surface = MemorySurface::new(80, 24);
        surface.fail_presents(true);
        let reason = run(surface);
        assert!(matches!(reason, ExitReason::Failed(_)));
        assert_eq!(reason.exit_code(), 1);
    }

    struct Exploding;

    impl Surface for Exploding {
        fn size(&mut self) -> (u16, u16) {
            (20, 10)
        }
        fn set_cell(&mut self, _: u16, _: u16, _: char, _: Style) -> u8 {
            1
        }
        fn clear(&mut self) {}
        fn present(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn poll_event(&mut self) -> Option<InputEvent> {
            panic!("event source gone");
        }
        fn enable_mouse(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_panic_becomes_failure() {
        let app = App::new(Arc::new(fixtures::snapshot()), Exploding, Theme::default());
        let (tx, rx) = unbounded();
        let pump = InputPump::spawn(app, tx);
        let reason = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        pump.join();
        assert_eq!(reason, ExitReason::Failed("event source gone".to_string()));
    }
}

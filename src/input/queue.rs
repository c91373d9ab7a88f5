//! Hand-off from a platform callback thread to the frame-loop thread.
//!
//! Some native windowing backends deliver input on a thread other than the
//! one running the frame loop. Instead of sharing [`InputState`] behind a
//! lock, callbacks push [`InputEvent`]s into an [`InputSender`] and the frame
//! loop applies them in order with [`InputQueue::drain_into`] right before
//! it reads the state. The state itself stays single-owner.

use std::sync::mpsc;

use super::event::InputEvent;
use super::state::InputState;
use super::translator::CodeTranslator;

/// Producer half, held by the platform callbacks. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::Sender<InputEvent>,
}

impl InputSender {
    /// Queue an event (non-blocking send).
    ///
    /// If the frame loop has dropped its [`InputQueue`] the event is
    /// discarded and logged.
    pub fn send(&self, event: InputEvent) {
        if let Err(mpsc::SendError(event)) = self.tx.send(event) {
            log::debug!("input queue closed, dropping {event:?}");
        }
    }
}

/// Consumer half, owned by the frame loop.
#[derive(Debug)]
pub struct InputQueue {
    rx: mpsc::Receiver<InputEvent>,
}

impl InputQueue {
    /// Create a connected sender/queue pair.
    #[must_use]
    pub fn channel() -> (InputSender, Self) {
        let (tx, rx) = mpsc::channel();
        (InputSender { tx }, Self { rx })
    }

    /// Apply every pending event to `state` in arrival order.
    ///
    /// Returns the number of events applied. Conditions are logged by the
    /// state and do not stop the drain.
    pub fn drain_into<T: CodeTranslator>(
        &self,
        state: &mut InputState<T>,
    ) -> usize {
        let mut applied = 0;
        for event in self.rx.try_iter() {
            let _ = state.handle_event(&event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{LogicalInput, MouseButton};

    #[test]
    fn drains_in_arrival_order() {
        let (tx, queue) = InputQueue::channel();
        let mut state = InputState::new();

        tx.send(InputEvent::key_down("KeyD"));
        tx.send(InputEvent::key_up("KeyD"));
        tx.send(InputEvent::CursorMoved { x: 5.0, y: 6.0 });
        tx.send(InputEvent::CursorMoved { x: 7.0, y: 8.0 });

        assert_eq!(queue.drain_into(&mut state), 4);
        let d = state.query(LogicalInput::D);
        assert!(!d.held);
        assert!(d.pressed_edge);
        assert_eq!(state.pointer_position(), (7.0, 8.0));

        assert_eq!(queue.drain_into(&mut state), 0);
    }

    #[test]
    fn events_from_another_thread() {
        let (tx, queue) = InputQueue::channel();
        let mut state = InputState::new();

        let producer = std::thread::spawn(move || {
            for _ in 0..3 {
                tx.send(InputEvent::MouseButton {
                    button: MouseButton::Left,
                    down: true,
                });
            }
            tx.send(InputEvent::key_down("Space"));
        });
        producer.join().unwrap();

        assert_eq!(queue.drain_into(&mut state), 4);
        assert!(state.mouse_query(MouseButton::Left).pressed_edge);
        assert!(state.query(LogicalInput::Space).held);
        let edges = state.consume_pressed_edges();
        assert!(edges.button(MouseButton::Left));
    }

    #[test]
    fn conditions_do_not_stop_the_drain() {
        let (tx, queue) = InputQueue::channel();
        let mut state = InputState::new();

        tx.send(InputEvent::key_up("KeyW"));
        tx.send(InputEvent::key_down("F24"));
        tx.send(InputEvent::key_down("KeyW"));

        assert_eq!(queue.drain_into(&mut state), 3);
        assert!(state.query(LogicalInput::W).held);
        assert_eq!(state.stats().unsupported_codes, 1);
        assert_eq!(state.stats().inconsistent_transitions, 1);
    }

    #[test]
    fn send_after_close_is_dropped() {
        let (tx, queue) = InputQueue::channel();
        drop(queue);
        tx.send(InputEvent::key_down("KeyA"));
    }
}

use super::mouse::MouseButton;

/// Platform-agnostic input events.
///
/// Platform adapters normalize their native events into these and feed
/// them to [`InputState::handle_event`](super::InputState::handle_event),
/// directly or through an [`InputQueue`](super::InputQueue).
///
/// # Example
///
/// ```
/// use frame_input::{InputEvent, InputState, LogicalInput};
///
/// let mut input = InputState::new();
/// let _ = input.handle_event(&InputEvent::Key {
///     code: "Space".into(),
///     down: true,
/// });
/// assert!(input.query(LogicalInput::Space).held);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key changed state.
    Key {
        /// Platform key code, e.g. `"KeyW"` or `"ShiftLeft"`.
        code: String,
        /// `true` for press, `false` for release.
        down: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        down: bool,
    },
    /// Cursor moved to a surface-local position.
    CursorMoved {
        /// Horizontal position relative to the surface origin.
        x: f32,
        /// Vertical position relative to the surface origin.
        y: f32,
    },
}

impl InputEvent {
    /// Key press event.
    #[must_use]
    pub fn key_down(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            down: true,
        }
    }

    /// Key release event.
    #[must_use]
    pub fn key_up(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            down: false,
        }
    }
}

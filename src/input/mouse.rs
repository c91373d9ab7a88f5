/// Platform-agnostic mouse button identifier.
///
/// Only the two buttons a frame loop tracks are represented; adapters drop
/// everything else before it reaches [`InputState`](super::InputState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = Self::ALL.len();

    /// Every tracked button, in table order.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Dense table index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Map a DOM `MouseEvent.button` value to a tracked button.
///
/// `0` is the main button and `2` the secondary one; the middle button (`1`)
/// and the browser back/forward buttons are not tracked.
#[must_use]
pub const fn mouse_button_from_dom(button: i16) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

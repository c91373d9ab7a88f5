/// State of a single key or mouse button.
///
/// `held` is level-triggered and follows the physical input. `pressed_edge`
/// is edge-triggered: it is raised together with the `held` false→true
/// transition and stays raised until the frame loop consumes it through
/// [`consume_pressed_edges`].
/// Nothing else clears it, so a press that lands between two frames is
/// seen by exactly one frame.
///
/// [`consume_pressed_edges`]: super::InputState::consume_pressed_edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputRecord {
    /// Whether the input is currently down.
    pub held: bool,
    /// Whether a down transition happened since the last consume.
    pub pressed_edge: bool,
}

impl InputRecord {
    /// Apply a down event. Returns `false` when the input was already held
    /// (duplicate down, e.g. OS key repeat), in which case nothing changes.
    pub(crate) fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.pressed_edge = true;
        true
    }

    /// Apply an up event. Returns `false` when the input was not held,
    /// which means a down was missed or the up was delivered twice.
    /// `held` ends up `false` either way and `pressed_edge` is untouched.
    pub(crate) fn release(&mut self) -> bool {
        let was_held = self.held;
        self.held = false;
        was_held
    }

    /// Read and clear the edge flag.
    pub(crate) fn take_edge(&mut self) -> bool {
        std::mem::take(&mut self.pressed_edge)
    }
}

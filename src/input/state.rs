//! Per-frame input state: held/pressed records, modifiers, pointer.
//!
//! `InputState` is written by the platform callbacks through the `on_*`
//! entry points and read by the frame loop. The frame loop owns the edge
//! reset: it calls [`InputState::consume_pressed_edges`] once per frame
//! boundary, and nothing else clears a pressed edge.
//!
//! ```
//! use frame_input::{InputState, LogicalInput, ModifierMask};
//!
//! let mut input = InputState::new();
//!
//! // Platform callbacks.
//! let _ = input.on_key_transition("ShiftLeft", true);
//! let _ = input.on_key_transition("Space", true);
//! input.on_pointer_move(140.0, 30.0);
//!
//! // Frame loop.
//! let jump = input.query(LogicalInput::Space);
//! assert!(jump.held && jump.pressed_edge);
//! assert!(input.modifiers().contains(ModifierMask::SHIFT));
//! let edges = input.consume_pressed_edges();
//! assert!(edges.key(LogicalInput::Space));
//!
//! // Next frame: still held, no new edge.
//! assert!(!input.query(LogicalInput::Space).pressed_edge);
//! assert!(input.query(LogicalInput::Space).held);
//! ```

use super::event::InputEvent;
use super::keyboard::{LogicalInput, Modifier, ModifierMask};
use super::mouse::MouseButton;
use super::record::InputRecord;
use super::translator::{Binding, CodeTranslator};
use crate::error::{InputCondition, InputSource, TransitionFault};
use crate::options::{DiagnosticOptions, KeyBindings, Options};

/// Running counts of reported conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionStats {
    /// Events dropped because their code had no binding.
    pub unsupported_codes: u64,
    /// Up events for inputs that were not held.
    pub inconsistent_transitions: u64,
}

/// Inputs whose pressed edge was set when the frame loop consumed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressedEdges {
    keys: [bool; LogicalInput::COUNT],
    buttons: [bool; MouseButton::COUNT],
}

impl PressedEdges {
    /// Whether `input` had a pressed edge.
    #[must_use]
    pub fn key(&self, input: LogicalInput) -> bool {
        self.keys[input.index()]
    }

    /// Whether `button` had a pressed edge.
    #[must_use]
    pub fn button(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    /// Keys with a pressed edge, in table order.
    pub fn keys(&self) -> impl Iterator<Item = LogicalInput> + '_ {
        LogicalInput::ALL.into_iter().filter(|input| self.key(*input))
    }

    /// Mouse buttons with a pressed edge, in table order.
    pub fn buttons(&self) -> impl Iterator<Item = MouseButton> + '_ {
        MouseButton::ALL
            .into_iter()
            .filter(|button| self.button(*button))
    }

    /// Whether nothing was pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.keys.iter().chain(self.buttons.iter()).any(|edge| *edge)
    }
}

/// Keyboard, mouse button and pointer state for one surface.
///
/// Every record exists from construction on; the tables are sized by the
/// closed [`LogicalInput`] and [`MouseButton`] sets and never grow.
///
/// The `on_*` entry points never panic. Unmapped codes and inconsistent
/// transitions are logged, counted in [`stats`](Self::stats) and returned
/// as an [`InputCondition`] the caller is free to ignore.
#[derive(Debug, Clone)]
pub struct InputState<T = KeyBindings> {
    /// Platform code → binding lookup.
    translator: T,
    /// Per-key records indexed by [`LogicalInput::index`].
    keys: [InputRecord; LogicalInput::COUNT],
    /// Per-button records indexed by [`MouseButton::index`].
    buttons: [InputRecord; MouseButton::COUNT],
    modifiers: ModifierMask,
    /// Last surface-local pointer position.
    pointer: (f32, f32),
    diagnostics: DiagnosticOptions,
    stats: ConditionStats,
}

impl InputState<KeyBindings> {
    /// Create a state with the default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_translator(KeyBindings::default())
    }

    /// Create a state from loaded options (bindings and diagnostics).
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::with_translator(options.keybindings.clone())
            .with_diagnostics(options.diagnostics.clone())
    }

    /// Bind `input` to `code` at runtime.
    ///
    /// Any key whose effective code changes is released, since its
    /// physical release would now arrive on a code that no longer reaches
    /// it. Pending pressed edges survive until the next consume.
    pub fn rebind(&mut self, input: LogicalInput, code: impl Into<String>) {
        let before = self.effective_codes();
        self.translator.set(input, code);
        let after = self.effective_codes();
        for logical in LogicalInput::ALL {
            let i = logical.index();
            if before[i] != after[i] && self.keys[i].release() {
                log::debug!("released {logical:?} after rebinding");
            }
        }
    }

    /// The code that currently reaches each key, indexed by
    /// [`LogicalInput::index`]. A key shadowed by a conflicting binding
    /// has none.
    fn effective_codes(&self) -> [Option<String>; LogicalInput::COUNT] {
        LogicalInput::ALL.map(|logical| {
            self.translator
                .code_for(logical)
                .filter(|code| self.translator.lookup(code) == Some(logical))
                .map(str::to_owned)
        })
    }
}

impl Default for InputState<KeyBindings> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CodeTranslator> InputState<T> {
    /// Create a state that resolves key codes through `translator`.
    #[must_use]
    pub fn with_translator(translator: T) -> Self {
        Self {
            translator,
            keys: [InputRecord::default(); LogicalInput::COUNT],
            buttons: [InputRecord::default(); MouseButton::COUNT],
            modifiers: ModifierMask::empty(),
            pointer: (0.0, 0.0),
            diagnostics: DiagnosticOptions::default(),
            stats: ConditionStats::default(),
        }
    }

    /// Replace the condition reporting settings.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticOptions) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    // ── Writers (platform callbacks) ──

    /// Apply a key press (`is_down`) or release for platform `code`.
    ///
    /// Modifier codes set or clear only their own bit. A press of an
    /// already held key is swallowed without a second edge, which absorbs
    /// OS key repeat. A release of a key that is not held leaves it
    /// released and reports [`InputCondition::InconsistentTransition`].
    ///
    /// # Errors
    ///
    /// Returns the [`InputCondition`] that was logged. The state is always
    /// left consistent, so callers may ignore it.
    pub fn on_key_transition(
        &mut self,
        code: &str,
        is_down: bool,
    ) -> Result<(), InputCondition> {
        match self.translator.translate(code) {
            None => self.report(InputCondition::UnsupportedInputCode {
                code: code.to_owned(),
            }),
            Some(Binding::Modifier(modifier)) => {
                self.set_modifier(modifier, is_down);
                Ok(())
            }
            Some(Binding::Input(input)) => {
                self.transition(InputSource::Key(input), is_down)
            }
        }
    }

    /// Apply a mouse button press (`is_down`) or release.
    ///
    /// # Errors
    ///
    /// Returns [`InputCondition::InconsistentTransition`] for a release of
    /// a button that is not held.
    pub fn on_mouse_button(
        &mut self,
        button: MouseButton,
        is_down: bool,
    ) -> Result<(), InputCondition> {
        self.transition(InputSource::Mouse(button), is_down)
    }

    /// Record the surface-local pointer position.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Dispatch a normalized platform event to the matching entry point.
    ///
    /// # Errors
    ///
    /// Passes through the condition reported by the entry point.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
    ) -> Result<(), InputCondition> {
        match event {
            InputEvent::Key { code, down } => {
                self.on_key_transition(code, *down)
            }
            InputEvent::MouseButton { button, down } => {
                self.on_mouse_button(*button, *down)
            }
            InputEvent::CursorMoved { x, y } => {
                self.on_pointer_move(*x, *y);
                Ok(())
            }
        }
    }

    // ── Readers (frame loop) ──

    /// Snapshot of a key's record.
    #[must_use]
    pub fn query(&self, input: LogicalInput) -> InputRecord {
        self.keys[input.index()]
    }

    /// Snapshot of a mouse button's record.
    #[must_use]
    pub fn mouse_query(&self, button: MouseButton) -> InputRecord {
        self.buttons[button.index()]
    }

    /// Last surface-local pointer position. `(0, 0)` before any move.
    #[must_use]
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }

    /// Modifiers currently held.
    #[must_use]
    pub fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }

    /// Keys currently held, in table order.
    pub fn held_keys(&self) -> impl Iterator<Item = LogicalInput> + '_ {
        LogicalInput::ALL
            .into_iter()
            .filter(|input| self.keys[input.index()].held)
    }

    /// Counts of conditions reported so far.
    #[must_use]
    pub fn stats(&self) -> ConditionStats {
        self.stats
    }

    /// The code translator in use.
    #[must_use]
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Swap in a new translator.
    ///
    /// Held keys and modifiers are released first: their releases will be
    /// translated by the new table and may no longer reach them.
    pub fn set_translator(&mut self, translator: T) {
        self.release_all();
        self.translator = translator;
    }

    /// Release every held key, mouse button and modifier.
    ///
    /// For platforms that drop release events, e.g. a browser page losing
    /// focus. Pending pressed edges are kept for the next consume.
    pub fn release_all(&mut self) {
        for record in self.keys.iter_mut().chain(self.buttons.iter_mut()) {
            let _ = record.release();
        }
        self.modifiers = ModifierMask::empty();
        log::debug!("released all inputs");
    }

    /// Read then clear every pressed edge (keys and mouse buttons).
    ///
    /// Call exactly once per frame boundary. This is the only place edges
    /// are cleared; `held` is left untouched.
    pub fn consume_pressed_edges(&mut self) -> PressedEdges {
        let mut edges = PressedEdges::default();
        for (edge, record) in
            edges.keys.iter_mut().zip(self.keys.iter_mut())
        {
            *edge = record.take_edge();
        }
        for (edge, record) in
            edges.buttons.iter_mut().zip(self.buttons.iter_mut())
        {
            *edge = record.take_edge();
        }
        edges
    }

    // ── Internals ──

    fn set_modifier(&mut self, modifier: Modifier, is_down: bool) {
        self.modifiers.set(modifier.mask(), is_down);
    }

    fn record_mut(&mut self, source: InputSource) -> &mut InputRecord {
        match source {
            InputSource::Key(input) => &mut self.keys[input.index()],
            InputSource::Mouse(button) => &mut self.buttons[button.index()],
        }
    }

    fn transition(
        &mut self,
        source: InputSource,
        is_down: bool,
    ) -> Result<(), InputCondition> {
        let record = self.record_mut(source);
        if is_down {
            if !record.press() {
                log::trace!("{source} already held, ignoring repeat");
            }
            return Ok(());
        }
        if record.release() {
            return Ok(());
        }
        self.report(InputCondition::InconsistentTransition {
            source,
            fault: TransitionFault::ReleaseWithoutPress,
        })
    }

    fn report(
        &mut self,
        condition: InputCondition,
    ) -> Result<(), InputCondition> {
        let level = match &condition {
            InputCondition::UnsupportedInputCode { .. } => {
                self.stats.unsupported_codes += 1;
                self.diagnostics.unsupported_code_level.level()
            }
            InputCondition::InconsistentTransition { .. } => {
                self.stats.inconsistent_transitions += 1;
                Some(if self.diagnostics.warn_on_inconsistent_transition {
                    log::Level::Warn
                } else {
                    log::Level::Debug
                })
            }
        };
        if let Some(level) = level {
            log::log!(level, "{condition}");
        }
        Err(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReportLevel;

    fn all_records(input: &InputState) -> Vec<InputRecord> {
        LogicalInput::ALL
            .iter()
            .map(|i| input.query(*i))
            .chain(MouseButton::ALL.iter().map(|b| input.mouse_query(*b)))
            .collect()
    }

    #[test]
    fn starts_released_everywhere() {
        let input = InputState::new();
        assert!(all_records(&input)
            .iter()
            .all(|r| *r == InputRecord::default()));
        assert_eq!(input.modifiers(), ModifierMask::empty());
        assert_eq!(input.pointer_position(), (0.0, 0.0));
    }

    #[test]
    fn down_sets_held_and_edge_for_every_input() {
        for logical in LogicalInput::ALL {
            let mut input = InputState::new();
            input
                .on_key_transition(logical.default_code(), true)
                .unwrap();
            let record = input.query(logical);
            assert!(record.held, "{logical:?} not held");
            assert!(record.pressed_edge, "{logical:?} has no edge");
        }
    }

    #[test]
    fn consume_clears_edge_but_not_held() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();

        let edges = input.consume_pressed_edges();
        assert!(edges.key(LogicalInput::W));
        assert_eq!(edges.keys().collect::<Vec<_>>(), vec![LogicalInput::W]);

        let record = input.query(LogicalInput::W);
        assert!(!record.pressed_edge);
        assert!(record.held);

        assert!(input.consume_pressed_edges().is_empty());
    }

    #[test]
    fn duplicate_down_produces_one_edge() {
        let mut input = InputState::new();
        input.on_key_transition("KeyA", true).unwrap();
        input.on_key_transition("KeyA", true).unwrap();
        assert!(input.query(LogicalInput::A).pressed_edge);

        assert!(input.consume_pressed_edges().key(LogicalInput::A));
        // A repeat after the frame boundary must not re-raise the edge.
        input.on_key_transition("KeyA", true).unwrap();
        assert!(!input.query(LogicalInput::A).pressed_edge);
        assert!(!input.consume_pressed_edges().key(LogicalInput::A));
    }

    #[test]
    fn up_keeps_edge_until_consumed() {
        let mut input = InputState::new();
        input.on_key_transition("KeyE", true).unwrap();
        input.on_key_transition("KeyE", false).unwrap();

        let record = input.query(LogicalInput::E);
        assert!(!record.held);
        assert!(record.pressed_edge, "tap between frames must be visible");
        assert!(input.consume_pressed_edges().key(LogicalInput::E));
    }

    #[test]
    fn up_without_down_is_inconsistent_but_harmless() {
        let mut input = InputState::new();
        let err = input.on_key_transition("KeyS", false).unwrap_err();
        assert_eq!(
            err,
            InputCondition::InconsistentTransition {
                source: InputSource::Key(LogicalInput::S),
                fault: TransitionFault::ReleaseWithoutPress,
            }
        );
        assert_eq!(input.query(LogicalInput::S), InputRecord::default());
        assert_eq!(input.stats().inconsistent_transitions, 1);

        // The key still works normally afterwards.
        input.on_key_transition("KeyS", true).unwrap();
        assert!(input.query(LogicalInput::S).pressed_edge);
    }

    #[test]
    fn double_up_is_reported_once_per_extra_event() {
        let mut input = InputState::new();
        input.on_key_transition("KeyQ", true).unwrap();
        input.on_key_transition("KeyQ", false).unwrap();
        assert!(input.on_key_transition("KeyQ", false).is_err());
        assert!(!input.query(LogicalInput::Q).held);
        assert_eq!(input.stats().inconsistent_transitions, 1);
    }

    #[test]
    fn modifiers_are_independent_bits() {
        let mut input = InputState::new();
        input.on_key_transition("ShiftLeft", true).unwrap();
        input.on_key_transition("ControlLeft", true).unwrap();
        input.on_key_transition("ShiftLeft", false).unwrap();

        assert!(input.modifiers().contains(ModifierMask::CONTROL));
        assert!(!input.modifiers().contains(ModifierMask::SHIFT));
        // Modifiers never touch key records.
        assert!(input.consume_pressed_edges().is_empty());
    }

    #[test]
    fn modifier_release_without_press_is_silent() {
        let mut input = InputState::new();
        input.on_key_transition("AltRight", false).unwrap();
        assert_eq!(input.modifiers(), ModifierMask::empty());
        assert_eq!(input.stats(), ConditionStats::default());
    }

    #[test]
    fn unsupported_code_changes_nothing() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();
        let before = all_records(&input);

        let err = input.on_key_transition("F13", true).unwrap_err();
        assert_eq!(
            err,
            InputCondition::UnsupportedInputCode { code: "F13".into() }
        );
        assert_eq!(all_records(&input), before);
        assert_eq!(input.modifiers(), ModifierMask::empty());
        assert_eq!(input.stats().unsupported_codes, 1);
    }

    #[test]
    fn mouse_buttons_follow_key_semantics() {
        let mut input = InputState::new();
        input.on_mouse_button(MouseButton::Left, true).unwrap();
        input.on_mouse_button(MouseButton::Left, true).unwrap();
        let left = input.mouse_query(MouseButton::Left);
        assert!(left.held && left.pressed_edge);

        let edges = input.consume_pressed_edges();
        assert_eq!(
            edges.buttons().collect::<Vec<_>>(),
            vec![MouseButton::Left]
        );
        assert!(input.mouse_query(MouseButton::Left).held);

        assert!(input.on_mouse_button(MouseButton::Right, false).is_err());
        assert!(!input.mouse_query(MouseButton::Right).held);
        assert_eq!(input.modifiers(), ModifierMask::empty());
    }

    #[test]
    fn pointer_move_overwrites_position() {
        let mut input = InputState::new();
        input.on_pointer_move(10.0, 20.0);
        input.on_pointer_move(140.0, 30.0);
        assert_eq!(input.pointer_position(), (140.0, 30.0));
        // Consuming edges does not reset the pointer.
        let _ = input.consume_pressed_edges();
        assert_eq!(input.pointer_position(), (140.0, 30.0));
    }

    #[test]
    fn pointer_goes_through_surface_offset() {
        use crate::input::{to_surface_local, SurfaceOffset};
        let mut input = InputState::new();
        let (x, y) =
            to_surface_local(&SurfaceOffset::new(10.0, 10.0), 150.0, 40.0);
        input.on_pointer_move(x, y);
        assert_eq!(input.pointer_position(), (140.0, 30.0));
    }

    #[test]
    fn handle_event_dispatches() {
        let mut input = InputState::new();
        input.handle_event(&InputEvent::key_down("ArrowUp")).unwrap();
        input
            .handle_event(&InputEvent::MouseButton {
                button: MouseButton::Right,
                down: true,
            })
            .unwrap();
        input
            .handle_event(&InputEvent::CursorMoved { x: 3.0, y: 4.0 })
            .unwrap();

        assert!(input.query(LogicalInput::ArrowUp).held);
        assert!(input.mouse_query(MouseButton::Right).held);
        assert_eq!(input.pointer_position(), (3.0, 4.0));
        assert_eq!(
            input.held_keys().collect::<Vec<_>>(),
            vec![LogicalInput::ArrowUp]
        );
    }

    #[test]
    fn custom_translator() {
        let wasd_only = |code: &str| match code {
            "KeyW" => Some(Binding::Input(LogicalInput::ArrowUp)),
            "ShiftLeft" => Some(Binding::Modifier(Modifier::Shift)),
            _ => None,
        };
        let mut input = InputState::with_translator(wasd_only);
        input.on_key_transition("KeyW", true).unwrap();
        assert!(input.query(LogicalInput::ArrowUp).held);
        assert!(input.on_key_transition("ArrowUp", true).is_err());
    }

    #[test]
    fn from_options_uses_configured_bindings() {
        let mut options = Options::default();
        options.keybindings.set(LogicalInput::Space, "Enter");
        options.diagnostics.unsupported_code_level = ReportLevel::Off;

        let mut input = InputState::from_options(&options);
        input.on_key_transition("Enter", true).unwrap();
        assert!(input.query(LogicalInput::Space).held);
        // Quiet level still counts and returns the condition.
        assert!(input.on_key_transition("Space", true).is_err());
        assert_eq!(input.stats().unsupported_codes, 1);
    }

    #[test]
    fn runtime_rebind() {
        let mut input = InputState::new();
        input.rebind(LogicalInput::D, "KeyL");
        input.on_key_transition("KeyL", true).unwrap();
        assert!(input.query(LogicalInput::D).held);
        assert!(input.on_key_transition("KeyD", true).is_err());
    }

    #[test]
    fn rebinding_a_held_key_releases_it() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();
        let _ = input.consume_pressed_edges();

        input.rebind(LogicalInput::W, "KeyL");
        assert!(!input.query(LogicalInput::W).held);

        // The physical release lands on the old, now unmapped code.
        assert_eq!(
            input.on_key_transition("KeyW", false),
            Err(InputCondition::UnsupportedInputCode { code: "KeyW".into() })
        );
        assert!(!input.query(LogicalInput::W).held);

        input.on_key_transition("KeyL", true).unwrap();
        let record = input.query(LogicalInput::W);
        assert!(record.held && record.pressed_edge);
        assert!(input.consume_pressed_edges().key(LogicalInput::W));
    }

    #[test]
    fn rebind_keeps_pending_edge_and_other_keys() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();
        input.on_key_transition("KeyA", true).unwrap();

        input.rebind(LogicalInput::W, "KeyL");
        assert!(input.query(LogicalInput::W).pressed_edge);
        assert!(input.query(LogicalInput::A).held);
        assert!(input.consume_pressed_edges().key(LogicalInput::W));
    }

    #[test]
    fn rebind_releases_shadowed_key() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();

        // D sorts before W, so D takes over "KeyW" and W loses its code.
        input.rebind(LogicalInput::D, "KeyW");
        assert!(!input.query(LogicalInput::W).held);
        assert!(!input.query(LogicalInput::D).held);

        assert!(input.on_key_transition("KeyW", false).is_err());
        input.on_key_transition("KeyW", true).unwrap();
        assert!(input.query(LogicalInput::D).pressed_edge);
    }

    #[test]
    fn rebind_to_same_code_keeps_held() {
        let mut input = InputState::new();
        input.on_key_transition("KeyW", true).unwrap();
        input.rebind(LogicalInput::W, "KeyW");
        assert!(input.query(LogicalInput::W).held);
        input.on_key_transition("KeyW", false).unwrap();
    }

    #[test]
    fn release_all_clears_held_and_modifiers_but_keeps_edges() {
        let mut input = InputState::new();
        input.on_key_transition("KeyR", true).unwrap();
        input.on_key_transition("ControlLeft", true).unwrap();
        input.on_mouse_button(MouseButton::Right, true).unwrap();

        input.release_all();
        assert_eq!(input.held_keys().count(), 0);
        assert!(!input.mouse_query(MouseButton::Right).held);
        assert_eq!(input.modifiers(), ModifierMask::empty());
        assert_eq!(input.stats(), ConditionStats::default());

        let edges = input.consume_pressed_edges();
        assert!(edges.key(LogicalInput::R));
        assert!(edges.button(MouseButton::Right));

        // Next physical press is a fresh edge.
        input.on_key_transition("KeyR", true).unwrap();
        assert!(input.query(LogicalInput::R).pressed_edge);
    }

    #[test]
    fn set_translator_releases_held_inputs() {
        let mut input = InputState::new();
        input.on_key_transition("KeyZ", true).unwrap();
        input.on_key_transition("ShiftRight", true).unwrap();

        let mut bindings = KeyBindings::default();
        bindings.set(LogicalInput::Z, "KeyY");
        input.set_translator(bindings);

        assert!(!input.query(LogicalInput::Z).held);
        assert_eq!(input.modifiers(), ModifierMask::empty());
        input.on_key_transition("KeyY", true).unwrap();
        assert!(input.query(LogicalInput::Z).held);
    }

    #[test]
    fn legacy_firefox_meta_code() {
        let mut input = InputState::new();
        input.on_key_transition("OSLeft", true).unwrap();
        assert!(input.modifiers().holds(Modifier::Meta));
        input.on_key_transition("OSRight", false).unwrap();
        assert_eq!(input.modifiers(), ModifierMask::empty());
    }
}

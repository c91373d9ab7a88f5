use serde::{Deserialize, Serialize};

/// Trackable keys, decoupled from platform key codes.
///
/// The set is closed and fixed at compile time so per-key state can live in
/// a dense table indexed by [`LogicalInput::index`]. Serde serializes as
/// `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// space = "Space"
/// arrow_left = "ArrowLeft"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogicalInput {
    /// Space bar.
    Space,
    /// `A` key.
    A,
    /// `D` key.
    D,
    /// `E` key.
    E,
    /// `Q` key.
    Q,
    /// `R` key.
    R,
    /// `S` key.
    S,
    /// `W` key.
    W,
    /// `Z` key.
    Z,
    /// Right arrow.
    ArrowRight,
    /// Left arrow.
    ArrowLeft,
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
}

impl LogicalInput {
    /// Number of trackable keys.
    pub const COUNT: usize = Self::ALL.len();

    /// Every trackable key, in table order.
    pub const ALL: [Self; 13] = [
        Self::Space,
        Self::A,
        Self::D,
        Self::E,
        Self::Q,
        Self::R,
        Self::S,
        Self::W,
        Self::Z,
        Self::ArrowRight,
        Self::ArrowLeft,
        Self::ArrowDown,
        Self::ArrowUp,
    ];

    /// Dense table index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Default platform code (DOM `KeyboardEvent.code` / winit `KeyCode`
    /// debug name) for this key.
    #[must_use]
    pub const fn default_code(self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::A => "KeyA",
            Self::D => "KeyD",
            Self::E => "KeyE",
            Self::Q => "KeyQ",
            Self::R => "KeyR",
            Self::S => "KeyS",
            Self::W => "KeyW",
            Self::Z => "KeyZ",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowUp => "ArrowUp",
        }
    }
}

/// Modifier keys, tracked as independent bits rather than press records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Alt / Option.
    Alt,
    /// Shift.
    Shift,
    /// Control.
    Control,
    /// Meta / Super / Command.
    Meta,
}

impl Modifier {
    /// Every modifier.
    pub const ALL: [Self; 4] =
        [Self::Alt, Self::Shift, Self::Control, Self::Meta];

    /// The single mask bit owned by this modifier.
    #[must_use]
    pub const fn mask(self) -> ModifierMask {
        match self {
            Self::Alt => ModifierMask::ALT,
            Self::Shift => ModifierMask::SHIFT,
            Self::Control => ModifierMask::CONTROL,
            Self::Meta => ModifierMask::META,
        }
    }

    /// Platform codes that report this modifier.
    ///
    /// Left/right variants share one bit, so releasing either side clears
    /// it. Firefox before 118 reports the Meta keys as `OSLeft`/`OSRight`.
    #[must_use]
    pub const fn codes(self) -> &'static [&'static str] {
        match self {
            Self::Alt => &["AltLeft", "AltRight", "Alt"],
            Self::Shift => &["ShiftLeft", "ShiftRight", "Shift"],
            Self::Control => &["ControlLeft", "ControlRight", "Control"],
            Self::Meta => &[
                "MetaLeft",
                "MetaRight",
                "Meta",
                "SuperLeft",
                "SuperRight",
                "Super",
                "OSLeft",
                "OSRight",
            ],
        }
    }
}

bitflags::bitflags! {
    /// Bitset of modifier keys currently held.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierMask: u8 {
        /// Alt held.
        const ALT     = 0b0001;
        /// Shift held.
        const SHIFT   = 0b0010;
        /// Control held.
        const CONTROL = 0b0100;
        /// Meta held.
        const META    = 0b1000;
    }
}

impl ModifierMask {
    /// Whether `modifier`'s bit is set.
    #[must_use]
    pub fn holds(self, modifier: Modifier) -> bool {
        self.contains(modifier.mask())
    }
}

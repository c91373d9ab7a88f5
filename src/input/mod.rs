//! Input handling: identifiers, per-input records, the frame-loop facing
//! [`InputState`], and the seams platform adapters plug into.

/// Platform-agnostic input events.
pub mod event;
/// Key identifiers and the modifier bitset.
pub mod keyboard;
/// Mouse button identifiers.
pub mod mouse;
/// Cross-thread event hand-off.
pub mod queue;
/// Held/pressed record of a single input.
pub mod record;
/// The input state model.
pub mod state;
/// Surface origin for pointer coordinate mapping.
pub mod surface;
/// Platform code → logical input lookup.
pub mod translator;

pub use event::InputEvent;
pub use keyboard::{LogicalInput, Modifier, ModifierMask};
pub use mouse::{mouse_button_from_dom, MouseButton};
pub use queue::{InputQueue, InputSender};
pub use record::InputRecord;
pub use state::{ConditionStats, InputState, PressedEdges};
pub use surface::{to_surface_local, SurfaceGeometry, SurfaceOffset};
pub use translator::{modifier_for_code, Binding, CodeTranslator};

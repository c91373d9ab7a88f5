// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Keyboard, mouse button and cursor state for frame loops.
//!
//! Platform callbacks push key, button and pointer events into an
//! [`InputState`]; the frame loop reads held (level-triggered) and pressed
//! (edge-triggered) flags once per frame and then clears the pressed edges
//! with [`InputState::consume_pressed_edges`].
//!
//! # Key entry points
//!
//! - [`InputState`] - the input state model
//! - [`options::KeyBindings`] - platform key code → [`LogicalInput`] table
//! - [`InputQueue`] - hand-off for callbacks running on another thread
//! - [`options::Options`] - TOML-backed bindings and diagnostics settings
//! - `platform` - winit (`viewer` feature) and browser (`web` feature)
//!   adapters
//!
//! # Error handling
//!
//! Unmapped key codes and out-of-order transitions are not errors of the
//! caller: they are logged through the `log` facade and returned as
//! [`InputCondition`] values that may be ignored. Only the outer surfaces
//! (options files, event loops, DOM listeners) return [`InputError`].

pub mod error;
pub mod input;
pub mod options;
pub mod platform;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::{InputCondition, InputError, InputSource, TransitionFault};
pub use input::{
    Binding, CodeTranslator, InputEvent, InputQueue, InputRecord,
    InputSender, InputState, LogicalInput, Modifier, ModifierMask,
    MouseButton, PressedEdges, SurfaceGeometry, SurfaceOffset,
};
pub use options::{KeyBindings, Options};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};

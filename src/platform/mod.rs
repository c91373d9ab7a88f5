//! Platform adapters that feed normalized events into the input state.
//!
//! Each adapter is feature-gated: `viewer` for winit desktop windows, `web`
//! for browser DOM listeners. The core in [`crate::input`] does not depend
//! on either.

/// winit window events.
#[cfg(feature = "viewer")]
pub mod native;
/// Browser DOM listeners.
#[cfg(feature = "web")]
pub mod web;

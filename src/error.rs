//! Crate-level error types.
//!
//! [`InputCondition`] covers the recoverable conditions reported by the
//! input entry points; they are logged and returned, never raised.
//! [`InputError`] covers failures of the outer surfaces (options files,
//! platform event loops).

use std::fmt;

use crate::input::{LogicalInput, MouseButton};

/// The input whose record an event referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// A keyboard key.
    Key(LogicalInput),
    /// A mouse button.
    Mouse(MouseButton),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(input) => write!(f, "key {input:?}"),
            Self::Mouse(button) => write!(f, "mouse button {button:?}"),
        }
    }
}

/// How an event disagreed with the tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionFault {
    /// Up event for an input that was not held: a down was missed or the
    /// up was delivered twice.
    ReleaseWithoutPress,
}

/// Non-fatal conditions reported by the input entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCondition {
    /// The translator has no binding for this platform code. The event was
    /// dropped.
    UnsupportedInputCode {
        /// The platform code as delivered.
        code: String,
    },
    /// The event disagreed with the tracked state. The state was forced to
    /// what the event reported.
    InconsistentTransition {
        /// Which record was affected.
        source: InputSource,
        /// What was inconsistent.
        fault: TransitionFault,
    },
}

impl fmt::Display for InputCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedInputCode { code } => {
                write!(f, "unsupported input code: {code}")
            }
            Self::InconsistentTransition {
                source,
                fault: TransitionFault::ReleaseWithoutPress,
            } => {
                write!(f, "{source} released while not held")
            }
        }
    }
}

impl std::error::Error for InputCondition {}

/// Errors produced by the frame-input crate.
#[derive(Debug)]
pub enum InputError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Platform adapter failure (event loop, DOM listener registration).
    Platform(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Platform(msg) => write!(f, "platform error: {msg}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

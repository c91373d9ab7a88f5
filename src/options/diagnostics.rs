use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Log level used when reporting a condition.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    /// Do not log.
    Off,
    /// Log at `debug`.
    #[default]
    Debug,
    /// Log at `warn`.
    Warn,
}

impl ReportLevel {
    /// The `log` level to emit at, or `None` when reporting is off.
    #[must_use]
    pub fn level(self) -> Option<log::Level> {
        match self {
            Self::Off => None,
            Self::Debug => Some(log::Level::Debug),
            Self::Warn => Some(log::Level::Warn),
        }
    }
}

/// How recoverable input conditions are logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Diagnostics", inline)]
#[serde(default)]
pub struct DiagnosticOptions {
    /// Level for key codes the bindings do not know. Browsers and window
    /// systems send plenty of these, so the default is quiet.
    #[schemars(title = "Unsupported Code Level")]
    pub unsupported_code_level: ReportLevel,
    /// Warn when an up event arrives for an input that is not held.
    #[schemars(title = "Warn On Inconsistent Transition")]
    pub warn_on_inconsistent_transition: bool,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            unsupported_code_level: ReportLevel::Debug,
            warn_on_inconsistent_transition: true,
        }
    }
}

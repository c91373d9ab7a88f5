//! Input options with TOML preset support.
//!
//! Key bindings and diagnostic settings are consolidated here. Options
//! serialize to/from TOML so a frame loop can ship layout presets next to
//! its other settings.

mod diagnostics;
mod keybindings;

use std::path::Path;

pub use diagnostics::{DiagnosticOptions, ReportLevel};
pub use keybindings::KeyBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[diagnostics]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
    /// Condition reporting options.
    pub diagnostics: DiagnosticOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OptionsParse`] if the text is not valid TOML
    /// or a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        toml::from_str(content)
            .map_err(|e| InputError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if the file cannot be read, or
    /// [`InputError::OptionsParse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(InputError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded input options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if serialization fails or the file or its
    /// parent directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), InputError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InputError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(InputError::Io)?;
        }
        std::fs::write(path, content).map_err(InputError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LogicalInput;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[diagnostics]
unsupported_code_level = "warn"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.diagnostics.unsupported_code_level, ReportLevel::Warn);
        // Everything else should be default
        assert!(opts.diagnostics.warn_on_inconsistent_transition);
        assert_eq!(opts.keybindings, KeyBindings::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::from_toml_str(
            r#"
[keybindings.bindings]
arrow_left = "KeyJ"
"#,
        )
        .unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyJ"),
            Some(LogicalInput::ArrowLeft)
        );
        assert_eq!(opts.keybindings.lookup("ArrowLeft"), None);
        assert_eq!(opts.keybindings.lookup("Space"), Some(LogicalInput::Space));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[diagnostics\n").unwrap_err();
        assert!(matches!(err, InputError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_through_a_file() {
        let dir = std::env::temp_dir()
            .join(format!("frame-input-options-{}", std::process::id()));
        let path = dir.join("presets").join("input.toml");

        let mut opts = Options::default();
        opts.keybindings.set(LogicalInput::Q, "Tab");
        opts.diagnostics.warn_on_inconsistent_transition = false;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("Tab"), Some(LogicalInput::Q));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/frame-input.toml"))
            .unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("diagnostics"));
        // Key bindings are edited as TOML, not through the schema UI.
        assert!(!props.contains_key("keybindings"));

        let diagnostics = &props["diagnostics"]["properties"];
        assert!(diagnostics.get("unsupported_code_level").is_some());
        assert!(diagnostics.get("warn_on_inconsistent_transition").is_some());
    }
}

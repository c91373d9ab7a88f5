use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::{
    modifier_for_code, Binding, CodeTranslator, LogicalInput,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeyBindingsFile")]
/// Configurable keyboard bindings mapping logical inputs to key codes.
///
/// Key codes use the DOM `KeyboardEvent.code` names (`"KeyW"`, `"Space"`,
/// `"ArrowLeft"`), which are also winit's `KeyCode` debug format. Modifier
/// codes are fixed and not part of the table.
///
/// Deserialized tables are layered over the defaults, so a preset only
/// needs to list the inputs it moves.
pub struct KeyBindings {
    /// Maps input → key string (e.g. `Space` → `"Space"`).
    pub bindings: HashMap<LogicalInput, String>,
    /// Reverse lookup cache (key string → input). Rebuilt on load.
    #[serde(skip)]
    code_to_input: FxHashMap<String, LogicalInput>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = LogicalInput::ALL
            .into_iter()
            .map(|input| (input, input.default_code().to_owned()))
            .collect();

        let mut opts = Self {
            bindings,
            code_to_input: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

/// On-disk shape of [`KeyBindings`], without the lookup cache.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KeyBindingsFile {
    bindings: HashMap<LogicalInput, String>,
}

impl From<KeyBindingsFile> for KeyBindings {
    fn from(file: KeyBindingsFile) -> Self {
        let mut keys = Self::default();
        keys.bindings.extend(file.bindings);
        keys.rebuild_reverse_map();
        keys
    }
}

impl KeyBindings {
    /// Rebuild the reverse lookup map (key string → input).
    ///
    /// If two inputs claim the same code the lower [`LogicalInput`] wins,
    /// so the result does not depend on hash map iteration order.
    pub fn rebuild_reverse_map(&mut self) {
        self.code_to_input.clear();
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_unstable_by_key(|(input, _)| **input);
        for (input, code) in entries {
            if modifier_for_code(code).is_some() {
                log::warn!(
                    "binding {input:?} to modifier code {code} has no effect"
                );
                continue;
            }
            let _ = self.code_to_input.entry(code.clone()).or_insert(*input);
        }
    }

    /// Bind `input` to `code`, replacing its previous code.
    pub fn set(&mut self, input: LogicalInput, code: impl Into<String>) {
        let _ = self.bindings.insert(input, code.into());
        self.rebuild_reverse_map();
    }

    /// Look up the input for a key string.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<LogicalInput> {
        self.code_to_input.get(code).copied()
    }

    /// The key string currently bound to `input`, if any.
    #[must_use]
    pub fn code_for(&self, input: LogicalInput) -> Option<&str> {
        self.bindings.get(&input).map(String::as_str)
    }
}

impl CodeTranslator for KeyBindings {
    fn translate(&self, code: &str) -> Option<Binding> {
        if let Some(modifier) = modifier_for_code(code) {
            return Some(Binding::Modifier(modifier));
        }
        self.lookup(code).map(Binding::Input)
    }
}

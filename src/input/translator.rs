//! Platform key code → logical input lookup.

use super::keyboard::{LogicalInput, Modifier};

/// What a platform key code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A trackable key with its own press record.
    Input(LogicalInput),
    /// A modifier bit.
    Modifier(Modifier),
}

/// Maps platform key codes to [`Binding`]s.
///
/// Implemented by [`KeyBindings`](crate::options::KeyBindings) (the
/// configurable table) and by any `Fn(&str) -> Option<Binding>` closure,
/// which is handy for tests and fixed layouts.
pub trait CodeTranslator {
    /// Resolve `code`, or `None` if it is not mapped.
    fn translate(&self, code: &str) -> Option<Binding>;
}

impl<F> CodeTranslator for F
where
    F: Fn(&str) -> Option<Binding>,
{
    fn translate(&self, code: &str) -> Option<Binding> {
        self(code)
    }
}

/// Resolve `code` against the fixed modifier code table.
#[must_use]
pub fn modifier_for_code(code: &str) -> Option<Modifier> {
    Modifier::ALL
        .into_iter()
        .find(|m| m.codes().contains(&code))
}

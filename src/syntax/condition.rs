use super::normalize::normalize_atom;
use crate::error::DefinitionError;
use serde::Serialize;
use std::fmt;

/// An output condition written as `?atom`.
///
/// The empty statement means "no condition" and always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConditionStatement {
    atom: String,
}

impl ConditionStatement {
    pub fn parse(statement: &str) -> Result<Self, DefinitionError> {
        let invalid = || DefinitionError::InvalidConditionFormat(statement.to_string());
        let atom = statement.strip_prefix('?').ok_or_else(invalid)?;
        let atom = normalize_atom(atom).map_err(|_| invalid())?;
        Ok(Self { atom })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The normalized condition atom without the leading `?`; `""` when empty.
    pub fn condition_atom(&self) -> &str {
        &self.atom
    }

    pub fn is_empty(&self) -> bool {
        self.atom.is_empty()
    }
}

impl fmt::Display for ConditionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "?{}", self.atom)
        }
    }
}

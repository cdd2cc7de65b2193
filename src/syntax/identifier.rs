use super::patterns::IDENTIFIER_RE;
use crate::error::DefinitionError;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// A validated element or attribute identifier.
///
/// Identifiers start with a lowercase letter followed by at least one letter,
/// digit or underscore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `identifier` for an object of kind `object` (e.g. `@entity_input`).
    pub fn parse(object: &str, identifier: &str) -> Result<Self, DefinitionError> {
        if Self::is_valid(identifier) {
            Ok(Self(identifier.to_string()))
        } else {
            Err(DefinitionError::InvalidIdentifier {
                object: object.to_string(),
                identifier: identifier.to_string(),
            })
        }
    }

    pub fn is_valid(identifier: &str) -> bool {
        IDENTIFIER_RE.is_match(identifier)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

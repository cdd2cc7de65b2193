use super::patterns::SOURCE_SELECTOR_RE;
use crate::error::DefinitionError;
use serde::Serialize;
use std::fmt;

/// A reference to an externally supplied relation: `$name`, `$#name` or
/// `$name[index]`.
///
/// The empty selector means the value has no external source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceSelector {
    relation: String,
}

impl SourceSelector {
    pub fn parse(selector: &str) -> Result<Self, DefinitionError> {
        let relation = SOURCE_SELECTOR_RE
            .captures(selector)
            .and_then(|c| c.get(1))
            .ok_or_else(|| DefinitionError::InvalidSelectorFormat(selector.to_string()))?;
        Ok(Self {
            relation: relation.as_str().to_string(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The selector without its leading `$`; `""` when empty.
    pub fn source_relation(&self) -> &str {
        &self.relation
    }

    pub fn is_empty(&self) -> bool {
        self.relation.is_empty()
    }
}

impl fmt::Display for SourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "${}", self.relation)
        }
    }
}

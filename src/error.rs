use std::fmt;
use thiserror::Error;

/// The scalar type a fixed property is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Integer,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Integer => write!(f, "integer"),
        }
    }
}

/// Coarse classification of a [`DefinitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Not-an-object where one is required, or a wrong number of definition blocks.
    Structural,
    /// Missing required property or wrong scalar type.
    Property,
    /// Identifier does not satisfy the identifier grammar.
    Identifier,
    /// A string fails one of the embedded micro-grammars.
    Grammar,
    /// A template placeholder has no matching declaration.
    Referential,
}

/// Errors that can occur while extracting and parsing a GUI definition.
///
/// Every variant is terminal: parsing stops at the first one found and no
/// partial definition is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("invalid number of gui definition comments found: {0}")]
    WrongNumberOfComments(usize),

    #[error("{object} is not a valid json object")]
    InvalidJsonObject { object: String },

    #[error("{object} is not a valid json object: {explanation}")]
    MalformedJson { object: String, explanation: String },

    #[error("missing property {property} in {object} object")]
    MissingProperty { object: String, property: String },

    #[error("property {property} in {object} object must be of type {expected}")]
    InvalidPropertyType {
        object: String,
        property: String,
        expected: PropertyType,
    },

    #[error("{identifier} is not a valid identifier for an {object} object")]
    InvalidIdentifier { object: String, identifier: String },

    #[error("{0} is not a valid atom")]
    InvalidAtomFormat(String),

    #[error("{0} is not a valid code representation template")]
    InvalidTemplateFormat(String),

    #[error("{0} is not a valid condition statement")]
    InvalidConditionFormat(String),

    #[error("{0} is not a valid source selector")]
    InvalidSelectorFormat(String),

    #[error("placeholder \"{placeholder}\" in representation template \"{template}\" is not defined")]
    MissingPlaceholder {
        placeholder: String,
        template: String,
    },
}

impl DefinitionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DefinitionError::WrongNumberOfComments(_)
            | DefinitionError::InvalidJsonObject { .. }
            | DefinitionError::MalformedJson { .. } => ErrorCategory::Structural,
            DefinitionError::MissingProperty { .. }
            | DefinitionError::InvalidPropertyType { .. } => ErrorCategory::Property,
            DefinitionError::InvalidIdentifier { .. } => ErrorCategory::Identifier,
            DefinitionError::InvalidAtomFormat(_)
            | DefinitionError::InvalidTemplateFormat(_)
            | DefinitionError::InvalidConditionFormat(_)
            | DefinitionError::InvalidSelectorFormat(_) => ErrorCategory::Grammar,
            DefinitionError::MissingPlaceholder { .. } => ErrorCategory::Referential,
        }
    }
}

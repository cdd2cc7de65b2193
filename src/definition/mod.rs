//! The validated GUI definition tree.
//!
//! A [`GuiDefinition`] is built once by the parser and is read-only afterwards.
//! Properties with documented defaults are exposed through accessors that
//! resolve the default on read; defaults that depend on sibling data (such as
//! synthesized representation templates) are computed from the complete child
//! map at that point.
pub mod information;
pub mod input;
pub mod output;

pub use information::*;
pub use input::*;
pub use output::*;

use crate::diagnostics::Diagnostics;
use crate::error::DefinitionError;
use crate::syntax::Identifier;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Insertion-ordered map from identifier to child element.
///
/// Declaration order drives the layout order of the generated interface.
pub type ElementMap<T> = IndexMap<Identifier, T, ahash::RandomState>;

/// The four element kinds a definition can declare, named by their key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    ValueInput,
    EntityInput,
    ValueOutput,
    EntityOutput,
}

impl ElementKind {
    pub fn object_name(&self) -> &'static str {
        match self {
            ElementKind::ValueInput => "@value_input",
            ElementKind::EntityInput => "@entity_input",
            ElementKind::ValueOutput => "@value_output",
            ElementKind::EntityOutput => "@entity_output",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_name())
    }
}

/// Root of a parsed GUI definition.
#[derive(Debug, Clone, Serialize)]
pub struct GuiDefinition {
    pub(crate) program_information: ProgramInformation,
    pub(crate) program_input: ProgramInput,
    pub(crate) program_output: ProgramOutput,
}

impl GuiDefinition {
    /// Parses the JSON content of a definition comment.
    ///
    /// Unknown keys are recorded in `diagnostics`; any other problem aborts the
    /// parse with the first error found.
    pub fn from_json_str(
        json: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, DefinitionError> {
        crate::parsing::parse_definition(json, diagnostics)
    }

    pub fn program_information(&self) -> &ProgramInformation {
        &self.program_information
    }

    pub fn program_input(&self) -> &ProgramInput {
        &self.program_input
    }

    pub fn program_output(&self) -> &ProgramOutput {
        &self.program_output
    }
}

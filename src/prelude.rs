//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! aspgui crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use aspgui::prelude::*;
//!
//! # fn run_example() -> Result<(), DefinitionError> {
//! let mut diagnostics = Diagnostics::new();
//! let definition = parse_source("%*:: {...} ::*%", &mut diagnostics)?;
//! println!("{}", definition.program_information().name());
//! # Ok(())
//! # }
//! ```

// Entry points
pub use crate::extract::{definition_comments, parse_source};

// Definition tree
pub use crate::definition::{
    ElementKind, ElementMap, EntityInput, EntityOutput, GuiDefinition, InputAttribute,
    InputElement, InputValue, OutputAttribute, OutputElement, OutputValue, ProgramInformation,
    ProgramInput, ProgramOutput, ValueInput, ValueOutput,
};

// Embedded grammars
pub use crate::syntax::{
    normalize_atom, normalize_atom_template, ConditionStatement, Identifier,
    RepresentationTemplate, SourceSelector, TemplatePart,
};

// Diagnostics and errors
pub use crate::diagnostics::{Diagnostics, Warning};
pub use crate::error::{DefinitionError, ErrorCategory, PropertyType};

// Outline rendering
pub use crate::outline::OutlineFormatter;

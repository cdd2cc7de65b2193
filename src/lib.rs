//! # aspgui - GUI Definitions for Logic Programs
//!
//! **aspgui** reads the GUI definition that an annotated logic program embeds in
//! a `%*:: ... ::*%` comment and turns it into a strictly validated, immutable
//! definition tree describing the program's input and output interface.
//!
//! ## Definition Language
//!
//! The comment holds a JSON object with three required sections:
//!
//! - `program_information`: `name` (required), `description`, `author`, `version`.
//! - `program_input`: `@value_input:<id>` and `@entity_input:<id>` elements.
//! - `program_output`: `@value_output:<id>` and `@entity_output:<id>` elements.
//!
//! Element children are declared with `@input_value:<id>`, `@input_attribute:<id>`,
//! `@output_value:<id>` and `@output_attribute:<id>` keys. String properties carry
//! small embedded grammars: atoms (`edge(a,"b",3)`), atom templates with
//! `::placeholder` tokens, condition statements (an atom prefixed with `?`, such
//! as `?show_details`) and source selectors (`$name`, `$#name`, `$name[0]`).
//!
//! ## Workflow
//!
//! 1.  **Extract**: [`parse_source`] finds the single definition comment in the
//!     program text.
//! 2.  **Parse**: every object level is read in source order; unknown keys are
//!     collected as warnings in a [`Diagnostics`](diagnostics::Diagnostics) value, everything else that is
//!     wrong aborts the parse with a [`DefinitionError`](error::DefinitionError).
//! 3.  **Consume**: downstream generators read the tree through its accessors,
//!     which resolve documented defaults such as synthesized templates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aspgui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = std::fs::read_to_string("graph_coloring.lp")?;
//!
//!     let mut diagnostics = Diagnostics::new();
//!     let definition = parse_source(&program, &mut diagnostics)?;
//!
//!     for warning in diagnostics.warnings() {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     for (identifier, element) in definition.program_input().elements() {
//!         if let InputElement::Entity(entity) = element {
//!             println!("{} -> {}", identifier, entity.atom_representation());
//!         }
//!     }
//!
//!     println!("{}", OutlineFormatter::format(&definition));
//!     Ok(())
//! }
//! ```

pub mod definition;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod outline;
mod parsing;
pub mod prelude;
pub mod syntax;

pub use extract::{definition_comments, parse_source};

//! Identifiers and the string micro-grammars embedded in definition values:
//! atoms, atom templates, condition statements and source selectors.
pub mod condition;
pub mod identifier;
pub mod normalize;
pub(crate) mod patterns;
pub mod selector;
pub mod template;

pub use condition::*;
pub use identifier::*;
pub use normalize::*;
pub use selector::*;
pub use template::*;

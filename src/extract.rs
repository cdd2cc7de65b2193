//! Locates the GUI definition comment inside a logic program and parses it.
use crate::definition::GuiDefinition;
use crate::diagnostics::Diagnostics;
use crate::error::DefinitionError;
use crate::syntax::patterns::DEFINITION_COMMENT_RE;

/// Returns the trimmed contents of every `%*:: ... ::*%` block in `source`,
/// in order of appearance. Blocks may span multiple lines.
pub fn definition_comments(source: &str) -> Vec<&str> {
    DEFINITION_COMMENT_RE
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim_matches(|c: char| c <= ' '))
        .collect()
}

/// Extracts the single GUI definition embedded in `source` and parses it.
///
/// Exactly one definition comment must be present; zero or several raise
/// [`DefinitionError::WrongNumberOfComments`].
pub fn parse_source(
    source: &str,
    diagnostics: &mut Diagnostics,
) -> Result<GuiDefinition, DefinitionError> {
    let comments = definition_comments(source);
    let [definition] = comments.as_slice() else {
        return Err(DefinitionError::WrongNumberOfComments(comments.len()));
    };

    tracing::info!("[parsing] extracted gui definition comment");
    let definition = GuiDefinition::from_json_str(definition, diagnostics)?;
    tracing::info!(
        inputs = definition.program_input().elements().len(),
        outputs = definition.program_output().elements().len(),
        warnings = diagnostics.len(),
        "[parsing] gui definition parsed"
    );
    Ok(definition)
}

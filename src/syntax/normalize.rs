use super::patterns::{ATOM_RE, ATOM_TEMPLATE_RE, ATOM_TEMPLATE_VALUE_RE, ATOM_VALUE_RE};
use crate::error::DefinitionError;
use itertools::Itertools;
use regex::Regex;

/// Normalizes the string form of an atom.
///
/// The relation name is kept verbatim and the argument list is rebuilt from its
/// values joined by single commas, dropping all surrounding whitespace:
/// `foo( a , 2 , "x" )` becomes `foo(a,2,"x")`.
pub fn normalize_atom(atom: &str) -> Result<String, DefinitionError> {
    normalize_with(&ATOM_RE, &ATOM_VALUE_RE, atom)
        .ok_or_else(|| DefinitionError::InvalidAtomFormat(atom.to_string()))
}

/// Normalizes an atom template, which additionally allows `::identifier`
/// placeholders as relation name or argument values.
pub fn normalize_atom_template(template: &str) -> Result<String, DefinitionError> {
    normalize_with(&ATOM_TEMPLATE_RE, &ATOM_TEMPLATE_VALUE_RE, template)
        .ok_or_else(|| DefinitionError::InvalidTemplateFormat(template.to_string()))
}

fn normalize_with(shape: &Regex, value: &Regex, input: &str) -> Option<String> {
    let captures = shape.captures(input)?;
    let relation = captures.get(1)?.as_str();

    match captures.get(2) {
        Some(arguments) => {
            let values = value
                .find_iter(arguments.as_str())
                .map(|m| m.as_str())
                .join(",");
            Some(format!("{}({})", relation, values))
        }
        None => Some(relation.to_string()),
    }
}

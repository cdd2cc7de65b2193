use super::normalize::normalize_atom_template;
use super::patterns::{PLACEHOLDER_RE, TEMPLATE_PART_RE};
use crate::error::DefinitionError;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// An immutable representation template such as `edge(::from,::to)` or
/// `Edge from ::from to ::to`.
///
/// Gui-representation templates are free-form text; atom-representation
/// templates must satisfy the atom-template grammar and are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepresentationTemplate {
    template: String,
}

/// A single token of a representation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Literal text between spaces and placeholders.
    Literal(&'a str),
    /// A single space character.
    Space,
    /// A `::identifier` placeholder; holds the identifier without the `::` prefix.
    Placeholder(&'a str),
}

impl fmt::Display for TemplatePart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplatePart::Literal(text) => f.write_str(text),
            TemplatePart::Space => f.write_str(" "),
            TemplatePart::Placeholder(identifier) => write!(f, "::{}", identifier),
        }
    }
}

impl RepresentationTemplate {
    /// Wraps a gui-representation string; the text is kept as-is.
    pub fn from_gui_representation(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Validates and normalizes an atom-representation string.
    pub fn from_atom_representation(template: &str) -> Result<Self, DefinitionError> {
        Ok(Self {
            template: normalize_atom_template(template)?,
        })
    }

    /// Synthesizes the default template `name(::a1,::a2,...,::ak)`.
    pub fn default_for<I, S>(name: &str, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let placeholders = identifiers
            .into_iter()
            .map(|identifier| format!("::{}", identifier.as_ref()))
            .join(",");
        Self {
            template: format!("{}({})", name, placeholders),
        }
    }

    pub fn template_string(&self) -> &str {
        &self.template
    }

    /// Placeholder identifiers in order of appearance; duplicates are kept.
    pub fn placeholder_ids(&self) -> Vec<&str> {
        PLACEHOLDER_RE
            .captures_iter(&self.template)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Tokenizes the template into literals, single spaces and placeholders.
    pub fn parts(&self) -> Vec<TemplatePart<'_>> {
        let mut parts = Vec::new();
        let mut last_end = 0;

        for captures in TEMPLATE_PART_RE.captures_iter(&self.template) {
            let Some(token) = captures.get(0) else {
                continue;
            };
            if token.start() > last_end {
                parts.push(TemplatePart::Literal(&self.template[last_end..token.start()]));
            }
            match captures.get(2) {
                Some(identifier) => parts.push(TemplatePart::Placeholder(identifier.as_str())),
                None => parts.push(TemplatePart::Space),
            }
            last_end = token.end();
        }
        if last_end < self.template.len() {
            parts.push(TemplatePart::Literal(&self.template[last_end..]));
        }

        parts
    }
}

impl fmt::Display for RepresentationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

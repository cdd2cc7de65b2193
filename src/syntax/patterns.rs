//! Regular expressions for the string micro-grammars embedded in a GUI definition.
//!
//! The fragments are composed once into anchored (`^...$`) shape patterns and
//! unanchored term patterns. Whitespace classes are ASCII only.
use regex::Regex;
use std::sync::LazyLock;

/// An identifier as it may appear inside a placeholder or an atom argument.
///
/// Element and attribute identifiers are held to the stricter
/// [`IDENTIFIER_RE`], which requires at least two characters.
pub(crate) const IDENTIFIER: &str = "[a-z][A-Za-z0-9_]*";
pub(crate) const STRING_LITERAL: &str = r#""(?:[^"]|\\")*""#;
pub(crate) const NUMBER_LITERAL: &str = "0|[1-9][0-9]*";

const WHITESPACE: &str = r"[ \t\n\x0B\x0C\r]";

fn value_pattern() -> String {
    format!("({IDENTIFIER}|{STRING_LITERAL}|{NUMBER_LITERAL})")
}

fn template_value_pattern() -> String {
    format!("((?:::)?{IDENTIFIER}|{STRING_LITERAL}|{NUMBER_LITERAL})")
}

fn atom_pattern() -> String {
    let argument = format!("{WHITESPACE}*{}{WHITESPACE}*", value_pattern());
    format!(r"(-?{IDENTIFIER})(?:\((({argument},?)+)\))?")
}

fn atom_template_pattern() -> String {
    let argument = format!(" *{} *", template_value_pattern());
    format!(r"(-?(?:::)?{IDENTIFIER})(?:\((({argument},?)+)\))?")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern '{pattern}': {e}"))
}

pub(crate) static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("^[a-z][a-zA-Z0-9_]+$"));

pub(crate) static ATOM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^(?:{})$", atom_pattern())));

pub(crate) static ATOM_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| compile(&value_pattern()));

pub(crate) static ATOM_TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^(?:{})$", atom_template_pattern())));

pub(crate) static ATOM_TEMPLATE_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&template_value_pattern()));

pub(crate) static SOURCE_SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^\$(#?{IDENTIFIER}(?:\[[0-9]+\])?)$")));

pub(crate) static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("::({IDENTIFIER})")));

/// Splits a template into spaces and placeholders; group 2 is the placeholder identifier.
pub(crate) static TEMPLATE_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(" |(::({IDENTIFIER}))")));

pub(crate) static DEFINITION_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)%\*::(.+?)::\*%"));

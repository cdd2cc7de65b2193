use crate::definition::{
    EntityInput, EntityOutput, GuiDefinition, InputElement, OutputElement, ValueInput, ValueOutput,
};
use crate::syntax::ConditionStatement;

const INDENT: &str = "  ";

/// Renders a parsed definition as an indented, human-readable outline.
///
/// All defaults are resolved, so the outline shows exactly what a downstream
/// generator would read through the accessors.
pub struct OutlineFormatter;

impl OutlineFormatter {
    pub fn format(definition: &GuiDefinition) -> String {
        let mut out = Self::format_information(definition);

        out.push_str("input:\n");
        for element in definition.program_input().elements().values() {
            let text = match element {
                InputElement::Value(element) => Self::format_value_input(element),
                InputElement::Entity(element) => Self::format_entity_input(element),
            };
            out.push_str(&text);
        }

        out.push_str("output:\n");
        for element in definition.program_output().elements().values() {
            let text = match element {
                OutputElement::Value(element) => Self::format_value_output(element),
                OutputElement::Entity(element) => Self::format_entity_output(element),
            };
            out.push_str(&text);
        }
        out
    }

    fn format_information(definition: &GuiDefinition) -> String {
        let information = definition.program_information();
        let mut result = format!("program: {}", information.name());
        if let Some(version) = information.version() {
            result.push_str(&format!(" {}", version));
        }
        if let Some(author) = information.author() {
            result.push_str(&format!(" by {}", author));
        }
        result.push('\n');
        if let Some(description) = information.description() {
            result.push_str(&format!("{INDENT}{}\n", description));
        }
        result
    }

    fn format_value_input(element: &ValueInput) -> String {
        let mut result =
            Self::format_header("@value_input", element.identifier().as_str(), element.title());
        result.push_str(&format!("{INDENT}{INDENT}gui: {}\n", element.gui_representation()));
        for value in element.values().values() {
            result.push_str(&format!(
                "{INDENT}{INDENT}@input_value {} \"{}\"",
                value.identifier(),
                value.name()
            ));
            if let Some(default) = value.default_value() {
                result.push_str(&format!(" default={}", default));
            }
            if !value.value_source().is_empty() {
                result.push_str(&format!(" source={}", value.value_source()));
            }
            result.push_str(&format!(" atom: {}\n", value.atom_representation()));
        }
        result
    }

    fn format_entity_input(element: &EntityInput) -> String {
        let mut result =
            Self::format_header("@entity_input", element.identifier().as_str(), element.title());
        let max = element
            .input_count_max()
            .map_or_else(|| "*".to_string(), |max| max.to_string());
        result.push_str(&format!(
            "{INDENT}{INDENT}count: {}..{}\n",
            element.input_count_min(),
            max
        ));
        result.push_str(&format!("{INDENT}{INDENT}gui: {}\n", element.gui_representation()));
        result.push_str(&format!("{INDENT}{INDENT}atom: {}\n", element.atom_representation()));
        for attribute in element.attributes().values() {
            result.push_str(&format!(
                "{INDENT}{INDENT}@input_attribute {} \"{}\"\n",
                attribute.identifier(),
                attribute.name()
            ));
        }
        result
    }

    fn format_value_output(element: &ValueOutput) -> String {
        let mut result =
            Self::format_header("@value_output", element.identifier().as_str(), element.title());
        result.push_str(&Self::format_condition(element.output_condition()));
        result.push_str(&format!("{INDENT}{INDENT}gui: {}\n", element.gui_representation()));
        for value in element.values().values() {
            result.push_str(&format!(
                "{INDENT}{INDENT}@output_value {} \"{}\" atom: {}\n",
                value.identifier(),
                value.name(),
                value.atom_representation()
            ));
        }
        result
    }

    fn format_entity_output(element: &EntityOutput) -> String {
        let mut result =
            Self::format_header("@entity_output", element.identifier().as_str(), element.title());
        result.push_str(&Self::format_condition(element.output_condition()));
        result.push_str(&format!("{INDENT}{INDENT}gui: {}\n", element.gui_representation()));
        result.push_str(&format!("{INDENT}{INDENT}atom: {}\n", element.atom_representation()));
        for attribute in element.attributes().values() {
            result.push_str(&format!(
                "{INDENT}{INDENT}@output_attribute {} \"{}\"\n",
                attribute.identifier(),
                attribute.name()
            ));
        }
        result
    }

    fn format_header(kind: &str, identifier: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("{INDENT}{} {} \"{}\"\n", kind, identifier, title),
            None => format!("{INDENT}{} {}\n", kind, identifier),
        }
    }

    /// The `when:` line, or nothing for an unconditional element.
    fn format_condition(condition: &ConditionStatement) -> String {
        if condition.is_empty() {
            String::new()
        } else {
            format!("{INDENT}{INDENT}when: {}\n", condition)
        }
    }
}

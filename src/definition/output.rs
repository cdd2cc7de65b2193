use super::{ElementKind, ElementMap};
use crate::syntax::{ConditionStatement, Identifier, RepresentationTemplate};
use serde::Serialize;
use std::borrow::Cow;

/// The `program_output` section: output elements in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ProgramOutput {
    pub(crate) elements: ElementMap<OutputElement>,
}

impl ProgramOutput {
    pub fn elements(&self) -> &ElementMap<OutputElement> {
        &self.elements
    }

    pub fn get(&self, identifier: &str) -> Option<&OutputElement> {
        self.elements.get(identifier)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum OutputElement {
    #[serde(rename = "value_output")]
    Value(ValueOutput),
    #[serde(rename = "entity_output")]
    Entity(EntityOutput),
}

impl OutputElement {
    pub fn identifier(&self) -> &Identifier {
        match self {
            OutputElement::Value(element) => &element.identifier,
            OutputElement::Entity(element) => &element.identifier,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            OutputElement::Value(element) => element.title(),
            OutputElement::Entity(element) => element.title(),
        }
    }

    pub fn output_condition(&self) -> &ConditionStatement {
        match self {
            OutputElement::Value(element) => element.output_condition(),
            OutputElement::Entity(element) => element.output_condition(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            OutputElement::Value(_) => ElementKind::ValueOutput,
            OutputElement::Entity(_) => ElementKind::EntityOutput,
        }
    }
}

/// An output element showing independent scalar values.
#[derive(Debug, Clone, Serialize)]
pub struct ValueOutput {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "ConditionStatement::is_empty")]
    pub(crate) output_condition: ConditionStatement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gui_representation: Option<RepresentationTemplate>,
    pub(crate) values: ElementMap<OutputValue>,
}

impl ValueOutput {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The condition under which the element is shown; empty means always.
    pub fn output_condition(&self) -> &ConditionStatement {
        &self.output_condition
    }

    pub fn gui_representation(&self) -> Cow<'_, RepresentationTemplate> {
        match &self.gui_representation {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(RepresentationTemplate::default_for(
                self.identifier.as_str(),
                self.values.keys(),
            )),
        }
    }

    pub fn values(&self) -> &ElementMap<OutputValue> {
        &self.values
    }
}

/// A single scalar value of a [`ValueOutput`].
#[derive(Debug, Clone, Serialize)]
pub struct OutputValue {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) atom_representation: Option<RepresentationTemplate>,
}

impl OutputValue {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.identifier.as_str())
    }

    pub fn atom_representation(&self) -> Cow<'_, RepresentationTemplate> {
        match &self.atom_representation {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(RepresentationTemplate::default_for(
                self.identifier.as_str(),
                [&self.identifier],
            )),
        }
    }
}

/// An output element listing entities that share attributes.
#[derive(Debug, Clone, Serialize)]
pub struct EntityOutput {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "ConditionStatement::is_empty")]
    pub(crate) output_condition: ConditionStatement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gui_representation: Option<RepresentationTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) atom_representation: Option<RepresentationTemplate>,
    pub(crate) attributes: ElementMap<OutputAttribute>,
}

impl EntityOutput {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn output_condition(&self) -> &ConditionStatement {
        &self.output_condition
    }

    pub fn gui_representation(&self) -> Cow<'_, RepresentationTemplate> {
        self.gui_representation
            .as_ref()
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(self.default_representation()))
    }

    pub fn atom_representation(&self) -> Cow<'_, RepresentationTemplate> {
        self.atom_representation
            .as_ref()
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(self.default_representation()))
    }

    pub fn attributes(&self) -> &ElementMap<OutputAttribute> {
        &self.attributes
    }

    fn default_representation(&self) -> RepresentationTemplate {
        RepresentationTemplate::default_for(self.identifier.as_str(), self.attributes.keys())
    }
}

/// A named attribute of an [`EntityOutput`].
#[derive(Debug, Clone, Serialize)]
pub struct OutputAttribute {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl OutputAttribute {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.identifier.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

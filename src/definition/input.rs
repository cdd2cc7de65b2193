use super::{ElementKind, ElementMap};
use crate::syntax::{Identifier, RepresentationTemplate, SourceSelector};
use serde::Serialize;
use std::borrow::Cow;

/// The `program_input` section: input elements in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ProgramInput {
    pub(crate) elements: ElementMap<InputElement>,
}

impl ProgramInput {
    pub fn elements(&self) -> &ElementMap<InputElement> {
        &self.elements
    }

    pub fn get(&self, identifier: &str) -> Option<&InputElement> {
        self.elements.get(identifier)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum InputElement {
    #[serde(rename = "value_input")]
    Value(ValueInput),
    #[serde(rename = "entity_input")]
    Entity(EntityInput),
}

impl InputElement {
    pub fn identifier(&self) -> &Identifier {
        match self {
            InputElement::Value(element) => &element.identifier,
            InputElement::Entity(element) => &element.identifier,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            InputElement::Value(element) => element.title(),
            InputElement::Entity(element) => element.title(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            InputElement::Value(_) => ElementKind::ValueInput,
            InputElement::Entity(_) => ElementKind::EntityInput,
        }
    }
}

/// An input element made of independent scalar values.
#[derive(Debug, Clone, Serialize)]
pub struct ValueInput {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gui_representation: Option<RepresentationTemplate>,
    pub(crate) values: ElementMap<InputValue>,
}

impl ValueInput {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The declared gui representation, or `id(::v1,...,::vk)` over the values.
    pub fn gui_representation(&self) -> Cow<'_, RepresentationTemplate> {
        match &self.gui_representation {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(RepresentationTemplate::default_for(
                self.identifier.as_str(),
                self.values.keys(),
            )),
        }
    }

    pub fn values(&self) -> &ElementMap<InputValue> {
        &self.values
    }
}

/// A single scalar value of a [`ValueInput`].
#[derive(Debug, Clone, Serialize)]
pub struct InputValue {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<String>,
    #[serde(skip_serializing_if = "SourceSelector::is_empty")]
    pub(crate) value_source: SourceSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) atom_representation: Option<RepresentationTemplate>,
}

impl InputValue {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Display name; defaults to the identifier.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.identifier.as_str())
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn value_source(&self) -> &SourceSelector {
        &self.value_source
    }

    /// The declared atom representation, or `id(::id)`.
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

/// An input element describing a set of entities that share attributes.
#[derive(Debug, Clone, Serialize)]
pub struct EntityInput {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_count_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_count_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gui_representation: Option<RepresentationTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) atom_representation: Option<RepresentationTemplate>,
    pub(crate) attributes: ElementMap<InputAttribute>,
}

impl EntityInput {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Minimum number of entities the user must enter; defaults to 0.
    pub fn input_count_min(&self) -> u64 {
        self.input_count_min.unwrap_or(0)
    }

    /// Maximum number of entities; `None` means unbounded.
    pub fn input_count_max(&self) -> Option<u64> {
        self.input_count_max
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

    pub fn attributes(&self) -> &ElementMap<InputAttribute> {
        &self.attributes
    }

    fn default_representation(&self) -> RepresentationTemplate {
        RepresentationTemplate::default_for(self.identifier.as_str(), self.attributes.keys())
    }
}

/// A named attribute of an [`EntityInput`].
#[derive(Debug, Clone, Serialize)]
pub struct InputAttribute {
    pub(crate) identifier: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl InputAttribute {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Display name; defaults to the identifier.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.identifier.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

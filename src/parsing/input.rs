use super::integrity;
use super::{ChildRule, DefinitionBuilder, Property, Setter};
use crate::definition::{
    ElementMap, EntityInput, InputAttribute, InputElement, InputValue, ProgramInput, ValueInput,
};
use crate::error::DefinitionError;
use crate::syntax::{Identifier, RepresentationTemplate, SourceSelector};

#[derive(Default)]
pub(super) struct ProgramInputBuilder {
    elements: ElementMap<InputElement>,
}

impl DefinitionBuilder for ProgramInputBuilder {
    type Output = ProgramInput;

    const OBJECT_NAME: &'static str = "program_input";
    const PROPERTIES: &'static [Property<Self>] = &[];
    const CHILDREN: &'static [ChildRule<Self>] = &[
        child_rule!("@value_input" => ValueInputBuilder, elements, InputElement::Value),
        child_rule!("@entity_input" => EntityInputBuilder, elements, InputElement::Entity),
    ];

    fn finish(self) -> Result<ProgramInput, DefinitionError> {
        Ok(ProgramInput {
            elements: self.elements,
        })
    }
}

pub(super) struct ValueInputBuilder {
    identifier: Identifier,
    title: Option<String>,
    gui_representation: Option<RepresentationTemplate>,
    values: ElementMap<InputValue>,
}

impl ValueInputBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read value input element");
        Self {
            identifier,
            title: None,
            gui_representation: None,
            values: ElementMap::default(),
        }
    }
}

impl DefinitionBuilder for ValueInputBuilder {
    type Output = ValueInput;

    const OBJECT_NAME: &'static str = "@value_input";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("title" => title),
        Property {
            name: "gui_representation",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.gui_representation = Some(RepresentationTemplate::from_gui_representation(&v));
                Ok(())
            }),
        },
    ];
    const CHILDREN: &'static [ChildRule<Self>] =
        &[child_rule!("@input_value" => InputValueBuilder, values)];

    fn finish(self) -> Result<ValueInput, DefinitionError> {
        let element = ValueInput {
            identifier: self.identifier,
            title: self.title,
            gui_representation: self.gui_representation,
            values: self.values,
        };
        integrity::validate(&element)?;
        Ok(element)
    }
}

pub(super) struct InputValueBuilder {
    identifier: Identifier,
    name: Option<String>,
    default_value: Option<String>,
    value_source: SourceSelector,
    atom_representation: Option<RepresentationTemplate>,
}

impl InputValueBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read input value element");
        Self {
            identifier,
            name: None,
            default_value: None,
            value_source: SourceSelector::empty(),
            atom_representation: None,
        }
    }
}

impl DefinitionBuilder for InputValueBuilder {
    type Output = InputValue;

    const OBJECT_NAME: &'static str = "@input_value";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("name" => name),
        text_property!("default_value" => default_value),
        Property {
            name: "value_source",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.value_source = SourceSelector::parse(&v)?;
                Ok(())
            }),
        },
        Property {
            name: "atom_representation",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.atom_representation = Some(RepresentationTemplate::from_atom_representation(&v)?);
                Ok(())
            }),
        },
    ];

    fn finish(self) -> Result<InputValue, DefinitionError> {
        let value = InputValue {
            identifier: self.identifier,
            name: self.name,
            default_value: self.default_value,
            value_source: self.value_source,
            atom_representation: self.atom_representation,
        };
        integrity::validate(&value)?;
        Ok(value)
    }
}

pub(super) struct EntityInputBuilder {
    identifier: Identifier,
    title: Option<String>,
    description: Option<String>,
    input_count_min: Option<u64>,
    input_count_max: Option<u64>,
    gui_representation: Option<RepresentationTemplate>,
    atom_representation: Option<RepresentationTemplate>,
    attributes: ElementMap<InputAttribute>,
}

impl EntityInputBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read entity input element");
        Self {
            identifier,
            title: None,
            description: None,
            input_count_min: None,
            input_count_max: None,
            gui_representation: None,
            atom_representation: None,
            attributes: ElementMap::default(),
        }
    }
}

impl DefinitionBuilder for EntityInputBuilder {
    type Output = EntityInput;

    const OBJECT_NAME: &'static str = "@entity_input";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("title" => title),
        text_property!("description" => description),
        Property {
            name: "input_count_min",
            setter: Setter::Integer(|b: &mut Self, v: u64| {
                b.input_count_min = Some(v);
                Ok(())
            }),
        },
        Property {
            name: "input_count_max",
            setter: Setter::Integer(|b: &mut Self, v: u64| {
                b.input_count_max = Some(v);
                Ok(())
            }),
        },
        Property {
            name: "gui_representation",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.gui_representation = Some(RepresentationTemplate::from_gui_representation(&v));
                Ok(())
            }),
        },
        Property {
            name: "atom_representation",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.atom_representation = Some(RepresentationTemplate::from_atom_representation(&v)?);
                Ok(())
            }),
        },
    ];
    const CHILDREN: &'static [ChildRule<Self>] =
        &[child_rule!("@input_attribute" => InputAttributeBuilder, attributes)];

    fn finish(self) -> Result<EntityInput, DefinitionError> {
        let element = EntityInput {
            identifier: self.identifier,
            title: self.title,
            description: self.description,
            input_count_min: self.input_count_min,
            input_count_max: self.input_count_max,
            gui_representation: self.gui_representation,
            atom_representation: self.atom_representation,
            attributes: self.attributes,
        };
        integrity::validate(&element)?;
        Ok(element)
    }
}

pub(super) struct InputAttributeBuilder {
    identifier: Identifier,
    name: Option<String>,
    description: Option<String>,
}

impl InputAttributeBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read input attribute element");
        Self {
            identifier,
            name: None,
            description: None,
        }
    }
}

impl DefinitionBuilder for InputAttributeBuilder {
    type Output = InputAttribute;

    const OBJECT_NAME: &'static str = "@input_attribute";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("name" => name),
        text_property!("description" => description),
    ];

    fn finish(self) -> Result<InputAttribute, DefinitionError> {
        Ok(InputAttribute {
            identifier: self.identifier,
            name: self.name,
            description: self.description,
        })
    }
}

use super::integrity;
use super::{ChildRule, DefinitionBuilder, Property, Setter};
use crate::definition::{
    ElementMap, EntityOutput, OutputAttribute, OutputElement, OutputValue, ProgramOutput,
    ValueOutput,
};
use crate::error::DefinitionError;
use crate::syntax::{ConditionStatement, Identifier, RepresentationTemplate};

#[derive(Default)]
pub(super) struct ProgramOutputBuilder {
    elements: ElementMap<OutputElement>,
}

impl DefinitionBuilder for ProgramOutputBuilder {
    type Output = ProgramOutput;

    const OBJECT_NAME: &'static str = "program_output";
    const PROPERTIES: &'static [Property<Self>] = &[];
    const CHILDREN: &'static [ChildRule<Self>] = &[
        child_rule!("@value_output" => ValueOutputBuilder, elements, OutputElement::Value),
        child_rule!("@entity_output" => EntityOutputBuilder, elements, OutputElement::Entity),
    ];

    fn finish(self) -> Result<ProgramOutput, DefinitionError> {
        Ok(ProgramOutput {
            elements: self.elements,
        })
    }
}

pub(super) struct ValueOutputBuilder {
    identifier: Identifier,
    title: Option<String>,
    output_condition: ConditionStatement,
    gui_representation: Option<RepresentationTemplate>,
    values: ElementMap<OutputValue>,
}

impl ValueOutputBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read value output element");
        Self {
            identifier,
            title: None,
            output_condition: ConditionStatement::empty(),
            gui_representation: None,
            values: ElementMap::default(),
        }
    }
}

impl DefinitionBuilder for ValueOutputBuilder {
    type Output = ValueOutput;

    const OBJECT_NAME: &'static str = "@value_output";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("title" => title),
        Property {
            name: "output_condition",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.output_condition = ConditionStatement::parse(&v)?;
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
    ];
    const CHILDREN: &'static [ChildRule<Self>] =
        &[child_rule!("@output_value" => OutputValueBuilder, values)];

    fn finish(self) -> Result<ValueOutput, DefinitionError> {
        let element = ValueOutput {
            identifier: self.identifier,
            title: self.title,
            output_condition: self.output_condition,
            gui_representation: self.gui_representation,
            values: self.values,
        };
        integrity::validate(&element)?;
        Ok(element)
    }
}

pub(super) struct OutputValueBuilder {
    identifier: Identifier,
    name: Option<String>,
    atom_representation: Option<RepresentationTemplate>,
}

impl OutputValueBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read output value element");
        Self {
            identifier,
            name: None,
            atom_representation: None,
        }
    }
}

impl DefinitionBuilder for OutputValueBuilder {
    type Output = OutputValue;

    const OBJECT_NAME: &'static str = "@output_value";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("name" => name),
        Property {
            name: "atom_representation",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.atom_representation = Some(RepresentationTemplate::from_atom_representation(&v)?);
                Ok(())
            }),
        },
    ];

    fn finish(self) -> Result<OutputValue, DefinitionError> {
        let value = OutputValue {
            identifier: self.identifier,
            name: self.name,
            atom_representation: self.atom_representation,
        };
        integrity::validate(&value)?;
        Ok(value)
    }
}

pub(super) struct EntityOutputBuilder {
    identifier: Identifier,
    title: Option<String>,
    description: Option<String>,
    output_condition: ConditionStatement,
    gui_representation: Option<RepresentationTemplate>,
    atom_representation: Option<RepresentationTemplate>,
    attributes: ElementMap<OutputAttribute>,
}

impl EntityOutputBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read entity output element");
        Self {
            identifier,
            title: None,
            description: None,
            output_condition: ConditionStatement::empty(),
            gui_representation: None,
            atom_representation: None,
            attributes: ElementMap::default(),
        }
    }
}

impl DefinitionBuilder for EntityOutputBuilder {
    type Output = EntityOutput;

    const OBJECT_NAME: &'static str = "@entity_output";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("title" => title),
        text_property!("description" => description),
        Property {
            name: "output_condition",
            setter: Setter::String(|b: &mut Self, v: String| {
                b.output_condition = ConditionStatement::parse(&v)?;
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
        &[child_rule!("@output_attribute" => OutputAttributeBuilder, attributes)];

    fn finish(self) -> Result<EntityOutput, DefinitionError> {
        let element = EntityOutput {
            identifier: self.identifier,
            title: self.title,
            description: self.description,
            output_condition: self.output_condition,
            gui_representation: self.gui_representation,
            atom_representation: self.atom_representation,
            attributes: self.attributes,
        };
        integrity::validate(&element)?;
        Ok(element)
    }
}

pub(super) struct OutputAttributeBuilder {
    identifier: Identifier,
    name: Option<String>,
    description: Option<String>,
}

impl OutputAttributeBuilder {
    fn new(identifier: Identifier) -> Self {
        tracing::debug!(%identifier, "[parsing] read output attribute element");
        Self {
            identifier,
            name: None,
            description: None,
        }
    }
}

impl DefinitionBuilder for OutputAttributeBuilder {
    type Output = OutputAttribute;

    const OBJECT_NAME: &'static str = "@output_attribute";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("name" => name),
        text_property!("description" => description),
    ];

    fn finish(self) -> Result<OutputAttribute, DefinitionError> {
        Ok(OutputAttribute {
            identifier: self.identifier,
            name: self.name,
            description: self.description,
        })
    }
}

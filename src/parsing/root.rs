use super::information::ProgramInformationBuilder;
use super::input::ProgramInputBuilder;
use super::output::ProgramOutputBuilder;
use super::{missing_property, read_object, DefinitionBuilder, Property, Setter};
use crate::definition::{GuiDefinition, ProgramInformation, ProgramInput, ProgramOutput};
use crate::diagnostics::Diagnostics;
use crate::error::DefinitionError;
use serde_json::Value;

#[derive(Default)]
pub(super) struct GuiDefinitionBuilder {
    program_information: Option<ProgramInformation>,
    program_input: Option<ProgramInput>,
    program_output: Option<ProgramOutput>,
}

impl DefinitionBuilder for GuiDefinitionBuilder {
    type Output = GuiDefinition;

    const OBJECT_NAME: &'static str = "gui-definition-object";
    const PROPERTIES: &'static [Property<Self>] = &[
        Property {
            name: "program_information",
            setter: Setter::Object(|b: &mut Self, v: &Value, d: &mut Diagnostics| {
                b.program_information =
                    Some(read_object(ProgramInformationBuilder::default(), v, d)?);
                Ok(())
            }),
        },
        Property {
            name: "program_input",
            setter: Setter::Object(|b: &mut Self, v: &Value, d: &mut Diagnostics| {
                b.program_input = Some(read_object(ProgramInputBuilder::default(), v, d)?);
                Ok(())
            }),
        },
        Property {
            name: "program_output",
            setter: Setter::Object(|b: &mut Self, v: &Value, d: &mut Diagnostics| {
                b.program_output = Some(read_object(ProgramOutputBuilder::default(), v, d)?);
                Ok(())
            }),
        },
    ];
    const REQUIRED: &'static [&'static str] =
        &["program_information", "program_input", "program_output"];

    fn finish(self) -> Result<GuiDefinition, DefinitionError> {
        let missing = |property| missing_property(Self::OBJECT_NAME, property);
        Ok(GuiDefinition {
            program_information: self
                .program_information
                .ok_or_else(|| missing("program_information"))?,
            program_input: self.program_input.ok_or_else(|| missing("program_input"))?,
            program_output: self.program_output.ok_or_else(|| missing("program_output"))?,
        })
    }
}

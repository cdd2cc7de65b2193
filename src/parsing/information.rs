use super::{missing_property, DefinitionBuilder, Property};
use crate::definition::ProgramInformation;
use crate::error::DefinitionError;

#[derive(Default)]
pub(super) struct ProgramInformationBuilder {
    name: Option<String>,
    description: Option<String>,
    author: Option<String>,
    version: Option<String>,
}

impl DefinitionBuilder for ProgramInformationBuilder {
    type Output = ProgramInformation;

    const OBJECT_NAME: &'static str = "program_information";
    const PROPERTIES: &'static [Property<Self>] = &[
        text_property!("name" => name),
        text_property!("description" => description),
        text_property!("author" => author),
        text_property!("version" => version),
    ];
    const REQUIRED: &'static [&'static str] = &["name"];

    fn finish(self) -> Result<ProgramInformation, DefinitionError> {
        Ok(ProgramInformation {
            name: self
                .name
                .ok_or_else(|| missing_property(Self::OBJECT_NAME, "name"))?,
            description: self.description,
            author: self.author,
            version: self.version,
        })
    }
}

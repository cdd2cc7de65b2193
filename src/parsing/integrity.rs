//! Cross-checks representation template placeholders against declarations.
use crate::definition::{EntityInput, EntityOutput, InputValue, OutputValue, ValueInput, ValueOutput};
use crate::error::DefinitionError;
use crate::syntax::RepresentationTemplate;
use std::borrow::Cow;

/// A definition node that owns representation templates.
pub(crate) trait TemplateOwner {
    /// The node's templates, defaults resolved, in validation order.
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>>;

    /// Whether `identifier` names something a placeholder may refer to.
    fn declares_placeholder(&self, identifier: &str) -> bool;
}

/// Fails on the first placeholder that `owner` does not declare.
pub(crate) fn validate<T: TemplateOwner>(owner: &T) -> Result<(), DefinitionError> {
    for template in owner.representation_templates() {
        let undeclared = template
            .placeholder_ids()
            .into_iter()
            .find(|identifier| !owner.declares_placeholder(identifier));

        if let Some(placeholder) = undeclared {
            return Err(DefinitionError::MissingPlaceholder {
                placeholder: placeholder.to_string(),
                template: template.template_string().to_string(),
            });
        }
    }
    Ok(())
}

impl TemplateOwner for ValueInput {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.gui_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.values.contains_key(identifier)
    }
}

impl TemplateOwner for InputValue {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.atom_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }
}

impl TemplateOwner for EntityInput {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.gui_representation(), self.atom_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.attributes.contains_key(identifier)
    }
}

impl TemplateOwner for ValueOutput {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.gui_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.values.contains_key(identifier)
    }
}

impl TemplateOwner for OutputValue {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.atom_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }
}

impl TemplateOwner for EntityOutput {
    fn representation_templates(&self) -> Vec<Cow<'_, RepresentationTemplate>> {
        vec![self.gui_representation(), self.atom_representation()]
    }

    fn declares_placeholder(&self, identifier: &str) -> bool {
        self.attributes.contains_key(identifier)
    }
}

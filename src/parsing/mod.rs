//! Turns the JSON payload of a definition comment into a [`GuiDefinition`].
//!
//! Every object level of the definition language is described by a
//! [`DefinitionBuilder`]: a table of fixed properties with typed setters, a
//! table of `@kind:identifier` child rules, and a list of required properties.
//! [`read_object`] drives any builder over a JSON object in source order, so
//! all levels share one algorithm:
//!
//! 1. each key is matched against the fixed properties, then the child
//!    prefixes; unknown keys are recorded as warnings and skipped,
//! 2. required properties are checked in their declared order,
//! 3. the builder finishes, running the integrity check on its templates.
use crate::definition::GuiDefinition;
use crate::diagnostics::Diagnostics;
use crate::error::{DefinitionError, PropertyType};
use crate::syntax::Identifier;
use serde_json::Value;

/// A fixed property that stores an optional string field verbatim.
macro_rules! text_property {
    ($name:literal => $field:ident) => {
        $crate::parsing::Property {
            name: $name,
            setter: $crate::parsing::Setter::String(|b: &mut Self, v: String| {
                b.$field = Some(v);
                Ok(())
            }),
        }
    };
}

/// A `@kind:identifier` rule that reads the child with `$builder` and inserts it
/// into the `$field` map, optionally wrapped in an element variant.
macro_rules! child_rule {
    ($object:literal => $builder:ident, $field:ident) => {
        child_rule!($object => $builder, $field, ::std::convert::identity)
    };
    ($object:literal => $builder:ident, $field:ident, $wrap:path) => {
        $crate::parsing::ChildRule {
            prefix: concat!($object, ":"),
            object: $object,
            build: |b: &mut Self,
                    identifier: $crate::syntax::Identifier,
                    value: &serde_json::Value,
                    diagnostics: &mut $crate::diagnostics::Diagnostics| {
                let element = $crate::parsing::read_object(
                    $builder::new(identifier.clone()),
                    value,
                    diagnostics,
                )?;
                b.$field.insert(identifier, $wrap(element));
                Ok(())
            },
        }
    };
}

mod information;
mod input;
pub(crate) mod integrity;
mod output;
mod root;

/// The setter a fixed property is dispatched to, keyed by its expected JSON type.
pub(crate) enum Setter<B> {
    String(fn(&mut B, String) -> Result<(), DefinitionError>),
    Integer(fn(&mut B, u64) -> Result<(), DefinitionError>),
    /// A nested section object; the callee reports a non-object value itself.
    Object(fn(&mut B, &Value, &mut Diagnostics) -> Result<(), DefinitionError>),
}

/// A fixed-name property of an object level.
pub(crate) struct Property<B> {
    pub name: &'static str,
    pub setter: Setter<B>,
}

/// A dynamic `@kind:identifier` key and the builder of the matching child.
pub(crate) struct ChildRule<B> {
    /// Key prefix including the trailing colon, e.g. `@input_value:`.
    pub prefix: &'static str,
    /// Object name used when reporting an invalid identifier.
    pub object: &'static str,
    pub build: fn(&mut B, Identifier, &Value, &mut Diagnostics) -> Result<(), DefinitionError>,
}

impl<B> ChildRule<B> {
    fn identifier_of<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.prefix)
    }
}

/// Describes one object level of the definition language.
pub(crate) trait DefinitionBuilder: Sized + 'static {
    type Output;

    /// Name used in error messages and warnings, e.g. `@entity_input`.
    const OBJECT_NAME: &'static str;
    const PROPERTIES: &'static [Property<Self>];
    const CHILDREN: &'static [ChildRule<Self>] = &[];
    /// Checked in this order; the first absent one is reported.
    const REQUIRED: &'static [&'static str] = &[];

    fn finish(self) -> Result<Self::Output, DefinitionError>;
}

/// Reads `value` as the object described by `B`, starting from `builder`.
pub(crate) fn read_object<B: DefinitionBuilder>(
    mut builder: B,
    value: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<B::Output, DefinitionError> {
    tracing::debug!(object = B::OBJECT_NAME, "[parsing] read object");
    let object = value
        .as_object()
        .ok_or_else(|| DefinitionError::InvalidJsonObject {
            object: B::OBJECT_NAME.to_string(),
        })?;

    for (key, entry) in object {
        if let Some(property) = B::PROPERTIES.iter().find(|p| p.name == key.as_str()) {
            apply_property(&mut builder, property, entry, diagnostics)?;
        } else if let Some((rule, identifier)) = B::CHILDREN
            .iter()
            .find_map(|rule| rule.identifier_of(key).map(|id| (rule, id)))
        {
            if !entry.is_object() {
                return Err(DefinitionError::InvalidJsonObject {
                    object: rule.object.to_string(),
                });
            }
            let identifier = Identifier::parse(rule.object, identifier)?;
            (rule.build)(&mut builder, identifier, entry, diagnostics)?;
        } else {
            diagnostics.unsupported_property(B::OBJECT_NAME, key);
        }
    }

    if let Some(missing) = B::REQUIRED.iter().find(|name| !object.contains_key(**name)) {
        return Err(missing_property(B::OBJECT_NAME, missing));
    }

    builder.finish()
}

fn apply_property<B>(
    builder: &mut B,
    property: &Property<B>,
    entry: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<(), DefinitionError>
where
    B: DefinitionBuilder,
{
    let type_error = |expected: PropertyType| DefinitionError::InvalidPropertyType {
        object: B::OBJECT_NAME.to_string(),
        property: property.name.to_string(),
        expected,
    };

    match property.setter {
        Setter::String(set) => {
            let value = entry
                .as_str()
                .ok_or_else(|| type_error(PropertyType::String))?;
            set(builder, value.to_string())
        }
        Setter::Integer(set) => {
            let value = entry
                .as_u64()
                .ok_or_else(|| type_error(PropertyType::Integer))?;
            set(builder, value)
        }
        Setter::Object(set) => set(builder, entry, diagnostics),
    }
}

pub(crate) fn missing_property(object: &str, property: &str) -> DefinitionError {
    DefinitionError::MissingProperty {
        object: object.to_string(),
        property: property.to_string(),
    }
}

/// Parses a JSON definition object into the definition tree.
pub(crate) fn parse_definition(
    json: &str,
    diagnostics: &mut Diagnostics,
) -> Result<GuiDefinition, DefinitionError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DefinitionError::MalformedJson {
            object: root::GuiDefinitionBuilder::OBJECT_NAME.to_string(),
            explanation: e.to_string(),
        })?;
    read_object(root::GuiDefinitionBuilder::default(), &value, diagnostics)
}

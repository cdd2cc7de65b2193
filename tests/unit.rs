//! Unit tests for identifiers, the embedded micro-grammars and error reporting.
mod common;
use aspgui::prelude::*;

#[test]
fn test_normalize_atom_strips_whitespace() {
    assert_eq!(
        normalize_atom(r#"foo( a , 2 , "x" )"#).unwrap(),
        r#"foo(a,2,"x")"#
    );
    assert_eq!(normalize_atom("foo(\ta,\n b)").unwrap(), "foo(a,b)");
}

#[test]
fn test_normalize_atom_without_arguments() {
    assert_eq!(normalize_atom("show").unwrap(), "show");
    assert_eq!(normalize_atom("-show").unwrap(), "-show");
    assert_eq!(normalize_atom("-edge(a, b)").unwrap(), "-edge(a,b)");
}

#[test]
fn test_normalize_atom_keeps_string_literals_intact() {
    assert_eq!(
        normalize_atom(r#"label( "a, b" , c)"#).unwrap(),
        r#"label("a, b",c)"#
    );
}

#[test]
fn test_normalize_atom_is_idempotent() {
    let samples = [
        "foo",
        "foo(a)",
        r#"foo( a , 2 , "x" )"#,
        "bar(0,10, xY_1 )",
        "-baz( q )",
    ];
    for sample in samples {
        let once = normalize_atom(sample).unwrap();
        let twice = normalize_atom(&once).unwrap();
        assert_eq!(once, twice, "normalizing '{}' twice changed it", sample);
    }
}

#[test]
fn test_normalize_atom_rejects_invalid_atoms() {
    let invalid = ["", "Foo", "foo(", "foo()", "foo(A)", "foo(-1)", "foo(1.5)", "foo bar", "::foo"];
    for atom in invalid {
        let err = normalize_atom(atom).unwrap_err();
        assert_eq!(err, DefinitionError::InvalidAtomFormat(atom.to_string()));
    }
}

#[test]
fn test_normalize_atom_template_with_placeholders() {
    assert_eq!(
        normalize_atom_template("edge( ::from , ::to )").unwrap(),
        "edge(::from,::to)"
    );
    assert_eq!(normalize_atom_template("::rel(::x, 3)").unwrap(), "::rel(::x,3)");
    assert_eq!(normalize_atom_template("fixed(a)").unwrap(), "fixed(a)");
}

#[test]
fn test_normalize_atom_template_only_allows_spaces() {
    let err = normalize_atom_template("edge(\t::from)").unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidTemplateFormat(ref t) if t == "edge(\t::from)"));
    assert!(normalize_atom_template("edge(:from)").is_err());
}

#[test]
fn test_identifier_length_boundary() {
    assert!(!Identifier::is_valid("e"));
    assert!(Identifier::is_valid("ed"));
    assert!(Identifier::is_valid("a1"));
    assert!(Identifier::is_valid("a_"));
    assert!(Identifier::is_valid("camelCase_42"));
}

#[test]
fn test_identifier_rejects_invalid_shapes() {
    for identifier in ["", "Ab", "1a", "_ab", "a-b", "ab c"] {
        assert!(!Identifier::is_valid(identifier), "'{}' should be invalid", identifier);
    }
}

#[test]
fn test_identifier_parse_reports_object() {
    let err = Identifier::parse("@entity_input", "e").unwrap_err();
    assert_eq!(
        err,
        DefinitionError::InvalidIdentifier {
            object: "@entity_input".to_string(),
            identifier: "e".to_string(),
        }
    );
    assert_eq!(err.category(), ErrorCategory::Identifier);

    let identifier = Identifier::parse("@entity_input", "edge").unwrap();
    assert_eq!(identifier, "edge");
    assert_eq!(identifier.to_string(), "edge");
}

#[test]
fn test_default_template() {
    let template = RepresentationTemplate::default_for("edge", ["from", "to"]);
    assert_eq!(template.template_string(), "edge(::from,::to)");

    let empty = RepresentationTemplate::default_for("flag", Vec::<&str>::new());
    assert_eq!(empty.template_string(), "flag()");
}

#[test]
fn test_template_placeholder_ids() {
    let template = RepresentationTemplate::from_gui_representation("::a and ::b, then ::a again");
    assert_eq!(template.placeholder_ids(), vec!["a", "b", "a"]);

    let plain = RepresentationTemplate::from_gui_representation("no placeholders here");
    assert!(plain.placeholder_ids().is_empty());
}

#[test]
fn test_gui_template_is_kept_verbatim() {
    let template = RepresentationTemplate::from_gui_representation("Edge  from ::from\tto ::to");
    assert_eq!(template.template_string(), "Edge  from ::from\tto ::to");
}

#[test]
fn test_atom_template_is_normalized() {
    let template = RepresentationTemplate::from_atom_representation("edge( ::from ,::to )").unwrap();
    assert_eq!(template.template_string(), "edge(::from,::to)");

    let err = RepresentationTemplate::from_atom_representation("Edge(::from)").unwrap_err();
    assert_eq!(err, DefinitionError::InvalidTemplateFormat("Edge(::from)".to_string()));
}

#[test]
fn test_template_parts() {
    let template = RepresentationTemplate::from_gui_representation("Edge from ::from to ::to");
    assert_eq!(
        template.parts(),
        vec![
            TemplatePart::Literal("Edge"),
            TemplatePart::Space,
            TemplatePart::Literal("from"),
            TemplatePart::Space,
            TemplatePart::Placeholder("from"),
            TemplatePart::Space,
            TemplatePart::Literal("to"),
            TemplatePart::Space,
            TemplatePart::Placeholder("to"),
        ]
    );

    let atom = RepresentationTemplate::default_for("edge", ["from", "to"]);
    assert_eq!(
        atom.parts(),
        vec![
            TemplatePart::Literal("edge("),
            TemplatePart::Placeholder("from"),
            TemplatePart::Literal(","),
            TemplatePart::Placeholder("to"),
            TemplatePart::Literal(")"),
        ]
    );
}

#[test]
fn test_template_parts_rebuild_template() {
    let text = "Move  ::disk from ::src to ::dst!";
    let template = RepresentationTemplate::from_gui_representation(text);
    let rebuilt: String = template.parts().iter().map(|p| p.to_string()).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn test_condition_statement() {
    let condition = ConditionStatement::parse("?show_details").unwrap();
    assert_eq!(condition.condition_atom(), "show_details");
    assert_eq!(condition.to_string(), "?show_details");

    let condition = ConditionStatement::parse("?mode( fast , 2)").unwrap();
    assert_eq!(condition.condition_atom(), "mode(fast,2)");
    assert!(!condition.is_empty());
}

#[test]
fn test_condition_statement_rejects_invalid_forms() {
    for statement in ["show", "?", "? show", "?::show", "?Show", "??show"] {
        let err = ConditionStatement::parse(statement).unwrap_err();
        assert_eq!(err, DefinitionError::InvalidConditionFormat(statement.to_string()));
    }
}

#[test]
fn test_empty_condition_statement() {
    let condition = ConditionStatement::empty();
    assert!(condition.is_empty());
    assert_eq!(condition.condition_atom(), "");
    assert_eq!(condition.to_string(), "");
}

#[test]
fn test_source_selector() {
    let selector = SourceSelector::parse("$colors").unwrap();
    assert_eq!(selector.source_relation(), "colors");
    assert_eq!(selector.to_string(), "$colors");

    let selector = SourceSelector::parse("$#colors").unwrap();
    assert_eq!(selector.source_relation(), "#colors");

    let selector = SourceSelector::parse("$colors[12]").unwrap();
    assert_eq!(selector.source_relation(), "colors[12]");
}

#[test]
fn test_source_selector_rejects_invalid_forms() {
    for selector in ["colors", "$Colors", "$colors[]", "$colors[a]", "$#", "$ colors", "$$colors"] {
        let err = SourceSelector::parse(selector).unwrap_err();
        assert_eq!(err, DefinitionError::InvalidSelectorFormat(selector.to_string()));
        assert_eq!(err.category(), ErrorCategory::Grammar);
    }
}

#[test]
fn test_empty_source_selector() {
    let selector = SourceSelector::empty();
    assert!(selector.is_empty());
    assert_eq!(selector.source_relation(), "");
}

#[test]
fn test_error_display() {
    assert_eq!(
        DefinitionError::WrongNumberOfComments(2).to_string(),
        "invalid number of gui definition comments found: 2"
    );
    assert_eq!(
        DefinitionError::MissingProperty {
            object: "program_information".to_string(),
            property: "name".to_string(),
        }
        .to_string(),
        "missing property name in program_information object"
    );
    assert_eq!(
        DefinitionError::InvalidPropertyType {
            object: "@entity_input".to_string(),
            property: "input_count_min".to_string(),
            expected: PropertyType::Integer,
        }
        .to_string(),
        "property input_count_min in @entity_input object must be of type integer"
    );
    assert_eq!(
        DefinitionError::MissingPlaceholder {
            placeholder: "x".to_string(),
            template: "edge(::x)".to_string(),
        }
        .to_string(),
        "placeholder \"x\" in representation template \"edge(::x)\" is not defined"
    );
    assert_eq!(
        DefinitionError::InvalidJsonObject {
            object: "program_input".to_string(),
        }
        .to_string(),
        "program_input is not a valid json object"
    );
}

#[test]
fn test_error_categories() {
    let cases = [
        (DefinitionError::WrongNumberOfComments(0), ErrorCategory::Structural),
        (
            DefinitionError::InvalidJsonObject { object: "program_output".to_string() },
            ErrorCategory::Structural,
        ),
        (
            DefinitionError::MissingProperty {
                object: "gui-definition-object".to_string(),
                property: "program_input".to_string(),
            },
            ErrorCategory::Property,
        ),
        (DefinitionError::InvalidAtomFormat("X".to_string()), ErrorCategory::Grammar),
        (
            DefinitionError::MissingPlaceholder {
                placeholder: "a".to_string(),
                template: "::a".to_string(),
            },
            ErrorCategory::Referential,
        ),
    ];
    for (error, category) in cases {
        assert_eq!(error.category(), category, "wrong category for {:?}", error);
    }
}

#[test]
fn test_element_kind_object_names() {
    assert_eq!(ElementKind::ValueInput.object_name(), "@value_input");
    assert_eq!(ElementKind::EntityInput.object_name(), "@entity_input");
    assert_eq!(ElementKind::ValueOutput.object_name(), "@value_output");
    assert_eq!(ElementKind::EntityOutput.to_string(), "@entity_output");
}

#[test]
fn test_warning_display() {
    let warning = Warning {
        object: "program_information".to_string(),
        property: "colour".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "unsupported property 'colour' in 'program_information' object"
    );
}

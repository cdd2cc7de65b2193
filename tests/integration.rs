//! Integration tests for aspgui
//!
//! End-to-end tests from an annotated logic program to the definition tree.
//!
mod common;
use aspgui::prelude::*;
use common::*;

#[cfg(test)]
mod extraction_tests {
    use super::*;

    #[test]
    fn test_no_definition_comment() {
        let err = parse_source("node(1..3).\n% just a comment\n", &mut Diagnostics::new()).unwrap_err();
        assert_eq!(err, DefinitionError::WrongNumberOfComments(0));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_two_definition_comments() {
        let block = definition_json("{}", "{}");
        let source = format!("{}\n%*:: {} ::*%\n", program(&block), block);
        let err = parse_source(&source, &mut Diagnostics::new()).unwrap_err();
        assert_eq!(err, DefinitionError::WrongNumberOfComments(2));
        assert!(err.to_string().ends_with(": 2"));
    }

    #[test]
    fn test_definition_comments_are_trimmed() {
        let source = "%*::\n  first  \n::*%\nrule.\n%*:: second ::*%";
        assert_eq!(definition_comments(source), vec!["first", "second"]);
    }

    #[test]
    fn test_definition_comments_trim_only_ascii_control_and_space() {
        let source = "%*::\u{1}\t x \r\n::*% %*::\u{a0}y\u{a0}::*%";
        assert_eq!(definition_comments(source), vec!["x", "\u{a0}y\u{a0}"]);
    }

    #[test]
    fn test_single_line_comment() {
        let source = format!("%*::{}::*%", definition_json("{}", "{}"));
        let definition = parse_source(&source, &mut Diagnostics::new()).unwrap();
        assert_eq!(definition.program_information().name(), "Test");
    }

    #[test]
    fn test_invalid_json_inside_comment() {
        let err = parse_source(&program("{ not json"), &mut Diagnostics::new()).unwrap_err();
        assert!(matches!(err, DefinitionError::MalformedJson { .. }));
    }
}

#[cfg(test)]
mod graph_coloring_tests {
    use super::*;

    fn graph_coloring() -> GuiDefinition {
        let mut diagnostics = Diagnostics::new();
        let definition = parse_source(GRAPH_COLORING_PROGRAM, &mut diagnostics)
            .unwrap_or_else(|e| panic!("graph coloring program should parse: {}", e));
        assert!(diagnostics.is_empty(), "unexpected warnings: {:?}", diagnostics.warnings());
        definition
    }

    #[test]
    fn test_program_information() {
        let definition = graph_coloring();
        let information = definition.program_information();
        assert_eq!(information.name(), "Graph Coloring");
        assert_eq!(information.description(), Some("Colors the nodes of a graph"));
        assert_eq!(information.author(), Some("Potassco"));
        assert_eq!(information.version(), Some("1.2"));
    }

    #[test]
    fn test_input_elements() {
        let definition = graph_coloring();
        let input = definition.program_input();
        let identifiers: Vec<&str> = input.elements().keys().map(|id| id.as_str()).collect();
        assert_eq!(identifiers, vec!["settings", "node", "edge"]);

        let Some(InputElement::Value(settings)) = input.get("settings") else {
            panic!("expected value input 'settings'");
        };
        assert_eq!(settings.gui_representation().template_string(), "Use ::colors colors");
        let colors = &settings.values()["colors"];
        assert_eq!(colors.name(), "Colors");
        assert_eq!(colors.default_value(), Some("3"));
        assert_eq!(colors.value_source().source_relation(), "#color");
        assert_eq!(colors.atom_representation().template_string(), "color_count(::colors)");

        let Some(InputElement::Entity(node)) = input.get("node") else {
            panic!("expected entity input 'node'");
        };
        assert_eq!(node.input_count_min(), 1);
        assert_eq!(node.input_count_max(), None);
        assert_eq!(node.atom_representation().template_string(), "node(::name)");

        let Some(InputElement::Entity(edge)) = input.get("edge") else {
            panic!("expected entity input 'edge'");
        };
        assert_eq!(edge.input_count_max(), Some(40));
        assert_eq!(edge.gui_representation().template_string(), "::from -> ::to");
        assert_eq!(edge.atom_representation().template_string(), "edge(::from,::to)");
        assert_eq!(edge.attributes()["to"].description(), Some("Target node"));
    }

    #[test]
    fn test_output_elements() {
        let definition = graph_coloring();
        let output = definition.program_output();
        let identifiers: Vec<&str> = output.elements().keys().map(|id| id.as_str()).collect();
        assert_eq!(identifiers, vec!["assignment", "summary"]);

        let assignment = output.get("assignment").unwrap();
        assert_eq!(assignment.kind(), ElementKind::EntityOutput);
        assert_eq!(assignment.title(), Some("Coloring"));
        assert_eq!(assignment.output_condition().condition_atom(), "show_coloring");

        let Some(OutputElement::Value(summary)) = output.get("summary") else {
            panic!("expected value output 'summary'");
        };
        assert!(summary.output_condition().is_empty());
        assert_eq!(summary.gui_representation().template_string(), "summary(::used)");
        assert_eq!(
            summary.values()["used"].atom_representation().template_string(),
            "used_colors(::used)"
        );
    }

    #[test]
    fn test_outline() {
        let outline = OutlineFormatter::format(&graph_coloring());
        let expected = "\
program: Graph Coloring 1.2 by Potassco
  Colors the nodes of a graph
input:
  @value_input settings \"Settings\"
    gui: Use ::colors colors
    @input_value colors \"Colors\" default=3 source=$#color atom: color_count(::colors)
  @entity_input node \"Nodes\"
    count: 1..*
    gui: node(::name)
    atom: node(::name)
    @input_attribute name \"Name\"
  @entity_input edge \"Edges\"
    count: 0..40
    gui: ::from -> ::to
    atom: edge(::from,::to)
    @input_attribute from \"From\"
    @input_attribute to \"To\"
output:
  @entity_output assignment \"Coloring\"
    when: ?show_coloring
    gui: assignment(::node,::color)
    atom: assignment(::node,::color)
    @output_attribute node \"Node\"
    @output_attribute color \"color\"
  @value_output summary
    gui: summary(::used)
    @output_value used \"Colors used\" atom: used_colors(::used)
";
        assert_eq!(outline, expected);
    }

    #[test]
    fn test_outline_of_bare_definition() {
        let definition = parse_ok(&definition_json(
            r#"{"@value_input:level": {"@input_value:depth": {}}}"#,
            r#"{"@entity_output:route": {"title": "Route", "@output_attribute:stop": {}}}"#,
        ));
        let expected = "\
program: Test
input:
  @value_input level
    gui: level(::depth)
    @input_value depth \"depth\" atom: depth(::depth)
output:
  @entity_output route \"Route\"
    gui: route(::stop)
    atom: route(::stop)
    @output_attribute stop \"stop\"
";
        assert_eq!(OutlineFormatter::format(&definition), expected);
    }

    #[test]
    fn test_serialized_definition() {
        let value = serde_json::to_value(graph_coloring()).unwrap();
        assert_eq!(value["program_information"]["name"], "Graph Coloring");
        assert_eq!(value["program_input"]["edge"]["kind"], "entity_input");
        assert_eq!(value["program_input"]["edge"]["atom_representation"], "edge(::from,::to)");
        assert_eq!(value["program_input"]["settings"]["kind"], "value_input");
        assert_eq!(
            value["program_input"]["settings"]["values"]["colors"]["value_source"],
            "#color"
        );
        assert_eq!(value["program_output"]["assignment"]["output_condition"], "show_coloring");
        // Defaults are not materialized.
        assert!(value["program_input"]["node"].get("atom_representation").is_none());
        assert!(value["program_output"]["summary"].get("output_condition").is_none());
    }
}

//! Common test utilities for building definition sources.
use aspgui::prelude::*;

/// A complete annotated logic program for a graph coloring problem.
#[allow(dead_code)]
pub const GRAPH_COLORING_PROGRAM: &str = r#"
% Assign a color to every node so that adjacent nodes differ.
%*::
{
  "program_information": {
    "name": "Graph Coloring",
    "description": "Colors the nodes of a graph",
    "author": "Potassco",
    "version": "1.2"
  },
  "program_input": {
    "@value_input:settings": {
      "title": "Settings",
      "gui_representation": "Use ::colors colors",
      "@input_value:colors": {
        "name": "Colors",
        "default_value": "3",
        "value_source": "$#color",
        "atom_representation": "color_count( ::colors )"
      }
    },
    "@entity_input:node": {
      "title": "Nodes",
      "input_count_min": 1,
      "@input_attribute:name": { "name": "Name" }
    },
    "@entity_input:edge": {
      "title": "Edges",
      "description": "Undirected edges between nodes",
      "input_count_max": 40,
      "gui_representation": "::from -> ::to",
      "atom_representation": "edge( ::from , ::to )",
      "@input_attribute:from": { "name": "From" },
      "@input_attribute:to": { "name": "To", "description": "Target node" }
    }
  },
  "program_output": {
    "@entity_output:assignment": {
      "title": "Coloring",
      "output_condition": "?show_coloring",
      "@output_attribute:node": { "name": "Node" },
      "@output_attribute:color": {}
    },
    "@value_output:summary": {
      "@output_value:used": {
        "name": "Colors used",
        "atom_representation": "used_colors(::used)"
      }
    }
  }
}
::*%

color(1..N) :- color_count(N).
1 { assignment(X, C) : color(C) } 1 :- node(X).
:- edge(X, Y), assignment(X, C), assignment(Y, C).
"#;

/// Builds a definition object with a fixed `program_information` section and
/// the given `program_input` / `program_output` bodies.
#[allow(dead_code)]
pub fn definition_json(input: &str, output: &str) -> String {
    format!(
        r#"{{"program_information": {{"name": "Test"}}, "program_input": {}, "program_output": {}}}"#,
        input, output
    )
}

/// Builds a definition object with a single input section body.
#[allow(dead_code)]
pub fn with_input(input: &str) -> String {
    definition_json(input, "{}")
}

/// Builds a definition object with a single output section body.
#[allow(dead_code)]
pub fn with_output(output: &str) -> String {
    definition_json("{}", output)
}

/// Wraps a definition object into a minimal logic program.
#[allow(dead_code)]
pub fn program(definition: &str) -> String {
    format!("% program\n%*::\n{}\n::*%\nfact(1).\n", definition)
}

/// Parses a definition object, discarding warnings.
#[allow(dead_code)]
pub fn parse(json: &str) -> Result<GuiDefinition, DefinitionError> {
    GuiDefinition::from_json_str(json, &mut Diagnostics::new())
}

/// Parses a definition object that is expected to be valid.
#[allow(dead_code)]
pub fn parse_ok(json: &str) -> GuiDefinition {
    parse(json).unwrap_or_else(|e| panic!("definition should parse: {}", e))
}

/// Parses a definition object that is expected to be invalid.
#[allow(dead_code)]
pub fn parse_err(json: &str) -> DefinitionError {
    match parse(json) {
        Ok(_) => panic!("definition should be rejected: {}", json),
        Err(e) => e,
    }
}

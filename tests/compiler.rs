//! Tests for document compilation: structural elements, DI geometry and
//! the auto-layout post-process contract.
mod common;
use common::*;
use zushiki::document::{PlaneElement, ProcessDocument, ProcessElement};
use zushiki::prelude::*;

fn compile(flow: FlowModel) -> ProcessDocument {
    Compiler::builder(flow).build().compile()
}

fn node_element<'a>(document: &'a ProcessDocument, id: &str) -> &'a zushiki::document::NodeElement {
    document
        .process
        .elements
        .iter()
        .find_map(|e| match e {
            ProcessElement::Node(n) if n.id == id => Some(n),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no node element '{id}'"))
}

fn edge<'a>(document: &'a ProcessDocument, id: &str) -> &'a zushiki::document::Edge {
    document
        .diagram
        .plane
        .elements
        .iter()
        .find_map(|e| match e {
            PlaneElement::Edge(edge) if edge.id == id => Some(edge),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no DI edge '{id}'"))
}

#[test]
fn test_compiles_linear_flow_structure() {
    let document = compile(create_linear_flow());

    assert_eq!(document.id, "Definitions_Process_Test");
    assert_eq!(document.process.id, "Process_Test");
    assert_eq!(document.process.name, "Test Process");
    assert!(document.process.is_executable);

    assert_eq!(node_element(&document, "Start").kind, "bpmn:StartEvent");
    assert_eq!(node_element(&document, "T1").kind, "bpmn:Task");
    assert_eq!(node_element(&document, "End").kind, "bpmn:EndEvent");

    let flows: Vec<_> = document
        .process
        .elements
        .iter()
        .filter(|e| matches!(e, ProcessElement::SequenceFlow(_)))
        .collect();
    assert_eq!(flows.len(), 2);
}

#[test]
fn test_input_ids_round_trip_into_document() {
    let flow = create_linear_flow();
    let node_ids: Vec<String> = flow.nodes.iter().map(|n| n.id.clone()).collect();
    let connection_ids: Vec<String> = flow.connections.iter().map(|c| c.id.clone()).collect();

    let document = compile(flow);
    let element_ids: Vec<&str> = document.process.elements.iter().map(|e| e.id()).collect();

    for id in node_ids.iter().chain(connection_ids.iter()) {
        assert!(element_ids.contains(&id.as_str()), "missing id '{id}'");
    }
}

#[test]
fn test_structural_and_di_ids_are_distinct() {
    let mut flow = create_linear_flow();
    flow.annotations.push(Annotation {
        id: "Note_1".to_string(),
        text: "check this".to_string(),
        ..Annotation::default()
    });
    flow.associations.push(Association {
        id: "Assoc_1".to_string(),
        source_ref: "T1".to_string(),
        target_ref: "Note_1".to_string(),
    });

    let document = compile(flow);

    let mut seen = std::collections::HashSet::new();
    for element in &document.process.elements {
        assert!(seen.insert(element.id().to_string()), "duplicate id {}", element.id());
    }
    for element in &document.diagram.plane.elements {
        assert!(seen.insert(element.id().to_string()), "duplicate id {}", element.id());
    }
}

#[test]
fn test_every_di_record_tags_its_business_element() {
    let document = compile(create_linear_flow());

    for element in &document.diagram.plane.elements {
        let (id, referenced) = match element {
            PlaneElement::Shape(s) => (&s.id, &s.element),
            PlaneElement::Edge(e) => (&e.id, &e.element),
        };
        assert_eq!(*id, format!("{referenced}_di"));
    }
}

#[test]
fn test_sequence_flow_label_and_condition() {
    let mut flow = create_linear_flow();
    flow.connections[0].label = Some("Yes".to_string());
    flow.connections[0].condition = Some("${approved == true}".to_string());

    let document = compile(flow);
    let sequence_flow = document
        .process
        .elements
        .iter()
        .find_map(|e| match e {
            ProcessElement::SequenceFlow(f) if f.id == "Flow_1" => Some(f),
            _ => None,
        })
        .expect("Flow_1 missing");

    assert_eq!(sequence_flow.source_ref, "Start");
    assert_eq!(sequence_flow.target_ref, "T1");
    assert_eq!(sequence_flow.name.as_deref(), Some("Yes"));
    let expression = sequence_flow
        .condition_expression
        .as_ref()
        .expect("condition missing");
    assert_eq!(expression.kind, "bpmn:FormalExpression");
    assert_eq!(expression.body, "${approved == true}");

    // The unconditioned flow carries neither.
    let plain = document
        .process
        .elements
        .iter()
        .find_map(|e| match e {
            ProcessElement::SequenceFlow(f) if f.id == "Flow_2" => Some(f),
            _ => None,
        })
        .expect("Flow_2 missing");
    assert!(plain.name.is_none());
    assert!(plain.condition_expression.is_none());
}

#[test]
fn test_responsible_becomes_extension_attribute() {
    let document = compile(create_two_owner_flow());

    let ana = node_element(&document, "A");
    assert_eq!(
        ana.attributes.get("responsible"),
        Some(&serde_json::Value::String("Ana".to_string()))
    );

    let document = compile(create_linear_flow());
    assert!(node_element(&document, "T1").attributes.get("responsible").is_none());
}

#[test]
fn test_extension_properties_are_merged() {
    let mut flow = create_linear_flow();
    flow.nodes[1]
        .properties
        .insert("priority".to_string(), serde_json::json!(3));

    let document = compile(flow);
    assert_eq!(
        node_element(&document, "T1").attributes.get("priority"),
        Some(&serde_json::json!(3))
    );
}

#[test]
fn test_dangling_connection_degrades_to_fallback_edge() {
    let mut flow = create_linear_flow();
    flow.connections.push(connection("Flow_X", "T1", "Ghost"));

    let document = compile(flow);

    // Structural element still emitted, endpoint ids recorded verbatim.
    let sequence_flow = document
        .process
        .elements
        .iter()
        .find_map(|e| match e {
            ProcessElement::SequenceFlow(f) if f.id == "Flow_X" => Some(f),
            _ => None,
        })
        .expect("dangling flow should still be emitted");
    assert_eq!(sequence_flow.target_ref, "Ghost");

    // DI degrades to the default straight line.
    let di = edge(&document, "Flow_X_di");
    assert_eq!(di.waypoints.len(), 2);
    assert_eq!((di.waypoints[0].x, di.waypoints[0].y), (100.0, 100.0));
    assert_eq!((di.waypoints[1].x, di.waypoints[1].y), (300.0, 100.0));
}

#[test]
fn test_annotation_and_association_emission() {
    let mut flow = create_linear_flow();
    flow.annotations.push(Annotation {
        id: "Note_1".to_string(),
        text: "double-check".to_string(),
        ..Annotation::default()
    });
    flow.associations.push(Association {
        id: "Assoc_1".to_string(),
        source_ref: "T1".to_string(),
        target_ref: "Note_1".to_string(),
    });
    let flow = layout(&flow);

    let document = compile(flow);

    let annotation = document
        .process
        .elements
        .iter()
        .find_map(|e| match e {
            ProcessElement::TextAnnotation(a) if a.id == "Note_1" => Some(a),
            _ => None,
        })
        .expect("annotation missing");
    assert_eq!(annotation.kind, "bpmn:TextAnnotation");
    assert_eq!(annotation.text, "double-check");

    // Association edge runs from the node's right-center to the
    // annotation's left-center.
    let di = edge(&document, "Assoc_1_di");
    assert_eq!(di.waypoints.len(), 2);
    let node_shape = document
        .diagram
        .plane
        .elements
        .iter()
        .find_map(|e| match e {
            PlaneElement::Shape(s) if s.id == "T1_di" => Some(s),
            _ => None,
        })
        .expect("T1 shape missing");
    assert_eq!(
        di.waypoints[0].x,
        node_shape.bounds.x + node_shape.bounds.width
    );
}

#[test]
fn test_association_with_missing_endpoint_emits_empty_edge() {
    let mut flow = create_linear_flow();
    flow.associations.push(Association {
        id: "Assoc_1".to_string(),
        source_ref: "T1".to_string(),
        target_ref: "Note_Missing".to_string(),
    });

    let document = compile(flow);
    assert!(edge(&document, "Assoc_1_di").waypoints.is_empty());
}

#[test]
fn test_unpositioned_nodes_get_default_bounds() {
    let document = compile(create_linear_flow());

    let shape = document
        .diagram
        .plane
        .elements
        .iter()
        .find_map(|e| match e {
            PlaneElement::Shape(s) if s.id == "T1_di" => Some(s),
            _ => None,
        })
        .expect("T1 shape missing");

    assert_eq!((shape.bounds.x, shape.bounds.y), (100.0, 100.0));
    assert_eq!((shape.bounds.width, shape.bounds.height), (100.0, 80.0));

    let start = document
        .diagram
        .plane
        .elements
        .iter()
        .find_map(|e| match e {
            PlaneElement::Shape(s) if s.id == "Start_di" => Some(s),
            _ => None,
        })
        .expect("Start shape missing");
    assert_eq!((start.bounds.width, start.bounds.height), (36.0, 36.0));
}

struct IdentityLayouter;
impl DocumentLayouter for IdentityLayouter {
    fn relayout(&self, document: ProcessDocument) -> std::result::Result<ProcessDocument, CompileError> {
        Ok(document)
    }
}

struct FailingLayouter;
impl DocumentLayouter for FailingLayouter {
    fn relayout(&self, _document: ProcessDocument) -> std::result::Result<ProcessDocument, CompileError> {
        Err(CompileError::AutoLayoutFailed("no graph roots".to_string()))
    }
}

#[test]
fn test_auto_layout_post_process_round_trip() {
    let compiler = Compiler::builder(create_linear_flow()).build();
    let document = compiler
        .compile_with_auto_layout(&IdentityLayouter)
        .expect("identity layouter should succeed");
    assert_eq!(document.process.id, "Process_Test");
}

#[test]
fn test_auto_layout_failure_propagates() {
    let compiler = Compiler::builder(create_linear_flow()).build();
    let result = compiler.compile_with_auto_layout(&FailingLayouter);
    match result {
        Err(CompileError::AutoLayoutFailed(message)) => {
            assert_eq!(message, "no graph roots");
        }
        Ok(_) => panic!("Expected auto-layout failure to propagate"),
    }
}

#[test]
fn test_builder_options() {
    let document = Compiler::builder(create_linear_flow())
        .with_target_namespace("urn:example")
        .with_exporter("my-exporter", "9.9.9")
        .build()
        .compile();

    assert_eq!(document.target_namespace, "urn:example");
    assert_eq!(document.exporter, "my-exporter");
    assert_eq!(document.exporter_version, "9.9.9");
}

#[test]
fn test_document_serializes_for_external_renderer() {
    let document = compile(create_linear_flow());
    let value = serde_json::to_value(&document).expect("document should serialize");

    assert_eq!(value["process"]["isExecutable"], serde_json::json!(true));
    assert!(value["targetNamespace"].is_string());
    assert!(value["diagram"]["plane"]["elements"].is_array());
}

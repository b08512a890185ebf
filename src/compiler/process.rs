use crate::document::{
    AssociationElement, FormalExpression, NodeElement, Process, ProcessElement, SequenceFlow,
    TextAnnotation,
};
use crate::flow::{FlowModel, FlowNode};

/// Builds the structural process layer: one element per node, connection,
/// annotation and association.
pub(super) fn build_process(flow: &FlowModel) -> Process {
    let mut elements = Vec::with_capacity(
        flow.nodes.len() + flow.connections.len() + flow.annotations.len() + flow.associations.len(),
    );

    for node in &flow.nodes {
        elements.push(ProcessElement::Node(build_node_element(node)));
    }

    // Endpoint ids are recorded verbatim; a dangling reference still yields
    // a structural element (the DI edge degrades instead).
    for connection in &flow.connections {
        elements.push(ProcessElement::SequenceFlow(SequenceFlow {
            kind: "bpmn:SequenceFlow".to_string(),
            id: connection.id.clone(),
            source_ref: connection.from.clone(),
            target_ref: connection.to.clone(),
            name: connection.label.clone(),
            condition_expression: connection.condition.clone().map(|body| FormalExpression {
                kind: "bpmn:FormalExpression".to_string(),
                body,
            }),
        }));
    }

    for annotation in &flow.annotations {
        elements.push(ProcessElement::TextAnnotation(TextAnnotation {
            kind: "bpmn:TextAnnotation".to_string(),
            id: annotation.id.clone(),
            text: annotation.text.clone(),
        }));
    }

    for association in &flow.associations {
        elements.push(ProcessElement::Association(AssociationElement {
            kind: "bpmn:Association".to_string(),
            id: association.id.clone(),
            source_ref: association.source_ref.clone(),
            target_ref: association.target_ref.clone(),
        }));
    }

    Process {
        id: flow.id.clone(),
        name: flow.name.clone(),
        is_executable: true,
        elements,
    }
}

fn build_node_element(node: &FlowNode) -> NodeElement {
    let mut attributes = node.properties.clone();
    if let Some(responsible) = &node.responsible {
        if !responsible.trim().is_empty() {
            attributes.insert(
                "responsible".to_string(),
                serde_json::Value::String(responsible.clone()),
            );
        }
    }

    NodeElement {
        kind: node.kind.structural_kind().to_string(),
        id: node.id.clone(),
        name: node.label.clone(),
        attributes,
    }
}

use ahash::AHashMap;

use crate::document::{Bounds, Diagram, Edge, Plane, PlaneElement, Point, Shape};
use crate::flow::{Annotation, Association, FlowModel, FlowNode, Position};
use crate::router;

const FALLBACK_POSITION: Position = Position { x: 100.0, y: 100.0 };

/// Builds the diagram-interchange layer: one shape per node and annotation,
/// one edge per connection and association, each tagged with the id of the
/// business element it visualizes, suffixed `_di`.
pub(super) fn build_diagram(flow: &FlowModel) -> Diagram {
    let nodes_by_id: AHashMap<&str, &FlowNode> =
        flow.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut elements = Vec::new();

    for node in &flow.nodes {
        elements.push(PlaneElement::Shape(node_shape(node)));
    }

    for connection in &flow.connections {
        let waypoints = match (
            nodes_by_id.get(connection.from.as_str()),
            nodes_by_id.get(connection.to.as_str()),
        ) {
            (Some(source), Some(target)) => router::route(source, target, &flow.nodes),
            // A dangling endpoint degrades to a default straight line.
            _ => vec![
                Point { x: 100.0, y: 100.0 },
                Point { x: 300.0, y: 100.0 },
            ],
        };
        elements.push(PlaneElement::Edge(Edge {
            id: format!("{}_di", connection.id),
            element: connection.id.clone(),
            waypoints,
        }));
    }

    for annotation in &flow.annotations {
        elements.push(PlaneElement::Shape(annotation_shape(annotation)));
    }

    for association in &flow.associations {
        let waypoints = association_waypoints(flow, &nodes_by_id, association);
        elements.push(PlaneElement::Edge(Edge {
            id: format!("{}_di", association.id),
            element: association.id.clone(),
            waypoints,
        }));
    }

    Diagram {
        id: format!("Diagram_{}", flow.id),
        plane: Plane {
            id: format!("Plane_{}", flow.id),
            element: flow.id.clone(),
            elements,
        },
    }
}

fn node_shape(node: &FlowNode) -> Shape {
    let position = node.position.unwrap_or(FALLBACK_POSITION);
    let dimensions = node.resolved_dimensions();
    Shape {
        id: format!("{}_di", node.id),
        element: node.id.clone(),
        bounds: Bounds {
            x: position.x,
            y: position.y,
            width: dimensions.width,
            height: dimensions.height,
        },
    }
}

fn annotation_shape(annotation: &Annotation) -> Shape {
    let position = annotation.position.unwrap_or(FALLBACK_POSITION);
    let dimensions = annotation.resolved_dimensions();
    Shape {
        id: format!("{}_di", annotation.id),
        element: annotation.id.clone(),
        bounds: Bounds {
            x: position.x,
            y: position.y,
            width: dimensions.width,
            height: dimensions.height,
        },
    }
}

/// Source node right-center to target annotation left-center. Either
/// endpoint unresolved: the edge is emitted with zero waypoints.
fn association_waypoints(
    flow: &FlowModel,
    nodes_by_id: &AHashMap<&str, &FlowNode>,
    association: &Association,
) -> Vec<Point> {
    let (Some(node), Some(annotation)) = (
        nodes_by_id.get(association.source_ref.as_str()),
        flow.annotation(&association.target_ref),
    ) else {
        return Vec::new();
    };

    let node_position = node.position.unwrap_or(FALLBACK_POSITION);
    let node_dimensions = node.resolved_dimensions();
    let annotation_position = annotation.position.unwrap_or(FALLBACK_POSITION);
    let annotation_dimensions = annotation.resolved_dimensions();

    vec![
        Point {
            x: node_position.x + node_dimensions.width,
            y: node_position.y + node_dimensions.height / 2.0,
        },
        Point {
            x: annotation_position.x,
            y: annotation_position.y + annotation_dimensions.height / 2.0,
        },
    ]
}

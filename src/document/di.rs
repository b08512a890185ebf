use serde::Serialize;

/// One vertex of a connection polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounds of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The diagram-interchange layer: geometry for every structural element,
/// keyed back to it by id.
#[derive(Debug, Clone, Serialize)]
pub struct Diagram {
    pub id: String,
    pub plane: Plane,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plane {
    pub id: String,
    /// Id of the process this plane visualizes.
    pub element: String,
    pub elements: Vec<PlaneElement>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlaneElement {
    Shape(Shape),
    Edge(Edge),
}

impl PlaneElement {
    pub fn id(&self) -> &str {
        match self {
            PlaneElement::Shape(s) => &s.id,
            PlaneElement::Edge(e) => &e.id,
        }
    }
}

/// Visual record for a node or annotation. `id` is the business element id
/// suffixed `_di`.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    pub id: String,
    pub element: String,
    pub bounds: Bounds,
}

/// Visual record for a connection or association.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub id: String,
    pub element: String,
    pub waypoints: Vec<Point>,
}

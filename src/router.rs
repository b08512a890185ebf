//! Collision-aware waypoint routing between positioned nodes.
//!
//! Three routing policies, selected by the horizontal distance between the
//! endpoints. The point count per policy (2, 6 and 4 respectively) is what
//! the rendering engine's edge drawing expects; the topology must not
//! change.

use crate::document::Point;
use crate::flow::{FlowNode, Position};

/// Endpoints closer than this horizontally are treated as same-column.
const VERTICAL_THRESHOLD: f64 = 50.0;
/// A node whose center is within this of the source's counts as in-column.
const COLUMN_TOLERANCE: f64 = 50.0;
/// Horizontal offset of the detour channel past the source's right edge.
const DETOUR_OFFSET: f64 = 60.0;
/// Vertical clearance before leaving and before entering a node.
const CLEARANCE: f64 = 20.0;

const FALLBACK_POSITION: Position = Position { x: 100.0, y: 100.0 };

struct NodeBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl NodeBox {
    fn of(node: &FlowNode) -> Self {
        let position = node.position.unwrap_or(FALLBACK_POSITION);
        let dimensions = node.resolved_dimensions();
        NodeBox {
            x: position.x,
            y: position.y,
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn top(&self) -> f64 {
        self.y
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Computes the polyline connecting `source` to `target`, detouring around
/// nodes that sit between them in the same column.
pub fn route(source: &FlowNode, target: &FlowNode, all_nodes: &[FlowNode]) -> Vec<Point> {
    let s = NodeBox::of(source);
    let t = NodeBox::of(target);

    let x_diff = (s.x - t.x).abs();
    if x_diff < VERTICAL_THRESHOLD {
        route_vertical(source, target, &s, &t, all_nodes)
    } else {
        route_horizontal(&s, &t)
    }
}

fn route_vertical(
    source: &FlowNode,
    target: &FlowNode,
    s: &NodeBox,
    t: &NodeBox,
    all_nodes: &[FlowNode],
) -> Vec<Point> {
    // Only presence matters: one obstacle or five, the detour is the same.
    let obstructed = all_nodes.iter().any(|other| {
        if other.id == source.id || other.id == target.id {
            return false;
        }
        let o = NodeBox::of(other);
        (o.center_x() - s.center_x()).abs() < COLUMN_TOLERANCE
            && o.top() > s.bottom()
            && o.bottom() < t.top()
    });

    if !obstructed {
        return vec![
            Point {
                x: s.center_x(),
                y: s.bottom(),
            },
            Point {
                x: t.center_x(),
                y: t.top(),
            },
        ];
    }

    let channel_x = s.right() + DETOUR_OFFSET;
    vec![
        Point {
            x: s.center_x(),
            y: s.bottom(),
        },
        Point {
            x: s.center_x(),
            y: s.bottom() + CLEARANCE,
        },
        Point {
            x: channel_x,
            y: s.bottom() + CLEARANCE,
        },
        Point {
            x: channel_x,
            y: t.top() - CLEARANCE,
        },
        Point {
            x: t.center_x(),
            y: t.top() - CLEARANCE,
        },
        Point {
            x: t.center_x(),
            y: t.top(),
        },
    ]
}

fn route_horizontal(s: &NodeBox, t: &NodeBox) -> Vec<Point> {
    let mid_x = (s.right() + t.x) / 2.0;
    vec![
        Point {
            x: s.right(),
            y: s.center_y(),
        },
        Point {
            x: mid_x,
            y: s.center_y(),
        },
        Point {
            x: mid_x,
            y: t.center_y(),
        },
        Point {
            x: t.x,
            y: t.center_y(),
        },
    ]
}

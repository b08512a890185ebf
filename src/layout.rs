//! Deterministic column-per-owner layout.
//!
//! Every distinct owner tag gets a fixed-width vertical column, in
//! first-seen order. Horizontal placement is the owner's column center;
//! vertical placement is the node's global table index, so nodes on the
//! same row line up across columns regardless of owner. Reproducibility is
//! favored over visual optimality: the result is a pure function of
//! (owner order, table order).

use itertools::Itertools;

use crate::flow::{normalize_owner, FlowModel, Position, ANNOTATION_DIMENSIONS};
use crate::table::TableRow;

pub const COLUMN_WIDTH: f64 = 300.0;
pub const LEFT_MARGIN: f64 = 100.0;
pub const TOP_MARGIN: f64 = 100.0;
pub const ROW_SPACING: f64 = 150.0;

const ANNOTATION_OFFSET_X: f64 = 50.0;
const ANNOTATION_OFFSET_Y: f64 = 30.0;

/// Horizontal center of the owner column at `index`.
pub fn column_center(index: usize) -> f64 {
    LEFT_MARGIN + index as f64 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0
}

/// The ordered set of owner columns for a flow: `all_responsibles` when
/// provided (owners with no nodes yet still reserve a column), otherwise
/// the distinct normalized owners of the nodes in first-seen order.
pub fn owner_columns(flow: &FlowModel) -> Vec<String> {
    if !flow.all_responsibles.is_empty() {
        flow.all_responsibles.clone()
    } else {
        flow.nodes
            .iter()
            .map(|n| n.owner().to_string())
            .unique()
            .collect()
    }
}

/// Column center for `owner` derived from the full row set. This is the
/// same column-assignment rule as [`layout`]; the incremental applier uses
/// it to recompute a node's horizontal position after an owner change.
/// Owners absent from the row set fall back to the first column.
pub fn column_center_for_owner(owner: Option<&str>, rows: &[TableRow]) -> f64 {
    let owners: Vec<&str> = rows
        .iter()
        .map(|r| normalize_owner(r.responsible.as_deref()))
        .unique()
        .collect();
    let target = normalize_owner(owner);
    match owners.iter().position(|o| *o == target) {
        Some(index) => column_center(index),
        None => column_center(0),
    }
}

/// Assigns a position to every node and, where resolvable, every
/// annotation. Returns a new model; connections are untouched.
pub fn layout(flow: &FlowModel) -> FlowModel {
    let mut laid = flow.clone();
    let owners = owner_columns(&laid);

    for (index, node) in laid.nodes.iter_mut().enumerate() {
        let column = owners
            .iter()
            .position(|o| {
                normalize_owner(Some(o.as_str())) == normalize_owner(node.responsible.as_deref())
            })
            .unwrap_or(0);
        node.position = Some(Position {
            x: column_center(column),
            y: TOP_MARGIN + index as f64 * ROW_SPACING,
        });
    }

    // Annotations sit to the right of their source node. An annotation with
    // no resolvable source stays unpositioned.
    let placements: Vec<Option<Position>> = laid
        .annotations
        .iter()
        .map(|annotation| {
            laid.associations
                .iter()
                .find(|a| a.target_ref == annotation.id)
                .and_then(|a| laid.node(&a.source_ref))
                .and_then(|node| {
                    let position = node.position?;
                    let dimensions = node.resolved_dimensions();
                    Some(Position {
                        x: position.x + dimensions.width + ANNOTATION_OFFSET_X,
                        y: position.y + dimensions.height / 2.0 + ANNOTATION_OFFSET_Y,
                    })
                })
        })
        .collect();

    for (annotation, placement) in laid.annotations.iter_mut().zip(placements) {
        if let Some(position) = placement {
            annotation.position = Some(position);
            annotation.dimensions = Some(ANNOTATION_DIMENSIONS);
        }
    }

    laid
}

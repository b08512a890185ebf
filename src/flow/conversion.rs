use itertools::Itertools;

use super::definition::{normalize_owner, Connection, FlowModel, FlowNode};
use crate::error::ConversionError;
use crate::table::TableRow;

/// A trait for external source formats that can be converted into a zushiki
/// [`FlowModel`].
///
/// This is the extension point that keeps the compiler format-agnostic: the
/// editor's tabular source, or any custom format, provides a translation
/// layer into the canonical model and the rest of the crate never sees the
/// original representation.
pub trait IntoFlowModel {
    /// Consumes the object and converts it into a compilable flow model.
    fn into_flow_model(self) -> Result<FlowModel, ConversionError>;
}

/// The tabular source of truth: an ordered list of rows plus the process
/// identity. Row order becomes node order, which drives vertical placement.
#[derive(Debug, Clone, Default)]
pub struct FlowTable {
    pub id: String,
    pub name: String,
    pub rows: Vec<TableRow>,
}

impl IntoFlowModel for FlowTable {
    fn into_flow_model(self) -> Result<FlowModel, ConversionError> {
        let mut nodes = Vec::with_capacity(self.rows.len());
        let mut connections = Vec::new();

        for row in &self.rows {
            if row.id.trim().is_empty() {
                return Err(ConversionError::EmptyRowId {
                    row_number: row.row_number,
                });
            }
            if nodes.iter().any(|n: &FlowNode| n.id == row.id) {
                return Err(ConversionError::DuplicateRowId {
                    id: row.id.clone(),
                });
            }

            nodes.push(FlowNode {
                id: row.id.clone(),
                kind: row.kind,
                label: row.label.clone(),
                responsible: row.responsible.clone(),
                ..FlowNode::default()
            });

            for link in &row.connects_to {
                connections.push(Connection {
                    id: format!("Flow_{}_{}", row.id, link.target_id),
                    from: row.id.clone(),
                    to: link.target_id.clone(),
                    label: link.label.clone(),
                    condition: link.condition.clone(),
                });
            }
        }

        let all_responsibles = self
            .rows
            .iter()
            .map(|r| normalize_owner(r.responsible.as_deref()).to_string())
            .unique()
            .collect();

        Ok(FlowModel {
            id: self.id,
            name: self.name,
            nodes,
            connections,
            all_responsibles,
            ..FlowModel::default()
        })
    }
}

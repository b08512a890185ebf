use serde::{Deserialize, Serialize};

use crate::flow::NodeKind;

/// A connection from one table row to another node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConnection {
    #[serde(rename = "targetId")]
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// One row of the external flow table, describing a single node and its
/// outgoing connections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "rowNumber")]
    pub row_number: u32,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(default, rename = "connectsTo")]
    pub connects_to: Vec<TableConnection>,
}

pub mod di;
pub mod elements;

pub use di::*;
pub use elements::*;

use serde::Serialize;

/// The root of a compiled process document: the structural process layer
/// plus the parallel diagram-interchange layer. A thin serializer external
/// to this crate renders the tree to text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDocument {
    pub id: String,
    pub target_namespace: String,
    pub exporter: String,
    pub exporter_version: String,
    pub process: Process,
    pub diagram: Diagram,
}

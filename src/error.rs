use thiserror::Error;

/// Errors reported by the eager validation pass over a flow model.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNodeId(String),

    #[error(
        "Connection '{connection_id}' references node '{missing_id}', which does not exist in the flow"
    )]
    DanglingConnection {
        connection_id: String,
        missing_id: String,
    },

    #[error(
        "Association '{association_id}' references element '{missing_id}', which does not exist in the flow"
    )]
    DanglingAssociation {
        association_id: String,
        missing_id: String,
    },
}

/// Errors that can occur during document compilation.
///
/// Plain compilation is total: unresolved references degrade to fallback
/// geometry instead of failing. The only failure path is the external
/// auto-layout post-process, which is propagated unchanged.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("Auto-layout post-process failed: {0}")]
    AutoLayoutFailed(String),
}

/// Errors that can occur when converting an external tabular format into a
/// zushiki `FlowModel`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Row {row_number} has an empty node id")]
    EmptyRowId { row_number: u32 },

    #[error("Node id '{id}' appears in more than one row")]
    DuplicateRowId { id: String },
}

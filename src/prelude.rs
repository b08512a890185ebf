//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the zushiki
//! crate. Import this module to get access to the core functionality
//! without having to import each item individually.

// Compilation
pub use crate::compiler::{Compiler, CompilerBuilder, DocumentLayouter};
pub use crate::document::ProcessDocument;

// Flow model
pub use crate::flow::{
    normalize_owner, Annotation, Association, Connection, FlowMetadata, FlowModel, FlowNode,
    FlowTable, IntoFlowModel, NodeKind, UNASSIGNED,
};
pub use crate::table::{TableConnection, TableRow};

// Layout and routing
pub use crate::layout::layout;
pub use crate::router::route;

// Incremental synchronization
pub use crate::diff::{detect_changes, Change};
pub use crate::incremental::{apply_changes, PropertyPatch, SceneElement, SceneGraph};

// Error types
pub use crate::error::{CompileError, ConversionError, ModelError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! # Zushiki - Flow-to-Diagram Compilation and Incremental Synchronization
//!
//! **Zushiki** compiles an abstract process description (typed activity
//! nodes, directed connections, owner tags) into a standards-conformant
//! process document with explicit 2-D geometry, and keeps an already
//! rendered diagram in sync with subsequent edits without rebuilding it
//! from scratch.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical internal model of a process flow.
//! The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse the editor's tabular source (or any custom
//!     format) into your own Rust structs.
//! 2.  **Convert to Zushiki's Model**: Implement the `IntoFlowModel` trait
//!     (or use the bundled `FlowTable`) to translate into a `FlowModel`.
//! 3.  **Lay Out**: Run the deterministic owner-column layout to assign a
//!     position to every node.
//! 4.  **Compile**: Use `Compiler::builder` to turn the laid-out model into
//!     a `ProcessDocument` - structural elements plus diagram-interchange
//!     geometry - ready for an external serializer.
//! 5.  **Synchronize**: On each table edit, diff the old and new row sets
//!     with `detect_changes` and patch the live scene graph through
//!     `apply_changes` instead of recompiling, falling back to a full
//!     recompile only when the change set demands it.
//!
//! ## Quick Start
//!
//! ```rust
//! use zushiki::prelude::*;
//!
//! // A bundled example flow; real callers convert their own source via
//! // `IntoFlowModel`.
//! let flow = zushiki::data::approval_flow();
//!
//! // Assign positions, then compile to a serializable document.
//! let laid_out = layout(&flow);
//! let document = Compiler::builder(laid_out).build().compile();
//!
//! // 8 nodes and 7 sequence flows, each with a matching DI record.
//! assert_eq!(document.process.elements.len(), 15);
//! assert_eq!(document.diagram.plane.elements.len(), 15);
//! ```

pub mod compiler;
pub mod data;
pub mod diff;
pub mod document;
pub mod error;
pub mod flow;
pub mod incremental;
pub mod layout;
pub mod prelude;
pub mod router;
pub mod table;

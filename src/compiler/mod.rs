use crate::document::ProcessDocument;
use crate::error::CompileError;
use crate::flow::FlowModel;

mod diagram;
mod process;

/// The external generic graph-layout post-processor. Treated as a black box
/// that may fail; its failures propagate to the caller unchanged.
pub trait DocumentLayouter {
    fn relayout(&self, document: ProcessDocument) -> Result<ProcessDocument, CompileError>;
}

/// Compiles a [`FlowModel`] into a serializable [`ProcessDocument`]: the
/// structural process layer plus the diagram-interchange geometry layer.
pub struct Compiler {
    flow: FlowModel,
    target_namespace: String,
    exporter: String,
    exporter_version: String,
}

pub struct CompilerBuilder {
    flow: FlowModel,
    target_namespace: String,
    exporter: String,
    exporter_version: String,
}

impl CompilerBuilder {
    pub fn new(flow: FlowModel) -> Self {
        Self {
            flow,
            target_namespace: "http://bpmn.io/schema/bpmn".to_string(),
            exporter: env!("CARGO_PKG_NAME").to_string(),
            exporter_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn with_target_namespace(mut self, namespace: &str) -> Self {
        self.target_namespace = namespace.to_string();
        self
    }

    pub fn with_exporter(mut self, name: &str, version: &str) -> Self {
        self.exporter = name.to_string();
        self.exporter_version = version.to_string();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            flow: self.flow,
            target_namespace: self.target_namespace,
            exporter: self.exporter,
            exporter_version: self.exporter_version,
        }
    }
}

impl Compiler {
    pub fn builder(flow: FlowModel) -> CompilerBuilder {
        CompilerBuilder::new(flow)
    }

    /// Compiles the flow. Total: unresolved references degrade to fallback
    /// geometry instead of failing.
    pub fn compile(&self) -> ProcessDocument {
        ProcessDocument {
            id: format!("Definitions_{}", self.flow.id),
            target_namespace: self.target_namespace.clone(),
            exporter: self.exporter.clone(),
            exporter_version: self.exporter_version.clone(),
            process: process::build_process(&self.flow),
            diagram: diagram::build_diagram(&self.flow),
        }
    }

    /// Compiles the flow, then hands the document to the external layout
    /// post-processor.
    pub fn compile_with_auto_layout(
        &self,
        layouter: &dyn DocumentLayouter,
    ) -> Result<ProcessDocument, CompileError> {
        layouter.relayout(self.compile())
    }
}

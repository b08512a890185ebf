use serde::Serialize;

/// The structural process layer: one element per node, connection,
/// annotation and association of the source flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    pub is_executable: bool,
    pub elements: Vec<ProcessElement>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProcessElement {
    Node(NodeElement),
    SequenceFlow(SequenceFlow),
    TextAnnotation(TextAnnotation),
    Association(AssociationElement),
}

impl ProcessElement {
    /// The id of the underlying business element, whatever its variant.
    pub fn id(&self) -> &str {
        match self {
            ProcessElement::Node(e) => &e.id,
            ProcessElement::SequenceFlow(e) => &e.id,
            ProcessElement::TextAnnotation(e) => &e.id,
            ProcessElement::Association(e) => &e.id,
        }
    }
}

/// A flow node element. `kind` is the concrete structural kind selected by
/// the node-kind lookup table (for example `bpmn:UserTask`).
#[derive(Debug, Clone, Serialize)]
pub struct NodeElement {
    pub kind: String,
    pub id: String,
    pub name: String,
    /// Merged extension attributes, including `responsible` when present.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    pub kind: String,
    pub id: String,
    pub source_ref: String,
    pub target_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<FormalExpression>,
}

/// A condition expression carried verbatim; no expression-language
/// validation happens here.
#[derive(Debug, Clone, Serialize)]
pub struct FormalExpression {
    pub kind: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextAnnotation {
    pub kind: String,
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationElement {
    pub kind: String,
    pub id: String,
    pub source_ref: String,
    pub target_ref: String,
}

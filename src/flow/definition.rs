use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

/// Sentinel owner assigned to nodes whose `responsible` tag is empty or blank.
pub const UNASSIGNED: &str = "Unassigned";

/// Normalizes an owner tag: blank or missing tags collapse to [`UNASSIGNED`].
pub fn normalize_owner(owner: Option<&str>) -> &str {
    match owner {
        Some(s) if !s.trim().is_empty() => s,
        _ => UNASSIGNED,
    }
}

/// The closed set of node kinds a flow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    StartEvent,
    EndEvent,
    #[default]
    Task,
    UserTask,
    ServiceTask,
    ScriptTask,
    SendTask,
    ReceiveTask,
    ManualTask,
    BusinessRuleTask,
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
    EventBasedGateway,
    SubProcess,
    CallActivity,
}

impl NodeKind {
    /// Parses the tabular-source name of a kind. Unrecognized names fall
    /// back to the generic `Task`.
    pub fn parse(name: &str) -> Self {
        match name {
            "startEvent" => NodeKind::StartEvent,
            "endEvent" => NodeKind::EndEvent,
            "task" => NodeKind::Task,
            "userTask" => NodeKind::UserTask,
            "serviceTask" => NodeKind::ServiceTask,
            "scriptTask" => NodeKind::ScriptTask,
            "sendTask" => NodeKind::SendTask,
            "receiveTask" => NodeKind::ReceiveTask,
            "manualTask" => NodeKind::ManualTask,
            "businessRuleTask" => NodeKind::BusinessRuleTask,
            "exclusiveGateway" => NodeKind::ExclusiveGateway,
            "parallelGateway" => NodeKind::ParallelGateway,
            "inclusiveGateway" => NodeKind::InclusiveGateway,
            "eventBasedGateway" => NodeKind::EventBasedGateway,
            "subProcess" => NodeKind::SubProcess,
            "callActivity" => NodeKind::CallActivity,
            _ => NodeKind::Task,
        }
    }

    /// The tabular-source name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::StartEvent => "startEvent",
            NodeKind::EndEvent => "endEvent",
            NodeKind::Task => "task",
            NodeKind::UserTask => "userTask",
            NodeKind::ServiceTask => "serviceTask",
            NodeKind::ScriptTask => "scriptTask",
            NodeKind::SendTask => "sendTask",
            NodeKind::ReceiveTask => "receiveTask",
            NodeKind::ManualTask => "manualTask",
            NodeKind::BusinessRuleTask => "businessRuleTask",
            NodeKind::ExclusiveGateway => "exclusiveGateway",
            NodeKind::ParallelGateway => "parallelGateway",
            NodeKind::InclusiveGateway => "inclusiveGateway",
            NodeKind::EventBasedGateway => "eventBasedGateway",
            NodeKind::SubProcess => "subProcess",
            NodeKind::CallActivity => "callActivity",
        }
    }

    /// The structural element kind emitted for this node kind.
    pub fn structural_kind(&self) -> &'static str {
        match self {
            NodeKind::StartEvent => "bpmn:StartEvent",
            NodeKind::EndEvent => "bpmn:EndEvent",
            NodeKind::Task => "bpmn:Task",
            NodeKind::UserTask => "bpmn:UserTask",
            NodeKind::ServiceTask => "bpmn:ServiceTask",
            NodeKind::ScriptTask => "bpmn:ScriptTask",
            NodeKind::SendTask => "bpmn:SendTask",
            NodeKind::ReceiveTask => "bpmn:ReceiveTask",
            NodeKind::ManualTask => "bpmn:ManualTask",
            NodeKind::BusinessRuleTask => "bpmn:BusinessRuleTask",
            NodeKind::ExclusiveGateway => "bpmn:ExclusiveGateway",
            NodeKind::ParallelGateway => "bpmn:ParallelGateway",
            NodeKind::InclusiveGateway => "bpmn:InclusiveGateway",
            NodeKind::EventBasedGateway => "bpmn:EventBasedGateway",
            NodeKind::SubProcess => "bpmn:SubProcess",
            NodeKind::CallActivity => "bpmn:CallActivity",
        }
    }

    /// Default shape size for this kind when the node carries no explicit
    /// dimensions.
    pub fn default_dimensions(&self) -> Dimensions {
        match self {
            NodeKind::StartEvent | NodeKind::EndEvent => Dimensions {
                width: 36.0,
                height: 36.0,
            },
            NodeKind::ExclusiveGateway
            | NodeKind::ParallelGateway
            | NodeKind::InclusiveGateway
            | NodeKind::EventBasedGateway => Dimensions {
                width: 50.0,
                height: 50.0,
            },
            NodeKind::SubProcess => Dimensions {
                width: 350.0,
                height: 200.0,
            },
            _ => Dimensions {
                width: 100.0,
                height: 80.0,
            },
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(NodeKind::parse(&name))
    }
}

impl std::str::FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeKind::parse(s))
    }
}

/// Canvas position of a node or annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Shape size of a node or annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// A single activity, event or gateway in the flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl FlowNode {
    /// Explicit dimensions if present, else the kind default.
    pub fn resolved_dimensions(&self) -> Dimensions {
        self.dimensions.unwrap_or_else(|| self.kind.default_dimensions())
    }

    /// The owner tag of this node, normalized.
    pub fn owner(&self) -> &str {
        normalize_owner(self.responsible.as_deref())
    }
}

/// A directed sequence flow between two nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Default shape size for annotations without explicit dimensions.
pub const ANNOTATION_DIMENSIONS: Dimensions = Dimensions {
    width: 160.0,
    height: 80.0,
};

/// A free-text note attached to a node via an [`Association`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl Annotation {
    /// Explicit dimensions if present, else the annotation default.
    pub fn resolved_dimensions(&self) -> Dimensions {
        self.dimensions.unwrap_or(ANNOTATION_DIMENSIONS)
    }
}

/// Links an [`Annotation`] to its source node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Association {
    pub id: String,
    #[serde(rename = "sourceRef")]
    pub source_ref: String,
    #[serde(rename = "targetRef")]
    pub target_ref: String,
}

/// Optional descriptive metadata carried by a flow model. Never emitted into
/// the compiled document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The complete, canonical definition of a process flow, ready for layout
/// and compilation. Node order is meaningful: it is the table row order and
/// drives vertical placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowModel {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<Association>,
    /// Full ordered list of distinct owner tags. Owners listed here reserve
    /// a column even when they have no nodes yet.
    #[serde(default, rename = "allResponsibles", skip_serializing_if = "Vec::is_empty")]
    pub all_responsibles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FlowMetadata>,
}

impl FlowModel {
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }
}

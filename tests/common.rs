//! Common test utilities for building flow models, table rows and a spy
//! scene graph.
use zushiki::incremental::SEQUENCE_FLOW_KIND;
use zushiki::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, label: &str, responsible: Option<&str>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        responsible: responsible.map(str::to_string),
        ..FlowNode::default()
    }
}

#[allow(dead_code)]
pub fn connection(id: &str, from: &str, to: &str) -> Connection {
    Connection {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        ..Connection::default()
    }
}

#[allow(dead_code)]
pub fn row(
    row_number: u32,
    id: &str,
    kind: NodeKind,
    label: &str,
    responsible: Option<&str>,
    targets: &[&str],
) -> TableRow {
    TableRow {
        row_number,
        id: id.to_string(),
        kind,
        label: label.to_string(),
        responsible: responsible.map(str::to_string),
        connects_to: targets
            .iter()
            .map(|t| TableConnection {
                target_id: t.to_string(),
                ..TableConnection::default()
            })
            .collect(),
    }
}

/// `Start -> T1 -> End`, no owners set.
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowModel {
    FlowModel {
        id: "Process_Test".to_string(),
        name: "Test Process".to_string(),
        nodes: vec![
            node("Start", NodeKind::StartEvent, "Start", None),
            node("T1", NodeKind::Task, "Do Something", None),
            node("End", NodeKind::EndEvent, "End", None),
        ],
        connections: vec![
            connection("Flow_1", "Start", "T1"),
            connection("Flow_2", "T1", "End"),
        ],
        ..FlowModel::default()
    }
}

/// Two owners with one node each, at table indices 0 and 1.
#[allow(dead_code)]
pub fn create_two_owner_flow() -> FlowModel {
    FlowModel {
        id: "Process_Owners".to_string(),
        name: "Owner Columns".to_string(),
        nodes: vec![
            node("A", NodeKind::Task, "Ana's Task", Some("Ana")),
            node("B", NodeKind::Task, "Bob's Task", Some("Bob")),
        ],
        connections: vec![connection("Flow_1", "A", "B")],
        ..FlowModel::default()
    }
}

/// Every mutation the applier requested, in call order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    UpdateProperties { id: String, patch: PropertyPatch },
    MoveElements { ids: Vec<String>, dx: f64, dy: f64 },
    Connect { source: String, target: String, kind: String },
    RemoveElements { ids: Vec<String> },
    RemoveConnection { id: String },
}

/// A spy scene graph: answers lookups from a fixed element list and records
/// every mutation call.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SpyScene {
    pub elements: Vec<SceneElement>,
    pub calls: Vec<SceneCall>,
}

#[allow(dead_code)]
impl SpyScene {
    pub fn with_elements(elements: Vec<SceneElement>) -> Self {
        Self {
            elements,
            calls: Vec::new(),
        }
    }

    pub fn shape(id: &str, kind: &str, x: f64) -> SceneElement {
        SceneElement {
            id: id.to_string(),
            kind: kind.to_string(),
            x,
            ..SceneElement::default()
        }
    }

    pub fn connector(id: &str, source: &str, target: &str) -> SceneElement {
        SceneElement {
            id: id.to_string(),
            kind: SEQUENCE_FLOW_KIND.to_string(),
            source: Some(source.to_string()),
            target: Some(target.to_string()),
            ..SceneElement::default()
        }
    }
}

impl SceneGraph for SpyScene {
    fn element_by_id(&self, id: &str) -> Option<SceneElement> {
        self.elements.iter().find(|e| e.id == id).cloned()
    }

    fn all_elements(&self) -> Vec<SceneElement> {
        self.elements.clone()
    }

    fn update_properties(&mut self, id: &str, patch: &PropertyPatch) {
        self.calls.push(SceneCall::UpdateProperties {
            id: id.to_string(),
            patch: patch.clone(),
        });
    }

    fn move_elements(&mut self, ids: &[&str], dx: f64, dy: f64) {
        for element in self.elements.iter_mut().filter(|e| ids.contains(&e.id.as_str())) {
            element.x += dx;
            element.y += dy;
        }
        self.calls.push(SceneCall::MoveElements {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            dx,
            dy,
        });
    }

    fn connect(&mut self, source_id: &str, target_id: &str, kind: &str) -> SceneElement {
        self.calls.push(SceneCall::Connect {
            source: source_id.to_string(),
            target: target_id.to_string(),
            kind: kind.to_string(),
        });
        let connector = Self::connector(&format!("{source_id}_{target_id}"), source_id, target_id);
        self.elements.push(connector.clone());
        connector
    }

    fn remove_elements(&mut self, ids: &[&str]) {
        self.elements.retain(|e| !ids.contains(&e.id.as_str()));
        self.calls.push(SceneCall::RemoveElements {
            ids: ids.iter().map(|s| s.to_string()).collect(),
        });
    }

    fn remove_connection(&mut self, id: &str) {
        self.elements.retain(|e| e.id != id);
        self.calls.push(SceneCall::RemoveConnection { id: id.to_string() });
    }
}

use crate::flow::{
    Connection, FlowMetadata, FlowModel, FlowNode, NodeKind,
};
use crate::table::{TableConnection, TableRow};

/// A simple approval process: request submission, review, and a decision
/// gateway with labeled, conditioned branches. Used by the CLI demo and as
/// mock data when no flow is provided.
pub fn approval_flow() -> FlowModel {
    FlowModel {
        id: "Process_SimpleApproval".to_string(),
        name: "Simple Approval Process".to_string(),
        nodes: vec![
            node("StartEvent_1", NodeKind::StartEvent, "Start", Some("Requester")),
            node(
                "Task_SubmitRequest",
                NodeKind::UserTask,
                "Submit Request",
                Some("Requester"),
            ),
            node(
                "Task_ReviewRequest",
                NodeKind::UserTask,
                "Review Request",
                Some("Approver"),
            ),
            node(
                "Gateway_Decision",
                NodeKind::ExclusiveGateway,
                "Approved?",
                Some("Approver"),
            ),
            node(
                "Task_ProcessApproval",
                NodeKind::ServiceTask,
                "Process Approval",
                Some("System"),
            ),
            node(
                "Task_SendRejection",
                NodeKind::SendTask,
                "Send Rejection",
                Some("System"),
            ),
            node("EndEvent_Approved", NodeKind::EndEvent, "Approved", Some("System")),
            node("EndEvent_Rejected", NodeKind::EndEvent, "Rejected", Some("System")),
        ],
        connections: vec![
            connection("Flow_1", "StartEvent_1", "Task_SubmitRequest", None, None),
            connection("Flow_2", "Task_SubmitRequest", "Task_ReviewRequest", None, None),
            connection("Flow_3", "Task_ReviewRequest", "Gateway_Decision", None, None),
            connection(
                "Flow_4",
                "Gateway_Decision",
                "Task_ProcessApproval",
                Some("Yes"),
                Some("${approved == true}"),
            ),
            connection(
                "Flow_5",
                "Gateway_Decision",
                "Task_SendRejection",
                Some("No"),
                Some("${approved == false}"),
            ),
            connection("Flow_6", "Task_ProcessApproval", "EndEvent_Approved", None, None),
            connection("Flow_7", "Task_SendRejection", "EndEvent_Rejected", None, None),
        ],
        metadata: Some(FlowMetadata {
            version: Some("1.0".to_string()),
            description: Some("A simple approval workflow with a decision gateway".to_string()),
            ..FlowMetadata::default()
        }),
        ..FlowModel::default()
    }
}

/// The tabular form of [`approval_flow`], as the editor would hold it.
pub fn approval_rows() -> Vec<TableRow> {
    vec![
        row(1, "StartEvent_1", NodeKind::StartEvent, "Start", Some("Requester"), &[("Task_SubmitRequest", None, None)]),
        row(2, "Task_SubmitRequest", NodeKind::UserTask, "Submit Request", Some("Requester"), &[("Task_ReviewRequest", None, None)]),
        row(3, "Task_ReviewRequest", NodeKind::UserTask, "Review Request", Some("Approver"), &[("Gateway_Decision", None, None)]),
        row(
            4,
            "Gateway_Decision",
            NodeKind::ExclusiveGateway,
            "Approved?",
            Some("Approver"),
            &[
                ("Task_ProcessApproval", Some("Yes"), Some("${approved == true}")),
                ("Task_SendRejection", Some("No"), Some("${approved == false}")),
            ],
        ),
        row(5, "Task_ProcessApproval", NodeKind::ServiceTask, "Process Approval", Some("System"), &[("EndEvent_Approved", None, None)]),
        row(6, "Task_SendRejection", NodeKind::SendTask, "Send Rejection", Some("System"), &[("EndEvent_Rejected", None, None)]),
        row(7, "EndEvent_Approved", NodeKind::EndEvent, "Approved", Some("System"), &[]),
        row(8, "EndEvent_Rejected", NodeKind::EndEvent, "Rejected", Some("System"), &[]),
    ]
}

fn node(id: &str, kind: NodeKind, label: &str, responsible: Option<&str>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        responsible: responsible.map(str::to_string),
        ..FlowNode::default()
    }
}

fn connection(
    id: &str,
    from: &str,
    to: &str,
    label: Option<&str>,
    condition: Option<&str>,
) -> Connection {
    Connection {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        label: label.map(str::to_string),
        condition: condition.map(str::to_string),
    }
}

fn row(
    row_number: u32,
    id: &str,
    kind: NodeKind,
    label: &str,
    responsible: Option<&str>,
    connects_to: &[(&str, Option<&str>, Option<&str>)],
) -> TableRow {
    TableRow {
        row_number,
        id: id.to_string(),
        kind,
        label: label.to_string(),
        responsible: responsible.map(str::to_string),
        connects_to: connects_to
            .iter()
            .map(|(target, label, condition)| TableConnection {
                target_id: target.to_string(),
                label: label.map(str::to_string),
                condition: condition.map(str::to_string),
            })
            .collect(),
    }
}

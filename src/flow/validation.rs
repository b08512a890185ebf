use ahash::AHashSet;

use super::definition::FlowModel;
use crate::error::ModelError;

/// Eager structural validation of a flow model.
///
/// Compilation and layout never call this; they degrade on unresolved
/// references instead. Callers that prefer to fail fast run this pass
/// before compiling.
pub fn validate(flow: &FlowModel) -> Result<(), ModelError> {
    let mut node_ids: AHashSet<&str> = AHashSet::with_capacity(flow.nodes.len());
    for node in &flow.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(ModelError::DuplicateNodeId(node.id.clone()));
        }
    }

    for connection in &flow.connections {
        for endpoint in [&connection.from, &connection.to] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(ModelError::DanglingConnection {
                    connection_id: connection.id.clone(),
                    missing_id: endpoint.clone(),
                });
            }
        }
    }

    for association in &flow.associations {
        if !node_ids.contains(association.source_ref.as_str()) {
            return Err(ModelError::DanglingAssociation {
                association_id: association.id.clone(),
                missing_id: association.source_ref.clone(),
            });
        }
        if flow.annotation(&association.target_ref).is_none() {
            return Err(ModelError::DanglingAssociation {
                association_id: association.id.clone(),
                missing_id: association.target_ref.clone(),
            });
        }
    }

    Ok(())
}

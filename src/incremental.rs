//! Incremental patching of a live, externally owned scene graph.
//!
//! Changes within one batch are applied strictly in order: a later mutation
//! may depend on an earlier one having taken effect. There is no rollback;
//! a caller that aborts mid-batch accepts a partially mutated scene graph.

use tracing::{debug, warn};

use crate::diff::Change;
use crate::flow::normalize_owner;
use crate::layout;
use crate::table::TableRow;

/// Element kind of sequence-flow connectors in the scene graph.
pub const SEQUENCE_FLOW_KIND: &str = "bpmn:SequenceFlow";

/// Value snapshot of a scene-graph element at the collaborator boundary.
/// `source`/`target` are set for connectors only.
#[derive(Debug, Clone, Default)]
pub struct SceneElement {
    pub id: String,
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub source: Option<String>,
    pub target: Option<String>,
}

/// Property changes to apply to one element. `Some("")` clears a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub responsible: Option<String>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.responsible.is_none()
    }
}

/// The rendering engine's mutable element registry. Injected by the caller;
/// this crate only calls it and never caches lookups across calls.
pub trait SceneGraph {
    fn element_by_id(&self, id: &str) -> Option<SceneElement>;
    fn all_elements(&self) -> Vec<SceneElement>;
    fn update_properties(&mut self, id: &str, patch: &PropertyPatch);
    fn move_elements(&mut self, ids: &[&str], dx: f64, dy: f64);
    fn connect(&mut self, source_id: &str, target_id: &str, kind: &str) -> SceneElement;
    fn remove_elements(&mut self, ids: &[&str]);
    fn remove_connection(&mut self, id: &str);
}

/// Applies a change batch against the scene graph.
///
/// Returns `false` without touching the scene graph when the batch contains
/// a node addition: placement of new nodes needs the global layout pass, so
/// the caller must recompile from scratch. Otherwise applies every change
/// in order and returns `true`.
pub fn apply_changes<S: SceneGraph>(scene: &mut S, changes: &[Change], all_rows: &[TableRow]) -> bool {
    if changes.iter().any(Change::requires_recompile) {
        debug!("change batch contains node additions, full regeneration required");
        return false;
    }

    for change in changes {
        match change {
            Change::NodeUpdated { row, previous } => {
                apply_node_update(scene, row, previous, all_rows);
            }
            Change::ConnectionAdded { from, to } => apply_connection_add(scene, from, to),
            Change::ConnectionRemoved { from, to } => apply_connection_remove(scene, from, to),
            Change::NodeRemoved { row } => apply_node_remove(scene, &row.id),
            // Unreachable past the gate above.
            Change::NodeAdded { .. } => {}
        }
    }

    true
}

fn apply_node_update(
    scene: &mut impl SceneGraph,
    row: &TableRow,
    previous: &TableRow,
    all_rows: &[TableRow],
) {
    let Some(element) = scene.element_by_id(&row.id) else {
        warn!(node = %row.id, "element not found in scene graph, skipping update");
        return;
    };

    let responsible_changed = normalize_owner(row.responsible.as_deref())
        != normalize_owner(previous.responsible.as_deref());

    let mut patch = PropertyPatch::default();
    if row.label != previous.label {
        patch.name = Some(row.label.clone());
    }
    if responsible_changed {
        patch.responsible = Some(row.responsible.clone().unwrap_or_default());
    }
    if !patch.is_empty() {
        scene.update_properties(&row.id, &patch);
    }

    // An owner change moves the element into its new column, horizontally
    // only. Moves below one unit are dropped to avoid float-noise churn.
    if responsible_changed {
        let new_x = layout::column_center_for_owner(row.responsible.as_deref(), all_rows);
        let delta = new_x - element.x;
        if delta.abs() > 1.0 {
            scene.move_elements(&[row.id.as_str()], delta, 0.0);
        }
    }

    // A kind change is not applied: replacing a live element's structural
    // kind means remove-and-recreate, which is a full-recompile concern.
}

fn apply_connection_add(scene: &mut impl SceneGraph, from: &str, to: &str) {
    if scene.element_by_id(from).is_none() || scene.element_by_id(to).is_none() {
        warn!(%from, %to, "connection endpoint not found in scene graph, skipping");
        return;
    }
    scene.connect(from, to, SEQUENCE_FLOW_KIND);
}

fn apply_connection_remove(scene: &mut impl SceneGraph, from: &str, to: &str) {
    let connector = scene.all_elements().into_iter().find(|element| {
        element.kind == SEQUENCE_FLOW_KIND
            && element.source.as_deref() == Some(from)
            && element.target.as_deref() == Some(to)
    });
    // An absent connector is a no-op: the scene graph is already in the
    // desired state or was mutated out-of-band.
    if let Some(connector) = connector {
        scene.remove_connection(&connector.id);
    }
}

fn apply_node_remove(scene: &mut impl SceneGraph, id: &str) {
    if scene.element_by_id(id).is_some() {
        scene.remove_elements(&[id]);
    }
}

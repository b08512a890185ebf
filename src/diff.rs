//! Diffing of two versions of the tabular source into a typed change list.

use ahash::{AHashMap, AHashSet};

use crate::flow::normalize_owner;
use crate::table::TableRow;

/// One detected difference between two row sets.
///
/// A connection whose label or condition changed but whose target id did
/// not produces no change; only endpoint identity is diffed.
#[derive(Debug, Clone)]
pub enum Change {
    NodeAdded { row: TableRow },
    NodeRemoved { row: TableRow },
    NodeUpdated { row: TableRow, previous: TableRow },
    ConnectionAdded { from: String, to: String },
    ConnectionRemoved { from: String, to: String },
}

impl Change {
    /// Node additions cannot be applied incrementally: correct placement
    /// needs the global layout pass.
    pub fn requires_recompile(&self) -> bool {
        matches!(self, Change::NodeAdded { .. })
    }
}

/// Diffs `old_rows` against `new_rows`.
///
/// Emission order: all changes derived from `new_rows` in row order (the
/// node-level change, if any, before that row's connection changes), then
/// all removals in `old_rows` order.
pub fn detect_changes(old_rows: &[TableRow], new_rows: &[TableRow]) -> Vec<Change> {
    let old_by_id: AHashMap<&str, &TableRow> =
        old_rows.iter().map(|r| (r.id.as_str(), r)).collect();
    let new_by_id: AHashMap<&str, &TableRow> =
        new_rows.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut changes = Vec::new();

    for new_row in new_rows {
        match old_by_id.get(new_row.id.as_str()) {
            None => changes.push(Change::NodeAdded {
                row: new_row.clone(),
            }),
            Some(old_row) => {
                if row_changed(old_row, new_row) {
                    changes.push(Change::NodeUpdated {
                        row: new_row.clone(),
                        previous: (*old_row).clone(),
                    });
                }
                detect_connection_changes(old_row, new_row, &mut changes);
            }
        }
    }

    for old_row in old_rows {
        if !new_by_id.contains_key(old_row.id.as_str()) {
            changes.push(Change::NodeRemoved {
                row: old_row.clone(),
            });
        }
    }

    changes
}

fn row_changed(old: &TableRow, new: &TableRow) -> bool {
    old.label != new.label
        || old.kind != new.kind
        || normalize_owner(old.responsible.as_deref()) != normalize_owner(new.responsible.as_deref())
}

fn detect_connection_changes(old: &TableRow, new: &TableRow, changes: &mut Vec<Change>) {
    let old_targets: AHashSet<&str> = old.connects_to.iter().map(|c| c.target_id.as_str()).collect();
    let new_targets: AHashSet<&str> = new.connects_to.iter().map(|c| c.target_id.as_str()).collect();

    for link in &new.connects_to {
        if !old_targets.contains(link.target_id.as_str()) {
            changes.push(Change::ConnectionAdded {
                from: new.id.clone(),
                to: link.target_id.clone(),
            });
        }
    }

    for link in &old.connects_to {
        if !new_targets.contains(link.target_id.as_str()) {
            changes.push(Change::ConnectionRemoved {
                from: old.id.clone(),
                to: link.target_id.clone(),
            });
        }
    }
}

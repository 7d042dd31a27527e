//
// Structural checks on a NodeTable before layout.
//
// What this does:
// - Requires a "root" node
// - Resolves every children entry against the table
// - Rejects nodes reachable through two different parents
// - Rejects cycles (including anything pointing back at root)
//
// Orphans (nodes not reachable from root) are not rejected here; the edge
// list builder catches them through its edge-count check.

use std::collections::HashMap;

use tracing::trace;

use super::types::{NodeTable, ROOT_ID};
use crate::error::MalformedTreeError;

/// DFS visit state. `Open` nodes are exactly the ones on the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Open,
    Done,
}

pub fn validate_tree(table: &NodeTable) -> Result<(), MalformedTreeError> {
    if table.root().is_none() {
        return Err(MalformedTreeError::MissingRoot);
    }

    let mut state: HashMap<&str, Visit> = HashMap::with_capacity(table.len());
    // child -> parent for every node reached so far
    let mut parent_of: HashMap<&str, &str> = HashMap::with_capacity(table.len());
    // (node, children already pushed)
    let mut stack: Vec<(&str, bool)> = vec![(ROOT_ID, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            state.insert(id, Visit::Done);
            continue;
        }
        state.insert(id, Visit::Open);
        stack.push((id, true));

        let node = table
            .get(id)
            .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))?;

        for child in &node.children {
            let child = child.as_str();
            if table.get(child).is_none() {
                return Err(MalformedTreeError::UnknownChild {
                    parent: id.to_string(),
                    child: child.to_string(),
                });
            }
            if child == ROOT_ID || state.get(child) == Some(&Visit::Open) {
                return Err(MalformedTreeError::CycleDetected(child.to_string()));
            }
            if let Some(&first) = parent_of.get(child) {
                return Err(MalformedTreeError::MultipleParents {
                    child: child.to_string(),
                    first: first.to_string(),
                    second: id.to_string(),
                });
            }
            parent_of.insert(child, id);
        }
        for child in node.children.iter().rev() {
            stack.push((child.as_str(), false));
        }
    }

    trace!(reachable = parent_of.len() + 1, total = table.len(), "tree validated");
    Ok(())
}

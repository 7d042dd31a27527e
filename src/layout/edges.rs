// Edge list for rendering.
//
// One pre-order pass from root emits a (parent, child) pair per children
// entry. A well-formed tree has exactly nodes - 1 edges; anything else
// (orphans, shared children, back edges) is reported as a malformed tree.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::MalformedTreeError;
use crate::tree::{NodeTable, ROOT_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
}

impl TreeEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

pub fn build_edge_list(table: &NodeTable) -> Result<Vec<TreeEdge>, MalformedTreeError> {
    if table.root().is_none() {
        return Err(MalformedTreeError::MissingRoot);
    }

    let mut edges = Vec::with_capacity(table.len().saturating_sub(1));
    let mut expanded: HashSet<&str> = HashSet::with_capacity(table.len());
    // (parent, node); root has no parent
    let mut stack: Vec<(Option<&str>, &str)> = vec![(None, ROOT_ID)];

    while let Some((parent, id)) = stack.pop() {
        if let Some(parent) = parent {
            edges.push(TreeEdge::new(parent, id));
        }
        // Revisits only happen in a non-tree; count the edge, never expand twice.
        if !expanded.insert(id) {
            continue;
        }

        let node = table
            .get(id)
            .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))?;

        for child in node.children.iter().rev() {
            if table.get(child).is_none() {
                return Err(MalformedTreeError::UnknownChild {
                    parent: id.to_string(),
                    child: child.clone(),
                });
            }
            stack.push((Some(id), child.as_str()));
        }
    }

    let expected = table.len() - 1;
    if edges.len() != expected {
        return Err(MalformedTreeError::EdgeCountMismatch {
            nodes: table.len(),
            expected,
            found: edges.len(),
        });
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn table(entries: &[(&str, &[&str])]) -> NodeTable {
        entries
            .iter()
            .map(|(id, children)| {
                (id.to_string(), TreeNode::new(*id).with_children(children.iter().copied()))
            })
            .collect()
    }

    #[test]
    fn test_root_only_has_no_edges() {
        let edges = build_edge_list(&table(&[("root", &[])])).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_pre_order() {
        let t = table(&[
            ("root", &["a", "b"]),
            ("a", &["a1", "a2"]),
            ("a1", &[]),
            ("a2", &[]),
            ("b", &[]),
        ]);
        let edges = build_edge_list(&t).unwrap();
        assert_eq!(
            edges,
            vec![
                TreeEdge::new("root", "a"),
                TreeEdge::new("a", "a1"),
                TreeEdge::new("a", "a2"),
                TreeEdge::new("root", "b"),
            ]
        );
    }

    #[test]
    fn test_template_edge_count() {
        let t = NodeTable::default_template();
        assert_eq!(build_edge_list(&t).unwrap().len(), t.len() - 1);
    }

    #[test]
    fn test_orphan_is_mismatch() {
        let t = table(&[("root", &["a"]), ("a", &[]), ("stray", &[])]);
        assert_eq!(
            build_edge_list(&t),
            Err(MalformedTreeError::EdgeCountMismatch { nodes: 3, expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_shared_child_is_mismatch() {
        let t = table(&[("root", &["a", "b"]), ("a", &["c"]), ("b", &["c"]), ("c", &[])]);
        assert!(matches!(
            build_edge_list(&t),
            Err(MalformedTreeError::EdgeCountMismatch { found: 4, .. })
        ));
    }

    #[test]
    fn test_unknown_child() {
        let t = table(&[("root", &["missing-id"])]);
        assert!(matches!(
            build_edge_list(&t),
            Err(MalformedTreeError::UnknownChild { .. })
        ));
    }
}

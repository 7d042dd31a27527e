// Leaf counts for angular weighting.
//
// leaf_count(n) = 1 for a leaf, otherwise the sum over n's children.
// Computed once per layout pass for the whole tree (post-order, explicit
// stack) and then read by every ancestor's sector allocation.

use std::collections::HashMap;

use crate::error::MalformedTreeError;
use crate::tree::{NodeTable, Visit, ROOT_ID};

/// Memoized leaf counts for every node reachable from root.
#[derive(Debug, Clone, Default)]
pub struct LeafCounts {
    counts: HashMap<String, usize>,
}

impl LeafCounts {
    pub fn compute(table: &NodeTable) -> Result<Self, MalformedTreeError> {
        if table.root().is_none() {
            return Err(MalformedTreeError::MissingRoot);
        }

        let mut counts: HashMap<String, usize> = HashMap::with_capacity(table.len());
        let mut state: HashMap<&str, Visit> = HashMap::with_capacity(table.len());
        // (node, children already pushed)
        let mut stack: Vec<(&str, bool)> = vec![(ROOT_ID, false)];

        while let Some((id, expanded)) = stack.pop() {
            let node = table
                .get(id)
                .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))?;

            if expanded {
                let count = if node.is_leaf() {
                    1
                } else {
                    node.children.iter().map(|c| counts[c.as_str()]).sum()
                };
                counts.insert(id.to_string(), count);
                state.insert(id, Visit::Done);
                continue;
            }

            match state.get(id) {
                Some(Visit::Open) => return Err(MalformedTreeError::CycleDetected(id.to_string())),
                Some(Visit::Done) => continue,
                None => {}
            }
            state.insert(id, Visit::Open);
            stack.push((id, true));

            for child in node.children.iter().rev() {
                if table.get(child).is_none() {
                    return Err(MalformedTreeError::UnknownChild {
                        parent: id.to_string(),
                        child: child.clone(),
                    });
                }
                if state.get(child.as_str()) == Some(&Visit::Open) {
                    return Err(MalformedTreeError::CycleDetected(child.clone()));
                }
                stack.push((child.as_str(), false));
            }
        }

        Ok(Self { counts })
    }

    /// Leaf count of `id`; always >= 1 for a node in the tree.
    pub fn get(&self, id: &str) -> Result<usize, MalformedTreeError> {
        self.counts
            .get(id)
            .copied()
            .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
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
    fn test_single_root_counts_one() {
        let counts = LeafCounts::compute(&table(&[("root", &[])])).unwrap();
        assert_eq!(counts.get("root"), Ok(1));
    }

    #[test]
    fn test_unbalanced_counts() {
        let t = table(&[
            ("root", &["a", "b"]),
            ("a", &[]),
            ("b", &["b1", "b2"]),
            ("b1", &[]),
            ("b2", &[]),
        ]);
        let counts = LeafCounts::compute(&t).unwrap();

        assert_eq!(counts.get("a"), Ok(1));
        assert_eq!(counts.get("b"), Ok(2));
        assert_eq!(counts.get("root"), Ok(3));
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn test_sum_invariant_on_template() {
        let t = NodeTable::default_template();
        let counts = LeafCounts::compute(&t).unwrap();

        for (id, node) in &t.nodes {
            let expected = if node.is_leaf() {
                1
            } else {
                node.children.iter().map(|c| counts.get(c).unwrap()).sum()
            };
            assert_eq!(counts.get(id), Ok(expected), "node {id}");
        }
        assert_eq!(counts.get("root"), Ok(72));
    }

    #[test]
    fn test_missing_child_is_error() {
        let t = table(&[("root", &["missing-id"])]);
        assert!(matches!(
            LeafCounts::compute(&t),
            Err(MalformedTreeError::UnknownChild { .. })
        ));
    }

    #[test]
    fn test_cycle_is_error() {
        let t = table(&[("root", &["a"]), ("a", &["b"]), ("b", &["a"])]);
        assert!(matches!(
            LeafCounts::compute(&t),
            Err(MalformedTreeError::CycleDetected(_))
        ));
    }

    #[test]
    fn test_unknown_lookup() {
        let counts = LeafCounts::compute(&table(&[("root", &[])])).unwrap();
        assert_eq!(
            counts.get("ghost"),
            Err(MalformedTreeError::UnknownNode("ghost".to_string()))
        );
    }
}

// In-place edits to a NodeTable.
//
// The tree shape is fixed once seeded; only a node's description changes at
// runtime, and every edit is followed by a full re-layout on the host side.

use super::types::NodeTable;
use crate::error::MalformedTreeError;

impl NodeTable {
    /// Replace the description of `id`. An empty string clears it back to
    /// "unanswered".
    pub fn set_description(
        &mut self,
        id: &str,
        description: &str,
    ) -> Result<(), MalformedTreeError> {
        let node = self
            .get_mut(id)
            .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))?;

        node.description = if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn make_table() -> NodeTable {
        let mut table = NodeTable::new();
        table.insert("root", TreeNode::new("Goal").with_children(["a"]));
        table.insert("a", TreeNode::new("A"));
        table
    }

    #[test]
    fn test_set_description() {
        let mut table = make_table();
        table.set_description("a", "We ship in Q3").unwrap();
        assert_eq!(table.get("a").unwrap().description.as_deref(), Some("We ship in Q3"));
    }

    #[test]
    fn test_clear_description() {
        let mut table = make_table();
        table.set_description("a", "x").unwrap();
        table.set_description("a", "").unwrap();
        assert_eq!(table.get("a").unwrap().description, None);
    }

    #[test]
    fn test_set_description_unknown_node() {
        let mut table = make_table();
        assert_eq!(
            table.set_description("nope", "x"),
            Err(MalformedTreeError::UnknownNode("nope".to_string()))
        );
        assert_eq!(table, make_table());
    }
}

use serde::Serialize;

use crate::tree::{TreeNode, ROOT_ID};

/// Presentation flags for a node, independent of its position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NodeStyle {
    pub is_root: bool,
    pub is_answered: bool,
}

pub fn classify(id: &str, node: &TreeNode) -> NodeStyle {
    NodeStyle {
        is_root: id == ROOT_ID,
        is_answered: node
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("  "), false)]
    #[case(Some("\n\t"), false)]
    #[case(Some("x"), true)]
    #[case(Some("Some answer"), true)]
    fn test_is_answered(#[case] description: Option<&str>, #[case] expected: bool) {
        let node = TreeNode {
            description: description.map(str::to_string),
            ..TreeNode::default()
        };
        assert_eq!(classify("a", &node).is_answered, expected);
    }

    #[test]
    fn test_is_root() {
        let node = TreeNode::new("Goal");
        assert!(classify("root", &node).is_root);
        assert!(!classify("Root", &node).is_root);
        assert!(!classify("b1", &node).is_root);
    }
}

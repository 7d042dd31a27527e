// Default board template.
//
// A fresh board is seeded once with a fixed shape: 8 top-level branches,
// 3 sub-branches under each, and 3 leaf questions under every sub-branch.
// Ids are positional ("b3", "b3.2", "b3.2.1") so they stay stable across
// reseeds; descriptions start empty.

use super::types::{NodeTable, TreeNode, ROOT_ID};

pub const TEMPLATE_BRANCHES: usize = 8;
pub const TEMPLATE_SUB_BRANCHES: usize = 3;
pub const TEMPLATE_LEAVES: usize = 3;

const BRANCH_LABELS: [&str; TEMPLATE_BRANCHES] = [
    "Problem",
    "Users",
    "Value",
    "Solution",
    "Scope",
    "Architecture",
    "Risks",
    "Metrics",
];

impl NodeTable {
    /// Seed the canonical board shape.
    pub fn default_template() -> Self {
        let mut table = NodeTable::new();

        let branch_ids: Vec<String> = (1..=TEMPLATE_BRANCHES).map(|b| format!("b{b}")).collect();
        table.insert(ROOT_ID, TreeNode::new("Goal").with_children(branch_ids.iter().cloned()));

        for (bi, branch_id) in branch_ids.iter().enumerate() {
            let sub_ids: Vec<String> = (1..=TEMPLATE_SUB_BRANCHES)
                .map(|s| format!("{branch_id}.{s}"))
                .collect();
            table.insert(
                branch_id.clone(),
                TreeNode::new(BRANCH_LABELS[bi]).with_children(sub_ids.iter().cloned()),
            );

            for (si, sub_id) in sub_ids.iter().enumerate() {
                let leaf_ids: Vec<String> = (1..=TEMPLATE_LEAVES)
                    .map(|l| format!("{sub_id}.{l}"))
                    .collect();
                table.insert(
                    sub_id.clone(),
                    TreeNode::new(format!("{} {}", BRANCH_LABELS[bi], si + 1))
                        .with_children(leaf_ids.iter().cloned()),
                );

                for (li, leaf_id) in leaf_ids.iter().enumerate() {
                    table.insert(
                        leaf_id.clone(),
                        TreeNode::new(format!("{} {}.{}", BRANCH_LABELS[bi], si + 1, li + 1)),
                    );
                }
            }
        }

        table
    }
}

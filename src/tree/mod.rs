mod types;
mod template;
mod update;
mod validate;

pub use types::*;
pub use template::{TEMPLATE_BRANCHES, TEMPLATE_LEAVES, TEMPLATE_SUB_BRANCHES};
pub use validate::validate_tree;
pub(crate) use validate::Visit;

//! Radial ("sunburst") layout core for the problem-solving board.
//!
//! The frontend hands over a node table (id -> label, description, children)
//! and gets back positions, edges and per-node style flags to render.

pub mod error;
pub mod layout;
pub mod output;
pub mod tree;
mod wasm;

pub use error::{LayoutError, MalformedTreeError};
pub use layout::{layout_tree, LayoutConfig, LayoutResult};
pub use output::{build_output, BoardOutput};
pub use tree::{NodeTable, TreeNode, ROOT_ID};
pub use wasm::{compute_layout, compute_layout_with_config, default_tree, update_description};

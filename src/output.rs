//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React frontend
//! for rendering the board.

use serde::Serialize;

use crate::error::LayoutError;
use crate::layout::{layout_tree, LayoutConfig, RectF, Sector};
use crate::tree::NodeTable;

/// A placed node ready for React to display
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: String,
    pub label: String,
    /// question / content / answer, whichever is set first
    pub display_text: String,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    pub sector: Sector,
    pub is_root: bool,
    pub is_answered: bool,
}

/// An edge between two nodes
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
}

/// Error information shown as a data-integrity problem
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// "malformed_tree", "invalid_config" or "json"
    pub kind: String,
    pub message: String,
}

impl From<&LayoutError> for ErrorInfo {
    fn from(e: &LayoutError) -> Self {
        Self {
            kind: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

/// The combined output sent to React
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RectF>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl BoardOutput {
    /// Error-only output; a malformed tree is never partially rendered.
    pub fn from_error(e: &LayoutError) -> Self {
        Self {
            error: Some(e.into()),
            ..Self::default()
        }
    }
}

/// Lay out `table` and flatten the result into pre-order node records.
pub fn build_output(table: &NodeTable, cfg: &LayoutConfig) -> Result<BoardOutput, LayoutError> {
    let layout = layout_tree(table, cfg)?;

    let nodes = layout
        .order
        .iter()
        .filter_map(|id| {
            let node = table.get(id)?;
            let pos = layout.positions.get(id)?;
            let style = layout.node_style.get(id)?;
            Some(NodeOutput {
                id: id.clone(),
                label: node.label.clone(),
                display_text: node.display_text().to_string(),
                x: pos.x,
                y: pos.y,
                depth: *layout.depths.get(id)?,
                sector: *layout.sectors.get(id)?,
                is_root: style.is_root,
                is_answered: style.is_answered,
            })
        })
        .collect();

    let edges = layout
        .edges
        .iter()
        .map(|e| EdgeOutput { from: e.from.clone(), to: e.to.clone() })
        .collect();

    Ok(BoardOutput {
        nodes,
        edges,
        bounds: Some(layout.bounds()),
        error: None,
    })
}

/// JSON in, JSON out. Errors become an `error` record, never a panic.
pub fn layout_json(tree_json: &str, cfg: &LayoutConfig) -> BoardOutput {
    let result = serde_json::from_str::<NodeTable>(tree_json)
        .map_err(LayoutError::from)
        .and_then(|table| build_output(&table, cfg));

    match result {
        Ok(output) => output,
        Err(e) => BoardOutput::from_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_build_output_template() {
        let table = NodeTable::default_template();
        let out = build_output(&table, &LayoutConfig::default()).unwrap();

        assert_eq!(out.nodes.len(), 105);
        assert_eq!(out.edges.len(), 104);
        assert_eq!(out.nodes[0].id, "root");
        assert!(out.nodes[0].is_root);
        assert_eq!(out.nodes[1].id, "b1");
        assert_eq!(out.nodes[1].depth, 1);
        assert!(out.error.is_none());
    }

    #[test]
    fn test_layout_json_roundtrip_shape() {
        let json = r#"{
            "root": { "label": "Goal", "children": ["a", "b"] },
            "a": { "label": "A", "description": "Some answer", "question": "Who?" },
            "b": { "label": "B" }
        }"#;
        let out = layout_json(json, &LayoutConfig::default());
        let v: Value = serde_json::to_value(&out).unwrap();

        assert!(v.get("error").is_none());
        assert_eq!(v["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(v["nodes"][1]["id"], "a");
        assert_eq!(v["nodes"][1]["display_text"], "Who?");
        assert_eq!(v["nodes"][1]["is_answered"], true);
        assert_eq!(v["nodes"][2]["is_answered"], false);
        assert_eq!(v["edges"][0]["from"], "root");
        assert_eq!(v["edges"][1]["to"], "b");
    }

    #[test]
    fn test_layout_json_malformed_tree() {
        let json = r#"{ "root": { "children": ["missing-id"] } }"#;
        let out = layout_json(json, &LayoutConfig::default());

        assert!(out.nodes.is_empty());
        assert!(out.edges.is_empty());
        let err = out.error.unwrap();
        assert_eq!(err.kind, "malformed_tree");
        assert!(err.message.contains("missing-id"));
    }

    #[test]
    fn test_layout_json_bad_json() {
        let out = layout_json("{ not json", &LayoutConfig::default());
        assert_eq!(out.error.unwrap().kind, "json");
    }
}

//! WASM bindings for the sunburst-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! They are plain Rust functions too; off wasm, diagnostics go to `tracing`.

use wasm_bindgen::prelude::*;

use crate::layout::LayoutConfig;
use crate::output::{layout_json, BoardOutput};
use crate::tree::NodeTable;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

fn report_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console_error(msg);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("{msg}");
}

fn to_json(output: &BoardOutput) -> String {
    if let Some(err) = &output.error {
        report_error(&format!("Layout failed ({}): {}", err.kind, err.message));
    }
    serde_json::to_string(output).unwrap_or_else(|e| {
        serde_json::json!({ "error": { "kind": "json", "message": e.to_string() } }).to_string()
    })
}

/// Lay out a node table (JSON object of id -> node) with the default rings.
#[wasm_bindgen]
pub fn compute_layout(tree_json: &str) -> String {
    to_json(&layout_json(tree_json, &LayoutConfig::default()))
}

/// Same as `compute_layout`, with `{ base_radius, radius_step }` overrides.
/// Missing fields keep their defaults; an unparsable config falls back to them.
#[wasm_bindgen]
pub fn compute_layout_with_config(tree_json: &str, config_json: &str) -> String {
    let cfg = match serde_json::from_str::<LayoutConfig>(config_json) {
        Ok(cfg) => cfg,
        Err(e) => {
            report_error(&format!("Error parsing layout config: {e}"));
            LayoutConfig::default()
        }
    };
    to_json(&layout_json(tree_json, &cfg))
}

/// Seed a new board from the default template.
#[wasm_bindgen]
pub fn default_tree() -> String {
    serde_json::to_string(&NodeTable::default_template()).unwrap_or_else(|_| "{}".to_string())
}

/// Set a node's description and return the updated table.
/// Returns the original input if parsing fails or the node is unknown.
#[wasm_bindgen]
pub fn update_description(tree_json: &str, node_id: &str, description: &str) -> String {
    let mut table = match serde_json::from_str::<NodeTable>(tree_json) {
        Ok(table) => table,
        Err(e) => {
            report_error(&format!("Error parsing tree: {e}"));
            return tree_json.to_string();
        }
    };

    if let Err(e) = table.set_description(node_id, description) {
        report_error(&e.to_string());
        return tree_json.to_string();
    }

    match serde_json::to_string(&table) {
        Ok(json) => json,
        Err(e) => {
            report_error(&format!("Error serializing tree: {e}"));
            tree_json.to_string()
        }
    }
}

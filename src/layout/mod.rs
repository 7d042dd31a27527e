// Sunburst layout for a question/answer tree.
//
// Goals:
// - Pure: no I/O, no shared state, same input gives bit-identical output
// - Fail fast: a malformed tree is an error, never a partial layout
// - Radial: depth picks the ring, leaf count picks the angular share
//
// Submodules:
// - leaf_count: memoized leaf counts (angular weights)
// - sector: proportional sector allocation
// - polar: ring radius + polar -> cartesian
// - style: per-node presentation flags
// - edges: (parent, child) list with edge-count check
// - radial_placement: work-list pass composing the above
//
// Output:
// - LayoutResult with positions, edges, styles, depths and sectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::LayoutError;
use crate::tree::{validate_tree, NodeTable, ROOT_ID};

mod edges;
mod leaf_count;
mod polar;
mod radial_placement;
mod sector;
mod style;

pub use edges::{build_edge_list, TreeEdge};
pub use leaf_count::LeafCounts;
pub use polar::{polar_to_cartesian, radius_for_depth, PointF};
pub use radial_placement::{place_radial, PlacedNode, Placement};
pub use sector::{allocate_sectors, Sector, FULL_CIRCLE};
pub use style::{classify, NodeStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the first ring (depth 1).
    pub base_radius: f64,
    /// Distance added per ring after the first.
    pub radius_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 300.0,
            radius_step: 350.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.base_radius.is_finite() && self.base_radius > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "base_radius must be finite and positive, got {}",
                self.base_radius
            )));
        }
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "radius_step must be finite and positive, got {}",
                self.radius_step
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// One entry per node, root at the origin.
    pub positions: HashMap<String, PointF>,
    /// Exactly nodes - 1 entries, pre-order.
    pub edges: Vec<TreeEdge>,
    pub node_style: HashMap<String, NodeStyle>,

    pub depths: HashMap<String, usize>,
    pub sectors: HashMap<String, Sector>,
    /// Pre-order node ids, for stable iteration.
    pub order: Vec<String>,
}

impl LayoutResult {
    /// Smallest rectangle containing every node position.
    pub fn bounds(&self) -> RectF {
        let mut it = self.positions.values();
        let Some(first) = it.next() else {
            return RectF { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };
        };

        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in it {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        RectF { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }

    pub fn radius_of(&self, id: &str) -> Option<f64> {
        self.positions.get(id).map(PointF::distance_from_origin)
    }
}

pub fn layout_tree(table: &NodeTable, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
    let _span = debug_span!("layout_tree", nodes = table.len()).entered();

    cfg.validate()?;
    validate_tree(table)?;

    let leaf_counts = LeafCounts::compute(table)?;
    let edges = build_edge_list(table)?;
    let placement = place_radial(table, &leaf_counts, cfg)?;

    let mut positions = HashMap::with_capacity(placement.nodes.len());
    let mut node_style = HashMap::with_capacity(placement.nodes.len());
    let mut depths = HashMap::with_capacity(placement.nodes.len());
    let mut sectors = HashMap::with_capacity(placement.nodes.len());

    for (id, placed) in placement.nodes {
        positions.insert(id.clone(), placed.position);
        node_style.insert(id.clone(), placed.style);
        depths.insert(id.clone(), placed.depth);
        sectors.insert(id, placed.sector);
    }

    debug!(
        nodes = positions.len(),
        edges = edges.len(),
        leaves = leaf_counts.get(ROOT_ID)?,
        "layout complete"
    );

    Ok(LayoutResult {
        positions,
        edges,
        node_style,
        depths,
        sectors,
        order: placement.order,
    })
}

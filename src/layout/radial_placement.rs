// Radial Tree Layout Algorithm ("Sunburst" Layout)
//
// Places every node of a validated tree:
// 1. Root sits at the origin and owns the full circle [0, 360)
// 2. Each node's sector is split among its children by leaf count
// 3. A node sits at the midpoint angle of its sector, on the ring for its depth
//
// Properties:
// - Deterministic (children processed in table order, no randomness)
// - Explicit work-list instead of recursion, so depth is bounded by heap only
// - Independent subtrees only depend on their own sector and leaf counts

use std::collections::HashMap;

use tracing::trace;

use super::leaf_count::LeafCounts;
use super::polar::{polar_to_cartesian, radius_for_depth, PointF};
use super::sector::{allocate_sectors, Sector};
use super::style::{classify, NodeStyle};
use super::LayoutConfig;
use crate::error::MalformedTreeError;
use crate::tree::{NodeTable, ROOT_ID};

/// Per-node output of the placement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub position: PointF,
    pub depth: usize,
    pub sector: Sector,
    pub style: NodeStyle,
}

/// Placement for all nodes, plus the pre-order in which they were placed.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    pub nodes: HashMap<String, PlacedNode>,
    pub order: Vec<String>,
}

/// Work item: a node with its assigned depth and sector.
struct Pending<'a> {
    id: &'a str,
    depth: usize,
    sector: Sector,
}

pub fn place_radial(
    table: &NodeTable,
    leaf_counts: &LeafCounts,
    cfg: &LayoutConfig,
) -> Result<Placement, MalformedTreeError> {
    let mut placement = Placement {
        nodes: HashMap::with_capacity(table.len()),
        order: Vec::with_capacity(table.len()),
    };

    let mut stack = vec![Pending { id: ROOT_ID, depth: 0, sector: Sector::FULL }];

    while let Some(Pending { id, depth, sector }) = stack.pop() {
        let node = table
            .get(id)
            .ok_or_else(|| MalformedTreeError::UnknownNode(id.to_string()))?;

        let position = if depth == 0 {
            PointF::ORIGIN
        } else {
            polar_to_cartesian(radius_for_depth(depth, cfg), sector.mid())
        };
        trace!(
            id,
            depth,
            start = sector.start,
            end = sector.end,
            x = position.x,
            y = position.y,
            "placed"
        );

        placement.nodes.insert(
            id.to_string(),
            PlacedNode { position, depth, sector, style: classify(id, node) },
        );
        placement.order.push(id.to_string());

        if node.is_leaf() {
            continue;
        }

        let weights = node
            .children
            .iter()
            .map(|c| leaf_counts.get(c))
            .collect::<Result<Vec<_>, _>>()?;
        let child_sectors = allocate_sectors(sector, leaf_counts.get(id)?, &weights);

        for (child, child_sector) in node.children.iter().zip(child_sectors).rev() {
            stack.push(Pending { id: child.as_str(), depth: depth + 1, sector: child_sector });
        }
    }

    Ok(placement)
}

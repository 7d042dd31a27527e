// Angular sector allocation.
//
// A parent's sector [start, end) is split among its children in order,
// each child getting a share proportional to its leaf count. Sectors are
// contiguous; the last child always closes exactly on the parent's end so
// rounding never leaves a visible gap.

use serde::Serialize;

/// Angles in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// Half-open angular interval `[start, end)`, in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
}

impl Sector {
    pub const FULL: Sector = Sector { start: 0.0, end: FULL_CIRCLE };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Placement angle for the node owning this sector.
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split `parent` among children with the given leaf-count weights.
///
/// `parent_weight` is the parent's own leaf count, which equals the sum of
/// `weights` for a well-formed tree. Returns one sector per weight, in order.
pub fn allocate_sectors(parent: Sector, parent_weight: usize, weights: &[usize]) -> Vec<Sector> {
    debug_assert!(parent.end > parent.start, "empty parent sector {parent:?}");
    debug_assert!(parent_weight > 0);

    let span = parent.span();
    let mut out = Vec::with_capacity(weights.len());
    let mut running = parent.start;

    for (i, &w) in weights.iter().enumerate() {
        let end = if i + 1 == weights.len() {
            parent.end
        } else {
            running + span * w as f64 / parent_weight as f64
        };
        out.push(Sector { start: running, end });
        running = end;
    }

    out
}

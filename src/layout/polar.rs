// Polar -> Cartesian placement.

use serde::Serialize;

use super::LayoutConfig;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const ORIGIN: PointF = PointF { x: 0.0, y: 0.0 };

    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Radius of a ring: 0 for root, then `base_radius`, growing by
/// `radius_step` per further level.
pub fn radius_for_depth(depth: usize, cfg: &LayoutConfig) -> f64 {
    if depth == 0 {
        0.0
    } else {
        cfg.base_radius + (depth - 1) as f64 * cfg.radius_step
    }
}

/// `angle_deg` is in degrees; 0 points along +x, growing toward +y.
pub fn polar_to_cartesian(radius: f64, angle_deg: f64) -> PointF {
    assert!(
        radius.is_finite() && angle_deg.is_finite(),
        "non-finite polar input: radius={radius}, angle={angle_deg}"
    );
    let theta = angle_deg.to_radians();
    PointF {
        x: radius * theta.cos(),
        y: radius * theta.sin(),
    }
}

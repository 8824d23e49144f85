//! Rectangle alignment helpers: edge translations, closest edge search and
//! clamping a rectangle inside a bounding rectangle.

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Edge or corner of a bounding rectangle that an item can be docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Edge {
    /// The four sides, in canonical enumeration order.
    pub const SIDES: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Sides followed by corners, in canonical enumeration order.
    pub const ALL: [Edge; 8] = [
        Edge::Top,
        Edge::Left,
        Edge::Bottom,
        Edge::Right,
        Edge::TopLeft,
        Edge::TopRight,
        Edge::BottomLeft,
        Edge::BottomRight,
    ];

    /// Check if this is a corner (moves along both axes).
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Edge::TopLeft | Edge::TopRight | Edge::BottomLeft | Edge::BottomRight
        )
    }
}

/// Candidate set searched when looking for the closest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSet {
    /// Top, left, bottom, right.
    Sides,
    /// The four sides plus the four corners.
    #[default]
    SidesAndCorners,
}

impl EdgeSet {
    /// Candidate edges in canonical order.
    pub fn edges(self) -> &'static [Edge] {
        match self {
            EdgeSet::Sides => &Edge::SIDES,
            EdgeSet::SidesAndCorners => &Edge::ALL,
        }
    }
}

/// Translation that moves `rect` so its `edge` coincides with the same edge of `bounding`.
///
/// Bottom and right use the far edge of `rect`, so the whole rectangle ends up
/// flush against the bounding edge. Corners combine the two single-axis moves.
pub fn translation(rect: Rect, bounding: Rect, edge: Edge) -> Vec2 {
    let left = bounding.x0 - rect.x0;
    let right = bounding.x1 - rect.x1;
    let top = bounding.y0 - rect.y0;
    let bottom = bounding.y1 - rect.y1;
    match edge {
        Edge::Top => Vec2::new(0.0, top),
        Edge::Left => Vec2::new(left, 0.0),
        Edge::Bottom => Vec2::new(0.0, bottom),
        Edge::Right => Vec2::new(right, 0.0),
        Edge::TopLeft => Vec2::new(left, top),
        Edge::TopRight => Vec2::new(right, top),
        Edge::BottomLeft => Vec2::new(left, bottom),
        Edge::BottomRight => Vec2::new(right, bottom),
    }
}

/// Move `rect` against `edge` of `bounding`. Size is preserved.
pub fn aligned(rect: Rect, bounding: Rect, edge: Edge) -> Rect {
    rect + translation(rect, bounding, edge)
}

/// Find the candidate edge reachable with the shortest translation.
///
/// Distances are compared by squared magnitude. Ties keep the first
/// candidate in `candidates` order. Returns `None` only for an empty slice.
pub fn closest_edge(rect: Rect, bounding: Rect, candidates: &[Edge]) -> Option<(Edge, Vec2)> {
    candidates
        .iter()
        .map(|&edge| (edge, translation(rect, bounding, edge)))
        .min_by(|a, b| {
            a.1.hypot2()
                .partial_cmp(&b.1.hypot2())
                .unwrap_or(Ordering::Equal)
        })
}

/// Translation of the closest edge, or zero when there is nothing to align to.
pub fn minimum_translation(rect: Rect, bounding: Rect, candidates: &[Edge]) -> Vec2 {
    closest_edge(rect, bounding, candidates)
        .map(|(_, t)| t)
        .unwrap_or(Vec2::ZERO)
}

/// Shift `rect` inside `bounding` on every axis where it fits.
///
/// Axes where `rect` is larger than `bounding` are left untouched.
pub fn clamp_inside(rect: Rect, bounding: Rect) -> Rect {
    let size = rect.size();
    let mut origin = rect.origin();
    if size.width <= bounding.width() {
        origin.x = clamp_axis(origin.x, size.width, bounding.x0, bounding.x1);
    }
    if size.height <= bounding.height() {
        origin.y = clamp_axis(origin.y, size.height, bounding.y0, bounding.y1);
    }
    Rect::from_origin_size(origin, size)
}

// `hi - extent` can round below `lo` for an exact fit; the low edge wins then.
fn clamp_axis(origin: f64, extent: f64, lo: f64, hi: f64) -> f64 {
    let max = (hi - extent).max(lo);
    origin.max(lo).min(max)
}

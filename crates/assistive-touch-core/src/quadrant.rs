//! Quadrant classification of a point relative to the center of a bounding rectangle.

use crate::geometry::Edge;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One of the four regions around the center of a bounding rectangle.
///
/// Screen rows grow downward, but the names follow the usual Cartesian layout:
///
/// ```text
///      II   |   I
///   --------O--------
///      III  |   IV
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}

impl Quadrant {
    /// Classify `point` against the center of `bounding`.
    ///
    /// Points on the vertical axis count as right (I/IV); points on the
    /// horizontal axis count as upper (I/II).
    pub fn of(point: Point, bounding: Rect) -> Self {
        let origin = bounding.center();
        let upper = point.y <= origin.y;
        if point.x >= origin.x {
            if upper { Quadrant::I } else { Quadrant::IV }
        } else if upper {
            Quadrant::II
        } else {
            Quadrant::III
        }
    }

    /// The horizontal and vertical side this quadrant faces.
    pub fn sides(self) -> (Edge, Edge) {
        match self {
            Quadrant::I => (Edge::Right, Edge::Top),
            Quadrant::II => (Edge::Left, Edge::Top),
            Quadrant::III => (Edge::Left, Edge::Bottom),
            Quadrant::IV => (Edge::Right, Edge::Bottom),
        }
    }
}

/// Shorthand for [`Quadrant::of`].
pub fn quadrant(point: Point, bounding: Rect) -> Quadrant {
    Quadrant::of(point, bounding)
}

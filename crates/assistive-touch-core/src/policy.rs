//! Strategies for docking an item to the bounding rectangle after a drag.

use crate::geometry::{Edge, EdgeSet, aligned, clamp_inside, closest_edge};
use crate::quadrant::Quadrant;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// How a released item is docked against the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Clamp inside the bounds first, then move by the shortest translation
    /// to any edge in `edges`.
    ClampThenAlign {
        #[serde(default)]
        edges: EdgeSet,
    },
    /// Use the quadrant of the item's center to choose between the two sides
    /// it faces, align to that side, then clamp inside the bounds. A tie
    /// goes to the top or bottom side.
    #[default]
    AlignThenClamp8,
}

/// Outcome of docking a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Docking {
    /// The docked rectangle.
    pub frame: Rect,
    /// The edge or corner it was aligned to, if any candidate existed.
    pub edge: Option<Edge>,
}

impl AlignmentPolicy {
    /// Dock `rect` to `bounding`.
    pub fn dock(self, rect: Rect, bounding: Rect) -> Docking {
        match self {
            AlignmentPolicy::ClampThenAlign { edges } => {
                let clamped = clamp_inside(rect, bounding);
                match closest_edge(clamped, bounding, edges.edges()) {
                    Some((edge, t)) => Docking {
                        frame: clamped + t,
                        edge: Some(edge),
                    },
                    None => Docking {
                        frame: clamped,
                        edge: None,
                    },
                }
            }
            AlignmentPolicy::AlignThenClamp8 => {
                let edge = facing_edge(rect.center(), bounding);
                Docking {
                    frame: clamp_inside(aligned(rect, bounding, edge), bounding),
                    edge: Some(edge),
                }
            }
        }
    }
}

/// The side that `center` is closest to among the two its quadrant faces.
/// Distances are measured from the center. The left or right side must be
/// strictly nearer to win.
fn facing_edge(center: Point, bounding: Rect) -> Edge {
    let (horizontal, vertical) = Quadrant::of(center, bounding).sides();
    let dx = side_distance(center, bounding, horizontal);
    let dy = side_distance(center, bounding, vertical);
    if dx < dy { horizontal } else { vertical }
}

fn side_distance(center: Point, bounding: Rect, side: Edge) -> f64 {
    match side {
        Edge::Top => (bounding.y0 - center.y).abs(),
        Edge::Bottom => (bounding.y1 - center.y).abs(),
        Edge::Left => (bounding.x0 - center.x).abs(),
        Edge::Right => (bounding.x1 - center.x).abs(),
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn bounding() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 400.0)
    }

    fn item(x: f64, y: f64) -> Rect {
        Rect::from_origin_size(Point::new(x, y), Size::new(60.0, 60.0))
    }

    fn touches_an_edge(rect: Rect, bounding: Rect) -> bool {
        rect.x0 == bounding.x0 || rect.x1 == bounding.x1 || rect.y0 == bounding.y0 || rect.y1 == bounding.y1
    }

    fn inside(rect: Rect, bounding: Rect) -> bool {
        rect.x0 >= bounding.x0 && rect.x1 <= bounding.x1 && rect.y0 >= bounding.y0 && rect.y1 <= bounding.y1
    }

    #[test]
    fn test_align_then_clamp_left_lower() {
        // Center (130, 210) is in quadrant III: left is 130 away, bottom 190.
        let docking = AlignmentPolicy::AlignThenClamp8.dock(item(100.0, 180.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Left));
        assert_eq!(docking.frame, item(0.0, 180.0));
    }

    #[test]
    fn test_align_then_clamp_each_quadrant() {
        let policy = AlignmentPolicy::AlignThenClamp8;
        // I: near the top.
        assert_eq!(policy.dock(item(160.0, 20.0), bounding()).edge, Some(Edge::Top));
        // II: near the left.
        assert_eq!(policy.dock(item(10.0, 100.0), bounding()).edge, Some(Edge::Left));
        // IV: near the bottom.
        let docking = policy.dock(item(150.0, 330.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Bottom));
        assert_eq!(docking.frame, item(150.0, 340.0));
        // IV: near the right.
        assert_eq!(policy.dock(item(230.0, 220.0), bounding()).edge, Some(Edge::Right));
    }

    #[test]
    fn test_align_then_clamp_tie_goes_to_vertical_side() {
        // Center (50, 50) is 50 from both the left and the top.
        let docking = AlignmentPolicy::AlignThenClamp8.dock(item(20.0, 20.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Top));
        assert_eq!(docking.frame, item(20.0, 0.0));
    }

    #[test]
    fn test_align_then_clamp_moves_one_axis() {
        // Center (250, 50) in quadrant I: right and top are both 50 away.
        let docking = AlignmentPolicy::AlignThenClamp8.dock(item(220.0, 20.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Top));
        assert_eq!(docking.frame, Rect::new(220.0, 0.0, 280.0, 60.0));
    }

    #[test]
    fn test_align_then_clamp_pulls_back_inside() {
        // Dragged past the bottom-right; both sides are 20 away, so it docks to
        // the bottom and the clamp pulls x back in.
        let docking = AlignmentPolicy::AlignThenClamp8.dock(item(250.0, 390.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Bottom));
        assert_eq!(docking.frame, Rect::new(240.0, 340.0, 300.0, 400.0));
        assert!(inside(docking.frame, bounding()));
        assert!(touches_an_edge(docking.frame, bounding()));
    }

    #[test]
    fn test_clamp_then_align() {
        let policy = AlignmentPolicy::ClampThenAlign {
            edges: EdgeSet::SidesAndCorners,
        };
        let docking = policy.dock(item(100.0, 180.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Left));
        assert_eq!(docking.frame, item(0.0, 180.0));

        // Off the top edge: clamped to y = 0 first, which already touches top.
        let docking = policy.dock(item(120.0, -30.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Top));
        assert_eq!(docking.frame, item(120.0, 0.0));
    }

    #[test]
    fn test_clamp_then_align_sides_only() {
        let policy = AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides };
        let docking = policy.dock(item(280.0, 150.0), bounding());
        assert_eq!(docking.edge, Some(Edge::Right));
        assert_eq!(docking.frame, item(240.0, 150.0));
    }

    #[test]
    fn test_docking_is_idempotent() {
        let policies = [
            AlignmentPolicy::AlignThenClamp8,
            AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides },
            AlignmentPolicy::ClampThenAlign {
                edges: EdgeSet::SidesAndCorners,
            },
        ];
        let starts = [
            item(100.0, 180.0),
            item(20.0, 20.0),
            item(250.0, 390.0),
            item(-40.0, 100.0),
            item(200.0, 10.0),
        ];
        for policy in policies {
            for start in starts {
                let once = policy.dock(start, bounding()).frame;
                let twice = policy.dock(once, bounding()).frame;
                assert_eq!(once, twice, "{policy:?} from {start:?}");
                assert!(inside(once, bounding()));
                assert!(touches_an_edge(once, bounding()));
            }
        }
    }

    #[test]
    fn test_item_larger_than_bounds() {
        let bounding = Rect::new(0.0, 0.0, 40.0, 400.0);
        let wide = item(-30.0, 100.0);
        for policy in [
            AlignmentPolicy::AlignThenClamp8,
            AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides },
        ] {
            let frame = policy.dock(wide, bounding).frame;
            assert_eq!(frame.size(), wide.size());
            assert!(frame.y0 >= 0.0 && frame.y1 <= 400.0);
        }
    }

    #[test]
    fn test_exact_fit_snaps_to_bounds() {
        let exact = Rect::from_origin_size(Point::new(30.0, -15.0), bounding().size());
        for policy in [
            AlignmentPolicy::AlignThenClamp8,
            AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides },
            AlignmentPolicy::ClampThenAlign {
                edges: EdgeSet::SidesAndCorners,
            },
        ] {
            assert_eq!(policy.dock(exact, bounding()).frame, bounding(), "{policy:?}");
        }
    }

    #[test]
    fn test_exact_fit_fractional_bounds() {
        let bounding = Rect::new(0.3, 0.1, 2.3999999999999995, 3.0000000000000004);
        let exact = Rect::from_origin_size(Point::new(1.3, 2.0), bounding.size());
        for policy in [
            AlignmentPolicy::AlignThenClamp8,
            AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides },
            AlignmentPolicy::ClampThenAlign {
                edges: EdgeSet::SidesAndCorners,
            },
        ] {
            let frame = policy.dock(exact, bounding).frame;
            assert!((frame.width() - exact.width()).abs() < 1e-9, "{policy:?}");
            assert!((frame.height() - exact.height()).abs() < 1e-9, "{policy:?}");
            assert!((frame.x0 - bounding.x0).abs() < 1e-9, "{policy:?}");
            assert!((frame.y0 - bounding.y0).abs() < 1e-9, "{policy:?}");
        }
    }

    #[test]
    fn test_policy_config_names() {
        let policy: AlignmentPolicy = serde_json::from_str(r#""align_then_clamp8""#).unwrap();
        assert_eq!(policy, AlignmentPolicy::AlignThenClamp8);

        let policy: AlignmentPolicy =
            serde_json::from_str(r#"{"clamp_then_align":{"edges":"sides"}}"#).unwrap();
        assert_eq!(policy, AlignmentPolicy::ClampThenAlign { edges: EdgeSet::Sides });

        let policy: AlignmentPolicy = serde_json::from_str(r#"{"clamp_then_align":{}}"#).unwrap();
        assert_eq!(
            policy,
            AlignmentPolicy::ClampThenAlign {
                edges: EdgeSet::SidesAndCorners
            }
        );
    }
}

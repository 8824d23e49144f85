//! Touch samples and the touch handling contract.

use crate::error::{TouchError, TouchResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A touch sample: an identifier plus the point it was seen at.
///
/// Two samples are equal only when both the identifier and the point match,
/// so a set can hold several samples of the same contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Touch {
    pub identifier: String,
    pub point: Point,
}

/// A set of touch samples dispatched together.
pub type Touches = HashSet<Touch>;

impl Touch {
    /// Create a new touch sample.
    pub fn new(identifier: impl Into<String>, point: Point) -> Self {
        Self {
            identifier: identifier.into(),
            point,
        }
    }
}

// Compare coordinates by bit pattern with -0.0 folded into 0.0, so that
// Eq and Hash agree.
fn coord_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl PartialEq for Touch {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && coord_bits(self.point.x) == coord_bits(other.point.x)
            && coord_bits(self.point.y) == coord_bits(other.point.y)
    }
}

impl Eq for Touch {}

impl Hash for Touch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        coord_bits(self.point.x).hash(state);
        coord_bits(self.point.y).hash(state);
    }
}

/// Pick the sample that drives the gesture.
pub(crate) fn primary(touches: &Touches) -> TouchResult<&Touch> {
    touches.iter().next().ok_or(TouchError::EmptyTouches)
}

/// Phase of a touch sample within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Began,
    Moved,
    Cancelled,
    Ended,
}

/// Receiver of a begin → moved* → cancelled|ended touch sequence.
pub trait TouchHandling {
    fn touches_began(&mut self, touches: &Touches) -> TouchResult<()>;
    fn touches_moved(&mut self, touches: &Touches) -> TouchResult<()>;
    fn touches_cancelled(&mut self, touches: &Touches) -> TouchResult<()>;
    fn touches_ended(&mut self, touches: &Touches) -> TouchResult<()>;

    /// Dispatch to the handler for `phase`.
    fn handle(&mut self, phase: TouchPhase, touches: &Touches) -> TouchResult<()> {
        match phase {
            TouchPhase::Began => self.touches_began(touches),
            TouchPhase::Moved => self.touches_moved(touches),
            TouchPhase::Cancelled => self.touches_cancelled(touches),
            TouchPhase::Ended => self.touches_ended(touches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_identifier_and_point() {
        let a = Touch::new("a", Point::new(10.0, 10.0));
        assert_eq!(a, Touch::new("a", Point::new(10.0, 10.0)));
        assert_ne!(a, Touch::new("a", Point::new(10.0, 11.0)));
        assert_ne!(a, Touch::new("b", Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_set_deduplicates_identical_samples_only() {
        let mut touches = Touches::new();
        touches.insert(Touch::new("a", Point::new(1.0, 2.0)));
        touches.insert(Touch::new("a", Point::new(1.0, 2.0)));
        assert_eq!(touches.len(), 1);

        touches.insert(Touch::new("a", Point::new(3.0, 4.0)));
        assert_eq!(touches.len(), 2);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let mut touches = Touches::new();
        touches.insert(Touch::new("a", Point::new(0.0, 0.0)));
        touches.insert(Touch::new("a", Point::new(-0.0, -0.0)));
        assert_eq!(touches.len(), 1);
    }

    #[test]
    fn test_primary_of_empty_set() {
        assert_eq!(primary(&Touches::new()).unwrap_err(), TouchError::EmptyTouches);

        let touches = Touches::from([Touch::new("pan", Point::new(5.0, 6.0))]);
        assert_eq!(primary(&touches).unwrap().point, Point::new(5.0, 6.0));
    }
}

//! Keeping the docked item clear of an on-screen keyboard.

use kurbo::{Point, Rect};

/// Remembers where the item was before the keyboard pushed it up.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAvoidance {
    /// Gap kept between the item and the top of the keyboard.
    pub margin: f64,
    last_position: Option<Point>,
}

impl KeyboardAvoidance {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            last_position: None,
        }
    }

    /// Center to move the item to when the keyboard will cover it.
    ///
    /// Returns `None` when the keyboard leaves the item uncovered.
    pub fn keyboard_will_show(&mut self, item_frame: Rect, keyboard_frame: Rect) -> Option<Point> {
        let overlap = item_frame.y1 - keyboard_frame.y0;
        if overlap <= 0.0 {
            return None;
        }
        let center = item_frame.center();
        self.last_position = Some(center);
        let lifted = Point::new(center.x, center.y - self.margin - overlap);
        log::debug!("Keyboard overlaps item by {}; lifting to {:?}", overlap, lifted);
        Some(lifted)
    }

    /// Center to restore once the keyboard hides, if the item was lifted.
    pub fn keyboard_will_hide(&mut self) -> Option<Point> {
        self.last_position.take()
    }

    /// Center remembered from the last lift.
    pub fn last_position(&self) -> Option<Point> {
        self.last_position
    }
}

//! Layout attributes for the floating item.

use crate::error::{LayoutError, LayoutResult};
use crate::policy::AlignmentPolicy;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Default inset between the item and the safe area, in points.
pub const DEFAULT_MARGIN: f64 = 20.0;
/// Default docking animation duration, in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;
/// Default item edge length, in points.
pub const DEFAULT_ITEM_SIDE: f64 = 60.0;

/// Insets of the area obscured by system chrome (notches, status bars...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl SafeAreaInsets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Shrink `rect` by these insets.
    pub fn inset(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 - self.right,
            rect.y1 - self.bottom,
        )
    }
}

/// Geometry and behavior settings for the floating item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Distance kept between the docked item and the safe area.
    pub margin: f64,
    /// Docking animation duration in seconds. Not used by the core; carried for callers.
    pub animation_duration: f64,
    /// Size of the collapsed item.
    pub item_size: Size,
    pub safe_area: SafeAreaInsets,
    /// Docking strategy applied when a drag is released.
    pub policy: AlignmentPolicy,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            item_size: Size::new(DEFAULT_ITEM_SIDE, DEFAULT_ITEM_SIDE),
            safe_area: SafeAreaInsets::default(),
            policy: AlignmentPolicy::default(),
        }
    }
}

impl Layout {
    /// Create a layout with default settings and the given safe area.
    pub fn new(safe_area: SafeAreaInsets) -> Self {
        Self {
            safe_area,
            ..Self::default()
        }
    }

    /// Parse and validate a layout from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject settings that cannot describe a real layout.
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(LayoutError::Invalid(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(LayoutError::Invalid(format!(
                "animation_duration must be a non-negative number, got {}",
                self.animation_duration
            )));
        }
        let Size { width, height } = self.item_size;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(LayoutError::Invalid(format!(
                "item_size must be non-negative, got {}x{}",
                width, height
            )));
        }
        Ok(())
    }

    /// Region the item docks inside: `screen` minus the safe area, minus the margin.
    pub fn bounding(&self, screen: Rect) -> Rect {
        SafeAreaInsets::uniform(self.margin).inset(self.safe_area.inset(screen))
    }

    /// Center of the item before any drag: at the right margin, vertically centered.
    pub fn initial_position(&self, screen: Rect) -> Point {
        Point::new(
            screen.width() - self.item_size.width / 2.0 - self.margin,
            screen.center().y,
        )
    }

    /// Frame of the item before any drag.
    pub fn initial_frame(&self, screen: Rect) -> Rect {
        Rect::from_center_size(self.initial_position(screen), self.item_size)
    }
}

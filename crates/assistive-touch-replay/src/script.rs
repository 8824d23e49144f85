//! Gesture script format.
//!
//! ```json
//! {
//!   "screen": { "x0": 0, "y0": 0, "x1": 390, "y1": 844 },
//!   "layout": { "margin": 20 },
//!   "events": [
//!     { "type": "touch", "phase": "began", "id": "pan", "x": 340, "y": 422 },
//!     { "type": "touch", "phase": "ended", "id": "pan", "x": 120, "y": 300 },
//!     { "type": "keyboard_show", "frame": { "x0": 0, "y0": 500, "x1": 390, "y1": 844 } },
//!     { "type": "keyboard_hide" },
//!     { "type": "resize", "width": 300, "height": 400 }
//!   ]
//! }
//! ```

use crate::error::ReplayResult;
use assistive_touch_core::{Layout, Touch, TouchPhase, Touches};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One input event in a gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// A single touch sample.
    Touch {
        phase: TouchPhase,
        id: String,
        x: f64,
        y: f64,
    },
    /// The keyboard will appear with the given frame.
    KeyboardShow { frame: Rect },
    /// The keyboard will disappear.
    KeyboardHide,
    /// Content of the given size is presented in place of the item.
    Resize { width: f64, height: f64 },
}

impl ScriptEvent {
    /// Touch set for a touch event.
    pub fn touches(&self) -> Option<Touches> {
        match self {
            ScriptEvent::Touch { id, x, y, .. } => {
                Some(Touches::from([Touch::new(id.as_str(), Point::new(*x, *y))]))
            }
            _ => None,
        }
    }
}

/// A recorded session: screen, layout and the events to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Full screen rectangle.
    pub screen: Rect,
    #[serde(default)]
    pub layout: Layout,
    /// Initial item frame. Defaults to the layout's initial frame.
    #[serde(default)]
    pub item: Option<Rect>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a script and validate its layout.
    pub fn from_json(json: &str) -> ReplayResult<Self> {
        let script: Script = serde_json::from_str(json)?;
        script.layout.validate()?;
        Ok(script)
    }

    /// Read a script from a file.
    pub fn load(path: impl AsRef<Path>) -> ReplayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Initial item frame.
    pub fn initial_frame(&self) -> Rect {
        self.item
            .unwrap_or_else(|| self.layout.initial_frame(self.screen))
    }
}

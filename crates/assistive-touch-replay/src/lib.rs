//! Assistive Touch Replay
//!
//! Drives the assistive touch core from a recorded gesture script, standing in
//! for the view layer: it owns the item frame between drags, creates one
//! manipulator per drag and records every frame the core reports.

mod driver;
mod error;
mod script;

pub use driver::{FrameRecord, Replay, ReplayDriver, replay};
pub use error::{ReplayError, ReplayResult};
pub use script::{Script, ScriptEvent};

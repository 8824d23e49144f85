//! Assistive Touch Core Library
//!
//! Geometry for a draggable floating item that docks to the nearest edge of a
//! bounding region after every drag. Nothing here renders or owns a surface:
//! callers feed touch samples in and apply the frames that come out.

pub mod avoidance;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod manipulator;
pub mod policy;
pub mod quadrant;
pub mod touch;

pub use avoidance::KeyboardAvoidance;
pub use error::{LayoutError, LayoutResult, TouchError, TouchResult};
pub use geometry::{Edge, EdgeSet, aligned, clamp_inside, closest_edge, minimum_translation, translation};
pub use layout::{Layout, SafeAreaInsets};
pub use manipulator::{Manipulator, SubscriptionId};
pub use policy::{AlignmentPolicy, Docking};
pub use quadrant::{Quadrant, quadrant};
pub use touch::{Touch, TouchHandling, TouchPhase, Touches};

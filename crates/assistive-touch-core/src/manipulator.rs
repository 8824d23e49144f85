//! Drag session controller for the floating item.
//!
//! A [`Manipulator`] is created when a drag gesture begins and dropped when it
//! ends. It follows the touch stream by relative deltas, so the offset between
//! the finger and the item's center stays constant, and docks the item with
//! its [`AlignmentPolicy`] when the gesture is released or cancelled.
//!
//! Every assignment of the item frame is pushed synchronously to all
//! subscribed observers; that is the only way position updates leave the
//! manipulator.

use crate::error::{TouchError, TouchResult};
use crate::policy::AlignmentPolicy;
use crate::touch::{TouchHandling, Touches, primary};
use kurbo::{Point, Rect, Size, Vec2};
use std::fmt;

/// Handle returned by [`Manipulator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Rect)>;

/// Moves an item rectangle within a bounding rectangle in response to touches.
pub struct Manipulator {
    /// Current item frame.
    item_frame: Rect,
    /// Region the item is docked inside. Fixed for the session.
    bounding: Rect,
    /// Docking strategy used on release.
    policy: AlignmentPolicy,
    /// Last touch point seen, set by `touches_began`.
    previous_point: Option<Point>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Manipulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manipulator")
            .field("item_frame", &self.item_frame)
            .field("bounding", &self.bounding)
            .field("policy", &self.policy)
            .field("previous_point", &self.previous_point)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Manipulator {
    /// Create a manipulator for one drag session.
    pub fn new(item_frame: Rect, bounding: Rect, policy: AlignmentPolicy) -> Self {
        Self {
            item_frame,
            bounding,
            policy,
            previous_point: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current item frame.
    pub fn item_frame(&self) -> Rect {
        self.item_frame
    }

    /// Bounding rectangle for this session.
    pub fn bounding(&self) -> Rect {
        self.bounding
    }

    /// Policy used to dock the item when a drag ends or is cancelled.
    pub fn policy(&self) -> AlignmentPolicy {
        self.policy
    }

    /// Whether a drag has begun and not yet ended or been cancelled.
    pub fn is_dragging(&self) -> bool {
        self.previous_point.is_some()
    }

    /// Register an observer called with the new frame on every assignment.
    pub fn subscribe(&mut self, observer: impl FnMut(Rect) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Assign the item frame and notify observers, in registration order.
    pub fn set_item_frame(&mut self, frame: Rect) {
        self.item_frame = frame;
        log::debug!("Item frame changed: {:?}", frame);
        for (_, observer) in &mut self.observers {
            observer(frame);
        }
    }

    /// Dock the item against the bounding rectangle using the session's policy.
    pub fn settle(&mut self) {
        let docking = self.policy.dock(self.item_frame, self.bounding);
        log::info!(
            "Docked to {:?} with {:?}: {:?}",
            docking.edge,
            self.policy,
            docking.frame
        );
        self.set_item_frame(docking.frame);
    }

    /// Resize the item to `size` centered on `center`, then dock it.
    pub fn fit_content(&mut self, size: Size, center: Point) {
        self.set_item_frame(Rect::from_center_size(center, size));
        self.settle();
    }

    fn center(&self) -> Point {
        self.item_frame.center()
    }

    fn set_center(&mut self, center: Point) {
        let frame = Rect::from_center_size(center, self.item_frame.size());
        self.set_item_frame(frame);
    }

    /// Translate the item by the delta between the incoming touch and the previous one.
    fn follow(&mut self, touches: &Touches) -> TouchResult<()> {
        let point = primary(touches)?.point;
        let previous = self.previous_point.ok_or(TouchError::NotBegan)?;
        let delta: Vec2 = point - previous;
        log::trace!("Drag delta {:?}", delta);
        self.set_center(self.center() + delta);
        self.previous_point = Some(point);
        Ok(())
    }

    fn release(&mut self, touches: &Touches) -> TouchResult<()> {
        self.follow(touches)?;
        self.settle();
        self.previous_point = None;
        Ok(())
    }
}

fn reported<T>(phase: &str, result: TouchResult<T>) -> TouchResult<T> {
    if let Err(err) = &result {
        log::error!("Invalid touch sequence in {}: {}", phase, err);
    }
    result
}

impl TouchHandling for Manipulator {
    fn touches_began(&mut self, touches: &Touches) -> TouchResult<()> {
        let result = primary(touches).map(|touch| touch.point);
        let point = reported("touches_began", result)?;
        self.previous_point = Some(point);
        Ok(())
    }

    fn touches_moved(&mut self, touches: &Touches) -> TouchResult<()> {
        let result = self.follow(touches);
        reported("touches_moved", result)
    }

    fn touches_cancelled(&mut self, touches: &Touches) -> TouchResult<()> {
        let result = self.release(touches);
        reported("touches_cancelled", result)
    }

    fn touches_ended(&mut self, touches: &Touches) -> TouchResult<()> {
        let result = self.release(touches);
        reported("touches_ended", result)
    }
}

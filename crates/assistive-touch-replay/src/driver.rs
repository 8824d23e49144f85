//! Replays script events against the core, the way a view controller would.

use crate::error::{ReplayError, ReplayResult};
use crate::script::{Script, ScriptEvent};
use assistive_touch_core::{KeyboardAvoidance, Layout, Manipulator, TouchHandling, TouchPhase, Touches};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// A frame as printed by the replay binary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for FrameRecord {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Result of replaying a script.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Region the item was docked inside.
    pub bounding: Rect,
    /// Every frame reported, in order.
    pub frames: Vec<Rect>,
    /// Item frame after the last event.
    pub final_frame: Rect,
}

/// Owns the item frame between drags and a manipulator during one.
#[derive(Debug)]
pub struct ReplayDriver {
    layout: Layout,
    bounding: Rect,
    frame: Rect,
    session: Option<Manipulator>,
    avoidance: KeyboardAvoidance,
    frames: Rc<RefCell<Vec<Rect>>>,
}

impl ReplayDriver {
    /// Create a driver for `layout` on `screen`, with the item at `frame`.
    pub fn new(layout: Layout, screen: Rect, frame: Rect) -> Self {
        let bounding = layout.bounding(screen);
        let avoidance = KeyboardAvoidance::new(layout.margin);
        Self {
            layout,
            bounding,
            frame,
            session: None,
            avoidance,
            frames: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn bounding(&self) -> Rect {
        self.bounding
    }

    /// Current item frame, including an in-flight drag.
    pub fn frame(&self) -> Rect {
        self.session
            .as_ref()
            .map(Manipulator::item_frame)
            .unwrap_or(self.frame)
    }

    /// Frames reported so far.
    pub fn frames(&self) -> Vec<Rect> {
        self.frames.borrow().clone()
    }

    fn manipulator(&self, frame: Rect) -> Manipulator {
        let mut manipulator = Manipulator::new(frame, self.bounding, self.layout.policy);
        let sink = self.frames.clone();
        manipulator.subscribe(move |frame| sink.borrow_mut().push(frame));
        manipulator
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
        self.frames.borrow_mut().push(frame);
    }

    /// Apply one script event. `index` is only used for error reporting.
    pub fn handle(&mut self, index: usize, event: &ScriptEvent) -> ReplayResult<()> {
        match event {
            ScriptEvent::Touch { phase, .. } => {
                let touches = event.touches().unwrap_or_default();
                self.handle_touches(*phase, &touches)
                    .map_err(|source| ReplayError::Touch { index, source })
            }
            ScriptEvent::KeyboardShow { frame } => {
                if let Some(center) = self.avoidance.keyboard_will_show(self.frame(), *frame) {
                    self.place(Rect::from_center_size(center, self.frame.size()));
                }
                Ok(())
            }
            ScriptEvent::KeyboardHide => {
                if let Some(center) = self.avoidance.keyboard_will_hide() {
                    self.place(Rect::from_center_size(center, self.frame.size()));
                }
                Ok(())
            }
            ScriptEvent::Resize { width, height } => {
                let center = self.frame().center();
                let mut manipulator = self.manipulator(self.frame());
                manipulator.fit_content(Size::new(*width, *height), center);
                self.frame = manipulator.item_frame();
                Ok(())
            }
        }
    }

    fn handle_touches(
        &mut self,
        phase: TouchPhase,
        touches: &Touches,
    ) -> assistive_touch_core::TouchResult<()> {
        if phase == TouchPhase::Began {
            if let Some(mut abandoned) = self.session.take() {
                log::warn!("Drag began while another was in progress; docking the old one");
                abandoned.settle();
                self.frame = abandoned.item_frame();
            }
            let mut manipulator = self.manipulator(self.frame());
            manipulator.touches_began(touches)?;
            self.session = Some(manipulator);
            return Ok(());
        }

        // Outside a drag there is nothing to forward to; a detached
        // manipulator reports the sequence error.
        let mut manipulator = match self.session.take() {
            Some(manipulator) => manipulator,
            None => self.manipulator(self.frame),
        };
        let result = manipulator.handle(phase, touches);
        if manipulator.is_dragging() {
            self.session = Some(manipulator);
        } else if result.is_ok() {
            self.frame = manipulator.item_frame();
        }
        result
    }
}

/// Replay every event of `script`, stopping at the first error.
pub fn replay(script: &Script) -> ReplayResult<Replay> {
    let mut driver = ReplayDriver::new(script.layout.clone(), script.screen, script.initial_frame());
    for (index, event) in script.events.iter().enumerate() {
        driver.handle(index, event)?;
    }
    log::info!(
        "Replayed {} events, {} frames",
        script.events.len(),
        driver.frames.borrow().len()
    );
    Ok(Replay {
        bounding: driver.bounding(),
        frames: driver.frames(),
        final_frame: driver.frame(),
    })
}

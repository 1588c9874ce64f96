use super::bridge::ClickThroughBridge;
use super::debounce::ModeSwitch;
use super::sampler::{is_over_content, HitTester, Point};
use crate::shell::NativeShell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerLifecycle {
    /// No pointer listener; samples are ignored.
    Unarmed,
    Armed,
}

/// Keeps the window's click-through flag in line with what is under the cursor.
///
/// Each overlay window owns one controller. Pointer samples are only acted on
/// while armed, and only when the over-content verdict changes.
pub struct ClickThroughController<H, S> {
    hit_tester: H,
    switch: ModeSwitch<S>,
    lifecycle: ControllerLifecycle,
    last_over_content: bool,
}

impl<H, S> ClickThroughController<H, S>
where
    H: HitTester,
    S: NativeShell + 'static,
{
    pub fn new(hit_tester: H, bridge: Rc<ClickThroughBridge<S>>, debounce: Duration) -> Self {
        Self {
            hit_tester,
            switch: ModeSwitch::new(bridge, debounce),
            lifecycle: ControllerLifecycle::Unarmed,
            last_over_content: false,
        }
    }

    pub fn lifecycle(&self) -> ControllerLifecycle {
        self.lifecycle
    }

    pub fn bridge(&self) -> &Rc<ClickThroughBridge<S>> {
        self.switch.bridge()
    }

    pub fn hit_tester(&self) -> &H {
        &self.hit_tester
    }

    pub fn has_pending_switch(&self) -> bool {
        self.switch.has_pending()
    }

    /// Arm the controller and start the window in pass-through mode.
    pub fn mount(&mut self) {
        if self.lifecycle == ControllerLifecycle::Armed {
            return;
        }
        self.lifecycle = ControllerLifecycle::Armed;
        self.last_over_content = false;
        tracing::debug!(delay = ?self.switch.delay(), "click-through controller armed");
        self.switch.request_mode(true);
    }

    /// Feed one pointer-move sample.
    ///
    /// Returns the pass-through value requested from the switch, or `None` when
    /// the verdict did not change or the controller is unarmed.
    pub fn handle_pointer_move(&mut self, point: Point) -> Option<bool> {
        if self.lifecycle != ControllerLifecycle::Armed {
            return None;
        }
        let over_content = is_over_content(&self.hit_tester, point);
        if over_content == self.last_over_content {
            return None;
        }
        self.last_over_content = over_content;
        let pass_through = !over_content;
        tracing::trace!(x = point.x, y = point.y, pass_through, "pointer intent changed");
        self.switch.request_mode(pass_through);
        Some(pass_through)
    }

    /// Disarm and drop any pending switch. No final native call is made.
    ///
    /// Dropping the controller has the same effect on a pending switch.
    pub fn unmount(&mut self) {
        if self.lifecycle == ControllerLifecycle::Unarmed {
            return;
        }
        self.switch.cancel();
        self.lifecycle = ControllerLifecycle::Unarmed;
        tracing::debug!("click-through controller disarmed");
    }
}


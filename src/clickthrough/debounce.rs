use super::bridge::ClickThroughBridge;
use crate::shell::NativeShell;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);

struct PendingTimer {
    id: u64,
    handle: JoinHandle<()>,
}

/// Coalesces bursts of pass-through intents into one settled bridge call.
///
/// At most one timer is alive. Every request replaces the pending timer, so the
/// value that fires is always the last one requested inside the window. Timers
/// are local tasks: callers must be running inside a `tokio::task::LocalSet`.
pub struct ModeSwitch<S> {
    bridge: Rc<ClickThroughBridge<S>>,
    delay: Duration,
    pending: Rc<RefCell<Option<PendingTimer>>>,
    next_id: Cell<u64>,
}

impl<S: NativeShell + 'static> ModeSwitch<S> {
    pub fn new(bridge: Rc<ClickThroughBridge<S>>, delay: Duration) -> Self {
        Self {
            bridge,
            delay,
            pending: Rc::new(RefCell::new(None)),
            next_id: Cell::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn bridge(&self) -> &Rc<ClickThroughBridge<S>> {
        &self.bridge
    }

    pub fn request_mode(&self, pass_through: bool) {
        self.cancel();

        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);

        let pending = Rc::clone(&self.pending);
        let bridge = Rc::clone(&self.bridge);
        let delay = self.delay;
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            {
                let mut slot = pending.borrow_mut();
                if slot.as_ref().is_some_and(|timer| timer.id == id) {
                    slot.take();
                }
            }
            // The call runs detached so a later cancel cannot drop it mid-flight.
            tokio::task::spawn_local(async move {
                bridge.set(pass_through).await;
            });
        });

        tracing::trace!(pass_through, id, "click-through switch scheduled");
        *self.pending.borrow_mut() = Some(PendingTimer { id, handle });
    }

    /// Drop the pending timer, if any, before it fires.
    pub fn cancel(&self) {
        if let Some(timer) = self.pending.borrow_mut().take() {
            timer.handle.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<S> Drop for ModeSwitch<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.borrow_mut().take() {
            timer.handle.abort();
        }
    }
}

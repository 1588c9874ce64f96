use crate::shell::{NativeShell, ShellCommand, ShellError};
use std::cell::RefCell;
use std::rc::Rc;

/// Last click-through value the native window confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickThroughState {
    /// No call has settled yet and nothing is assumed about the window.
    Unknown,
    Enabled,
    Disabled,
}

impl ClickThroughState {
    fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ClickThroughState::Enabled
        } else {
            ClickThroughState::Disabled
        }
    }
}

#[derive(Debug)]
struct Tracking {
    state: ClickThroughState,
    /// Stamp of the most recently issued call.
    generation: u64,
    /// Target of the latest issued call while it has not settled.
    in_flight: Option<bool>,
}

/// Releases the in-flight marker of a call whose future was dropped before it
/// settled, so the next request for the same value is issued again.
struct InFlightGuard<'a> {
    tracking: &'a RefCell<Tracking>,
    generation: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut tracking = self.tracking.borrow_mut();
        if tracking.generation == self.generation && tracking.in_flight.is_some() {
            tracing::trace!(generation = self.generation, "click-through call abandoned");
            tracking.in_flight = None;
        }
    }
}

/// Client side of the `enable_clickthrough` / `disable_clickthrough` calls.
///
/// Requests matching the tracked value are dropped without a round-trip. Each
/// issued call is stamped with a generation; a completion only touches the
/// tracked state when no newer call was issued after it, so a slow stale call
/// can never overwrite a fresher result.
pub struct ClickThroughBridge<S> {
    shell: Rc<S>,
    tracking: RefCell<Tracking>,
}

impl<S: NativeShell> ClickThroughBridge<S> {
    /// The window is assumed to start with click-through off.
    pub fn new(shell: Rc<S>) -> Self {
        Self::with_initial_state(shell, ClickThroughState::Disabled)
    }

    pub fn with_initial_state(shell: Rc<S>, state: ClickThroughState) -> Self {
        Self {
            shell,
            tracking: RefCell::new(Tracking {
                state,
                generation: 0,
                in_flight: None,
            }),
        }
    }

    pub fn state(&self) -> ClickThroughState {
        self.tracking.borrow().state
    }

    pub fn generation(&self) -> u64 {
        self.tracking.borrow().generation
    }

    pub async fn enable(&self) {
        self.set(true).await;
    }

    pub async fn disable(&self) {
        self.set(false).await;
    }

    /// Ask the window to ignore (`true`) or capture (`false`) cursor events.
    ///
    /// Failures are logged and leave the tracked state untouched so the next
    /// request for the same value retries.
    pub async fn set(&self, enabled: bool) {
        let Some(generation) = self.begin(enabled) else {
            return;
        };
        let command = if enabled {
            ShellCommand::EnableClickThrough
        } else {
            ShellCommand::DisableClickThrough
        };
        tracing::debug!(%command, generation, "issuing click-through call");
        let _guard = InFlightGuard {
            tracking: &self.tracking,
            generation,
        };
        let result = self.shell.invoke(command).await;
        self.settle(generation, enabled, result);
    }

    fn begin(&self, enabled: bool) -> Option<u64> {
        let mut tracking = self.tracking.borrow_mut();
        let settled_or_pending = match tracking.in_flight {
            Some(pending) => pending == enabled,
            None => tracking.state == ClickThroughState::from_enabled(enabled),
        };
        if settled_or_pending {
            tracing::trace!(enabled, "click-through already at requested value");
            return None;
        }
        tracking.generation += 1;
        tracking.in_flight = Some(enabled);
        Some(tracking.generation)
    }

    fn settle(&self, generation: u64, enabled: bool, result: Result<(), ShellError>) {
        let mut tracking = self.tracking.borrow_mut();
        if tracking.generation != generation {
            tracing::trace!(
                generation,
                latest = tracking.generation,
                "discarding superseded click-through result"
            );
            return;
        }
        tracking.in_flight = None;
        match result {
            Ok(()) => tracking.state = ClickThroughState::from_enabled(enabled),
            Err(err) => {
                tracing::warn!(%err, enabled, "failed to update click-through");
            }
        }
    }

    /// Fire-and-forget focus request used after interactive actions.
    pub async fn force_focus(&self) {
        if let Err(err) = self.shell.invoke(ShellCommand::ForceFocus).await {
            tracing::warn!(%err, "failed to restore focus");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickThroughBridge, ClickThroughState};
    use crate::shell::{NativeShell, ShellCommand, ShellError, Theme};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingShell {
        calls: RefCell<Vec<ShellCommand>>,
        fail_next: RefCell<bool>,
    }

    impl NativeShell for RecordingShell {
        async fn invoke(&self, command: ShellCommand) -> Result<(), ShellError> {
            self.calls.borrow_mut().push(command);
            if self.fail_next.replace(false) {
                return Err(ShellError::rejected(command, "denied"));
            }
            Ok(())
        }

        async fn is_fullscreen(&self) -> Result<bool, ShellError> {
            Ok(false)
        }

        async fn theme(&self) -> Result<Option<Theme>, ShellError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn enabling_twice_issues_one_call() {
        let shell = Rc::new(RecordingShell::default());
        let bridge = ClickThroughBridge::new(shell.clone());

        bridge.enable().await;
        bridge.enable().await;

        assert_eq!(*shell.calls.borrow(), vec![ShellCommand::EnableClickThrough]);
        assert_eq!(bridge.state(), ClickThroughState::Enabled);
    }

    #[tokio::test]
    async fn disable_on_fresh_bridge_is_a_no_op() {
        let shell = Rc::new(RecordingShell::default());
        let bridge = ClickThroughBridge::new(shell.clone());

        bridge.disable().await;

        assert!(shell.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn unknown_state_always_issues_the_first_call() {
        let shell = Rc::new(RecordingShell::default());
        let bridge =
            ClickThroughBridge::with_initial_state(shell.clone(), ClickThroughState::Unknown);

        bridge.disable().await;

        assert_eq!(*shell.calls.borrow(), vec![ShellCommand::DisableClickThrough]);
        assert_eq!(bridge.state(), ClickThroughState::Disabled);
    }

    #[tokio::test]
    async fn failure_keeps_state_and_next_request_retries() {
        let shell = Rc::new(RecordingShell::default());
        let bridge = ClickThroughBridge::new(shell.clone());

        *shell.fail_next.borrow_mut() = true;
        bridge.enable().await;
        assert_eq!(bridge.state(), ClickThroughState::Disabled);

        bridge.enable().await;
        assert_eq!(bridge.state(), ClickThroughState::Enabled);
        assert_eq!(
            *shell.calls.borrow(),
            vec![
                ShellCommand::EnableClickThrough,
                ShellCommand::EnableClickThrough
            ]
        );
    }

    #[tokio::test]
    async fn force_focus_failure_is_swallowed() {
        let shell = Rc::new(RecordingShell::default());
        let bridge = ClickThroughBridge::new(shell.clone());

        *shell.fail_next.borrow_mut() = true;
        bridge.force_focus().await;

        assert_eq!(*shell.calls.borrow(), vec![ShellCommand::ForceFocus]);
        assert_eq!(bridge.state(), ClickThroughState::Disabled);
    }
}

use overlay_shell::clickthrough::{ClickThroughBridge, ClickThroughState};
use overlay_shell::{ShellCommand, ShellError};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::{spawn_local, LocalSet};
use tokio::time::sleep;

use mock_shell::MockShell;

async fn let_tasks_run() {
    sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn later_request_wins_when_earlier_resolves_last() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = Rc::new(ClickThroughBridge::new(shell.clone()));
            let first = shell.gate_next();
            let second = shell.gate_next();

            let b = Rc::clone(&bridge);
            spawn_local(async move { b.enable().await });
            let_tasks_run().await;
            let b = Rc::clone(&bridge);
            spawn_local(async move { b.disable().await });
            let_tasks_run().await;

            assert_eq!(
                *shell.calls.borrow(),
                vec![
                    ShellCommand::EnableClickThrough,
                    ShellCommand::DisableClickThrough
                ]
            );

            second.send(Ok(())).unwrap();
            let_tasks_run().await;
            assert_eq!(bridge.state(), ClickThroughState::Disabled);

            first.send(Ok(())).unwrap();
            let_tasks_run().await;
            assert_eq!(bridge.state(), ClickThroughState::Disabled);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn stale_failure_does_not_disturb_newer_state() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = Rc::new(ClickThroughBridge::new(shell.clone()));
            let first = shell.gate_next();
            let second = shell.gate_next();

            let b = Rc::clone(&bridge);
            spawn_local(async move { b.enable().await });
            let_tasks_run().await;
            let b = Rc::clone(&bridge);
            spawn_local(async move { b.disable().await });
            let_tasks_run().await;
            let b = Rc::clone(&bridge);
            spawn_local(async move { b.enable().await });
            let_tasks_run().await;

            second.send(Ok(())).unwrap();
            let_tasks_run().await;
            first
                .send(Err(ShellError::rejected(
                    ShellCommand::EnableClickThrough,
                    "window gone",
                )))
                .unwrap();
            let_tasks_run().await;

            assert_eq!(bridge.state(), ClickThroughState::Enabled);
            assert_eq!(shell.calls.borrow().len(), 3);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn repeat_of_in_flight_request_is_dropped() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = Rc::new(ClickThroughBridge::new(shell.clone()));
            let gate = shell.gate_next();

            let b = Rc::clone(&bridge);
            spawn_local(async move { b.enable().await });
            let_tasks_run().await;
            bridge.enable().await;

            assert_eq!(*shell.calls.borrow(), vec![ShellCommand::EnableClickThrough]);
            assert_eq!(bridge.state(), ClickThroughState::Disabled);

            gate.send(Ok(())).unwrap();
            let_tasks_run().await;
            assert_eq!(bridge.state(), ClickThroughState::Enabled);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn failed_call_is_retried_by_next_request() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = ClickThroughBridge::new(shell.clone());
            let gate = shell.gate_next();
            gate.send(Err(ShellError::Unavailable)).unwrap();

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
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn abandoned_call_does_not_block_a_retry() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = ClickThroughBridge::new(shell.clone());
            let _gate = shell.gate_next();

            let timed_out = tokio::time::timeout(Duration::from_millis(5), bridge.enable()).await;
            assert!(timed_out.is_err());
            assert_eq!(bridge.state(), ClickThroughState::Disabled);

            bridge.enable().await;

            assert_eq!(
                *shell.calls.borrow(),
                vec![
                    ShellCommand::EnableClickThrough,
                    ShellCommand::EnableClickThrough
                ]
            );
            assert_eq!(bridge.state(), ClickThroughState::Enabled);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn abandoned_stale_call_leaves_newer_call_in_flight() {
    LocalSet::new()
        .run_until(async {
            let shell = Rc::new(MockShell::default());
            let bridge = Rc::new(ClickThroughBridge::new(shell.clone()));
            let _first = shell.gate_next();
            let second = shell.gate_next();

            let b = Rc::clone(&bridge);
            let stale = spawn_local(async move { b.enable().await });
            let_tasks_run().await;
            let b = Rc::clone(&bridge);
            spawn_local(async move { b.disable().await });
            let_tasks_run().await;

            stale.abort();
            let_tasks_run().await;
            // The disable is still pending, so a repeat is dropped.
            bridge.disable().await;
            assert_eq!(shell.calls.borrow().len(), 2);

            second.send(Ok(())).unwrap();
            let_tasks_run().await;
            assert_eq!(bridge.state(), ClickThroughState::Disabled);
        })
        .await;
}

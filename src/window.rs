use crate::shell::{NativeShell, ShellCommand, ShellError};
use std::rc::Rc;

/// Window chrome operations bound to keyboard shortcuts and palette commands.
pub struct WindowHandlers<S> {
    shell: Rc<S>,
}

impl<S> Clone for WindowHandlers<S> {
    fn clone(&self) -> Self {
        Self {
            shell: Rc::clone(&self.shell),
        }
    }
}

impl<S: NativeShell> WindowHandlers<S> {
    pub fn new(shell: Rc<S>) -> Self {
        Self { shell }
    }

    async fn run(&self, command: ShellCommand) -> Result<(), ShellError> {
        let result = self.shell.invoke(command).await;
        if let Err(err) = &result {
            tracing::warn!(%err, %command, "window command failed");
        }
        result
    }

    pub async fn close_window(&self) -> Result<(), ShellError> {
        self.run(ShellCommand::CloseWindow).await
    }

    pub async fn minimize_window(&self) -> Result<(), ShellError> {
        self.run(ShellCommand::MinimizeWindow).await
    }

    pub async fn force_focus(&self) -> Result<(), ShellError> {
        self.run(ShellCommand::ForceFocus).await
    }

    pub async fn toggle_visibility(&self) -> Result<(), ShellError> {
        self.run(ShellCommand::ToggleWindowVisibility).await
    }

    /// Query the current fullscreen flag and set its negation.
    pub async fn toggle_fullscreen(&self) -> Result<(), ShellError> {
        let fullscreen = match self.shell.is_fullscreen().await {
            Ok(fullscreen) => fullscreen,
            Err(err) => {
                tracing::warn!(%err, "failed to query fullscreen state");
                return Err(err);
            }
        };
        self.run(ShellCommand::SetFullscreen(!fullscreen)).await
    }
}

#[cfg(test)]
mod tests {
    use super::WindowHandlers;
    use crate::shell::{NativeShell, ShellCommand, ShellError, Theme};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeShell {
        fullscreen: Cell<bool>,
        calls: RefCell<Vec<ShellCommand>>,
    }

    impl NativeShell for FakeShell {
        async fn invoke(&self, command: ShellCommand) -> Result<(), ShellError> {
            if let ShellCommand::SetFullscreen(value) = command {
                self.fullscreen.set(value);
            }
            self.calls.borrow_mut().push(command);
            Ok(())
        }

        async fn is_fullscreen(&self) -> Result<bool, ShellError> {
            Ok(self.fullscreen.get())
        }

        async fn theme(&self) -> Result<Option<Theme>, ShellError> {
            Err(ShellError::Unavailable)
        }
    }

    #[tokio::test]
    async fn toggle_fullscreen_flips_the_reported_state() {
        let shell = Rc::new(FakeShell::default());
        let handlers = WindowHandlers::new(shell.clone());

        handlers.toggle_fullscreen().await.expect("enter fullscreen");
        handlers.toggle_fullscreen().await.expect("leave fullscreen");

        assert_eq!(
            *shell.calls.borrow(),
            vec![
                ShellCommand::SetFullscreen(true),
                ShellCommand::SetFullscreen(false)
            ]
        );
    }
}

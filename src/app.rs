use crate::clickthrough::{ClickThroughBridge, ClickThroughController, HitTester, Point};
use crate::commands::builtin_commands;
use crate::keyboard::{map_key_event_to_command, KeyCommand, KeyEvent};
use crate::palette::CommandPalette;
use crate::settings::Settings;
use crate::shell::{NativeShell, ShellEvent};
use crate::theme::{ThemeController, ThemeStore};
use crate::window::WindowHandlers;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub command: Option<KeyCommand>,
    pub prevent_default: bool,
}

/// One overlay window: click-through controller, command palette, theme and
/// window shortcuts wired to a single native shell.
///
/// Everything here runs on the UI thread inside a `tokio::task::LocalSet`.
pub struct OverlayShell<H, S> {
    controller: ClickThroughController<H, S>,
    palette: CommandPalette,
    theme: Rc<ThemeController<S>>,
    window: WindowHandlers<S>,
}

impl<H, S> OverlayShell<H, S>
where
    H: HitTester,
    S: NativeShell + 'static,
{
    pub fn new(shell: Rc<S>, hit_tester: H, settings: &Settings) -> anyhow::Result<Self> {
        let store = settings.theme_store()?;
        Ok(Self::with_theme_store(
            shell,
            hit_tester,
            settings.debounce_delay(),
            store,
        ))
    }

    pub fn with_theme_store(
        shell: Rc<S>,
        hit_tester: H,
        debounce: Duration,
        store: ThemeStore,
    ) -> Self {
        let bridge = Rc::new(ClickThroughBridge::new(Rc::clone(&shell)));
        let theme = Rc::new(ThemeController::new(Rc::clone(&shell), store));
        let window = WindowHandlers::new(shell);
        let palette = CommandPalette::new(builtin_commands(&window, &theme));
        Self {
            controller: ClickThroughController::new(hit_tester, bridge, debounce),
            palette,
            theme,
            window,
        }
    }

    pub fn controller(&self) -> &ClickThroughController<H, S> {
        &self.controller
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut CommandPalette {
        &mut self.palette
    }

    pub fn theme(&self) -> &Rc<ThemeController<S>> {
        &self.theme
    }

    pub fn mount(&mut self) {
        self.controller.mount();
        let theme = Rc::clone(&self.theme);
        tokio::task::spawn_local(async move { theme.init().await });
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn handle_pointer_move(&mut self, point: Point) -> Option<bool> {
        self.controller.handle_pointer_move(point)
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) -> KeyOutcome {
        let Some(command) = map_key_event_to_command(event) else {
            return KeyOutcome::default();
        };
        tracing::debug!(?command, "keyboard shortcut");
        match command {
            KeyCommand::CloseWindow => {
                let window = self.window.clone();
                tokio::task::spawn_local(async move {
                    let _ = window.close_window().await;
                });
            }
            KeyCommand::ToggleFullscreen => {
                let window = self.window.clone();
                tokio::task::spawn_local(async move {
                    let _ = window.toggle_fullscreen().await;
                });
            }
            KeyCommand::ToggleCommandPalette => {
                self.palette.toggle();
            }
        }
        KeyOutcome {
            command: Some(command),
            prevent_default: command.prevents_default(),
        }
    }

    pub fn handle_shell_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::ToggleCommandPalette => {
                self.palette.toggle();
            }
            ShellEvent::ThemeChanged(theme) => {
                self.theme.on_system_theme_changed(theme);
            }
        }
    }

    pub fn run_command(&mut self, id: &str) -> bool {
        self.palette.run_command(id)
    }

    /// Hand input focus back to the window after an interactive action.
    pub fn restore_focus(&self) {
        let bridge = Rc::clone(self.controller.bridge());
        tokio::task::spawn_local(async move { bridge.force_focus().await });
    }
}

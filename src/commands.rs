use crate::palette::{Command, CommandCategory};
use crate::shell::NativeShell;
use crate::theme::{ThemeController, ThemeMode};
use crate::window::WindowHandlers;
use std::rc::Rc;

/// Palette entries for window chrome and appearance.
pub fn builtin_commands<S: NativeShell + 'static>(
    window: &WindowHandlers<S>,
    theme: &Rc<ThemeController<S>>,
) -> Vec<Command> {
    let mut commands = Vec::new();

    let w = window.clone();
    commands.push(
        Command::new(
            "toggle-fullscreen",
            "Toggle Fullscreen",
            CommandCategory::Window,
            move || {
                let w = w.clone();
                async move { Ok(w.toggle_fullscreen().await?) }
            },
        )
        .with_shortcut("F11"),
    );
    let w = window.clone();
    commands.push(Command::new(
        "minimize-window",
        "Minimize Window",
        CommandCategory::Window,
        move || {
            let w = w.clone();
            async move { Ok(w.minimize_window().await?) }
        },
    ));
    let w = window.clone();
    commands.push(Command::new(
        "focus-window",
        "Focus Window",
        CommandCategory::Window,
        move || {
            let w = w.clone();
            async move { Ok(w.force_focus().await?) }
        },
    ));
    let w = window.clone();
    commands.push(Command::new(
        "toggle-visibility",
        "Toggle Window Visibility",
        CommandCategory::Window,
        move || {
            let w = w.clone();
            async move { Ok(w.toggle_visibility().await?) }
        },
    ));
    let w = window.clone();
    commands.push(
        Command::new(
            "close-window",
            "Close Window",
            CommandCategory::Window,
            move || {
                let w = w.clone();
                async move { Ok(w.close_window().await?) }
            },
        )
        .with_shortcut("Esc"),
    );

    for (id, label, mode) in [
        ("theme-light", "Light Theme", ThemeMode::Light),
        ("theme-dark", "Dark Theme", ThemeMode::Dark),
        ("theme-system", "System Theme", ThemeMode::System),
    ] {
        let theme = Rc::clone(theme);
        commands.push(Command::new(id, label, CommandCategory::Appearance, move || {
            let theme = Rc::clone(&theme);
            async move {
                theme.set_mode(mode).await;
                Ok(())
            }
        }));
    }

    commands
}

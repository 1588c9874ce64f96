use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Resolved light/dark appearance of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Named operations the native window shell accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    EnableClickThrough,
    DisableClickThrough,
    ForceFocus,
    CloseWindow,
    MinimizeWindow,
    SetFullscreen(bool),
    /// `None` hands the appearance back to the OS.
    SetTheme(Option<Theme>),
    ToggleWindowVisibility,
}

impl ShellCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::EnableClickThrough => "enable_clickthrough",
            ShellCommand::DisableClickThrough => "disable_clickthrough",
            ShellCommand::ForceFocus => "force_focus",
            ShellCommand::CloseWindow => "close_window",
            ShellCommand::MinimizeWindow => "minimize_window",
            ShellCommand::SetFullscreen(_) => "set_fullscreen",
            ShellCommand::SetTheme(_) => "set_theme",
            ShellCommand::ToggleWindowVisibility => "toggle_window_visibility",
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("native call `{command}` was rejected: {reason}")]
    Rejected {
        command: &'static str,
        reason: String,
    },
    #[error("native window is unavailable")]
    Unavailable,
}

impl ShellError {
    pub fn rejected(command: ShellCommand, reason: impl Into<String>) -> Self {
        ShellError::Rejected {
            command: command.name(),
            reason: reason.into(),
        }
    }
}

/// Asynchronous request/response boundary to the native window.
///
/// Implementations live on the UI thread; the returned futures are polled on a
/// `LocalSet` and are never required to be `Send`.
pub trait NativeShell {
    fn invoke(&self, command: ShellCommand) -> impl Future<Output = Result<(), ShellError>>;

    fn is_fullscreen(&self) -> impl Future<Output = Result<bool, ShellError>>;

    /// Current OS appearance, if the platform reports one.
    fn theme(&self) -> impl Future<Output = Result<Option<Theme>, ShellError>>;
}

pub const TOGGLE_COMMAND_PALETTE_EVENT: &str = "toggle-command-palette";

/// Signals pushed from the shell layer into the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ToggleCommandPalette,
    ThemeChanged(Theme),
}

impl ShellEvent {
    /// Resolve a payload-less event by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            TOGGLE_COMMAND_PALETTE_EVENT => Some(ShellEvent::ToggleCommandPalette),
            _ => None,
        }
    }
}

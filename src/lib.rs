pub mod app;
pub mod clickthrough;
pub mod commands;
pub mod hotkey;
pub mod keyboard;
pub mod logging;
pub mod palette;
pub mod settings;
pub mod shell;
pub mod theme;
pub mod window;

pub use app::{KeyOutcome, OverlayShell};
pub use shell::{NativeShell, ShellCommand, ShellError, ShellEvent, Theme};

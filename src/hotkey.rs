use crate::keyboard::{KeyCode, KeyEvent};
use crate::settings::Settings;
use crate::shell::ShellEvent;

pub const DEFAULT_PALETTE_HOTKEY: &str = "CommandOrControl+Shift+Space";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub key: KeyCode,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    /// Satisfied by either Ctrl or Cmd.
    pub command_or_control: bool,
}

impl Hotkey {
    /// Parsed form of [`DEFAULT_PALETTE_HOTKEY`].
    pub const fn palette_default() -> Self {
        Self {
            key: KeyCode::Space,
            ctrl: false,
            meta: false,
            shift: true,
            alt: false,
            command_or_control: true,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        let mods = event.modifiers;
        if event.key != self.key || mods.shift != self.shift || mods.alt != self.alt {
            return false;
        }
        if self.command_or_control {
            mods.command_or_control()
        } else {
            mods.ctrl == self.ctrl && mods.meta == self.meta
        }
    }
}

/// Parse a shortcut like "CommandOrControl+Shift+Space" into a [`Hotkey`].
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut meta = false;
    let mut shift = false;
    let mut alt = false;
    let mut command_or_control = false;
    let mut key: Option<KeyCode> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "CMD" | "COMMAND" | "SUPER" | "META" => meta = true,
            "COMMANDORCONTROL" | "CMDORCTRL" | "COMMANDORCTRL" => command_or_control = true,
            "SHIFT" => shift = true,
            "ALT" | "OPTION" => alt = true,
            "" => {}
            _ => {
                if key.is_some() {
                    return None;
                }
                key = Some(parse_key(&upper)?);
            }
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        meta,
        shift,
        alt,
        command_or_control,
    })
}

fn parse_key(upper: &str) -> Option<KeyCode> {
    match upper {
        "SPACE" => Some(KeyCode::Space),
        "TAB" => Some(KeyCode::Tab),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "ESC" | "ESCAPE" => Some(KeyCode::Escape),
        "DELETE" => Some(KeyCode::Delete),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" => Some(KeyCode::PageDown),
        "LEFT" | "LEFTARROW" => Some(KeyCode::Left),
        "RIGHT" | "RIGHTARROW" => Some(KeyCode::Right),
        "UP" | "UPARROW" => Some(KeyCode::Up),
        "DOWN" | "DOWNARROW" => Some(KeyCode::Down),
        _ if upper.len() > 1 && upper.starts_with('F') => match upper[1..].parse::<u8>() {
            Ok(n @ 1..=24) => Some(KeyCode::F(n)),
            _ => None,
        },
        _ => {
            let mut chars = upper.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => {
                    Some(KeyCode::Char(c.to_ascii_lowercase()))
                }
                _ => None,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutState {
    Pressed,
    Released,
}

/// Synchronous window operations available to the shell's global shortcut
/// callback.
pub trait WindowHost {
    fn is_visible(&self) -> anyhow::Result<bool>;
    fn show(&self) -> anyhow::Result<()>;
    fn set_focus(&self) -> anyhow::Result<()>;
    fn emit(&self, event: ShellEvent) -> anyhow::Result<()>;
}

/// Shell-side handler of the system-wide palette shortcut.
///
/// A press toggles the palette and brings a hidden window to the front.
pub struct GlobalShortcutHandler {
    hotkey: Hotkey,
}

impl GlobalShortcutHandler {
    pub fn new(hotkey: Hotkey) -> Self {
        Self { hotkey }
    }

    pub fn hotkey(&self) -> Hotkey {
        self.hotkey
    }

    /// Palette shortcut configured in `settings`, falling back to the default.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.palette_hotkey())
    }

    /// React to a global shortcut callback. Returns `true` when `shortcut` is the
    /// palette hotkey and the press was handled.
    pub fn handle<W: WindowHost>(
        &self,
        shortcut: &KeyEvent,
        state: ShortcutState,
        window: &W,
    ) -> bool {
        if !self.hotkey.matches(shortcut) {
            tracing::trace!(?shortcut, "global shortcut is not the palette hotkey");
            return false;
        }
        if state != ShortcutState::Pressed {
            return false;
        }
        if let Err(err) = window.emit(ShellEvent::ToggleCommandPalette) {
            tracing::warn!(%err, "failed to emit palette toggle");
        }
        match window.is_visible() {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("showing hidden window for palette shortcut");
                if let Err(err) = window.show().and_then(|()| window.set_focus()) {
                    tracing::warn!(%err, "failed to reveal window");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to query window visibility"),
        }
        true
    }
}

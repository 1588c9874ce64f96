#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Up,
    Down,
    F(u8),
    Other,
}

impl KeyCode {
    /// Map a DOM-style `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            " " | "Space" => KeyCode::Space,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "PageUp" => KeyCode::PageUp,
            "PageDown" => KeyCode::PageDown,
            "ArrowLeft" => KeyCode::Left,
            "ArrowRight" => KeyCode::Right,
            "ArrowUp" => KeyCode::Up,
            "ArrowDown" => KeyCode::Down,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                    (Some('F'), Some(_)) => match name[1..].parse::<u8>() {
                        Ok(n @ 1..=24) => KeyCode::F(n),
                        _ => KeyCode::Other,
                    },
                    _ => KeyCode::Other,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    /// Command on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn command_or_control(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::NONE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    CloseWindow,
    ToggleFullscreen,
    ToggleCommandPalette,
}

impl KeyCommand {
    /// Whether the webview's own handling of the key must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            KeyCommand::ToggleFullscreen | KeyCommand::ToggleCommandPalette
        )
    }
}

/// Document-level shortcuts of the overlay window.
pub fn map_key_event_to_command(event: KeyEvent) -> Option<KeyCommand> {
    match (event.key, event.modifiers) {
        (KeyCode::Escape, _) => Some(KeyCommand::CloseWindow),
        (KeyCode::F(11), _) => Some(KeyCommand::ToggleFullscreen),
        (KeyCode::Char('k'), mods) if mods.command_or_control() => {
            Some(KeyCommand::ToggleCommandPalette)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_regardless_of_modifiers() {
        let shifted = KeyModifiers {
            shift: true,
            ..Default::default()
        };
        assert_eq!(
            map_key_event_to_command(KeyEvent::new(KeyCode::Escape, shifted)),
            Some(KeyCommand::CloseWindow)
        );
        assert!(!KeyCommand::CloseWindow.prevents_default());
    }

    #[test]
    fn palette_needs_ctrl_or_cmd() {
        let ctrl = KeyModifiers {
            ctrl: true,
            ..Default::default()
        };
        let cmd = KeyModifiers {
            meta: true,
            ..Default::default()
        };
        let k = KeyCode::from_key_name("k");
        assert_eq!(
            map_key_event_to_command(KeyEvent::new(k, ctrl)),
            Some(KeyCommand::ToggleCommandPalette)
        );
        assert_eq!(
            map_key_event_to_command(KeyEvent::new(k, cmd)),
            Some(KeyCommand::ToggleCommandPalette)
        );
        assert_eq!(map_key_event_to_command(KeyEvent::plain(k)), None);
    }

    #[test]
    fn f11_toggles_fullscreen_and_prevents_default() {
        let command = map_key_event_to_command(KeyEvent::plain(KeyCode::from_key_name("F11")));
        assert_eq!(command, Some(KeyCommand::ToggleFullscreen));
        assert!(command.is_some_and(KeyCommand::prevents_default));
    }

    #[test]
    fn key_names_map_to_codes() {
        assert_eq!(KeyCode::from_key_name("K"), KeyCode::Char('k'));
        assert_eq!(KeyCode::from_key_name("F1"), KeyCode::F(1));
        assert_eq!(KeyCode::from_key_name("F99"), KeyCode::Other);
        assert_eq!(KeyCode::from_key_name("Esc"), KeyCode::Escape);
        assert_eq!(KeyCode::from_key_name("Shift"), KeyCode::Other);
    }
}

use crate::clickthrough::DEFAULT_DEBOUNCE;
use crate::hotkey::{parse_hotkey, Hotkey, DEFAULT_PALETTE_HOTKEY};
use crate::theme::ThemeStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Quiet period before a click-through change reaches the window.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// When enabled the logger starts at debug level and honours `RUST_LOG`.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives log output in addition to stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// System-wide shortcut that toggles the command palette.
    #[serde(default = "default_palette_hotkey")]
    pub palette_hotkey: String,
    /// Location of the theme store. Defaults to the user data directory.
    #[serde(default)]
    pub theme_store_path: Option<String>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_palette_hotkey() -> String {
    DEFAULT_PALETTE_HOTKEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            debug_logging: false,
            log_file: None,
            palette_hotkey: default_palette_hotkey(),
            theme_store_path: None,
        }
    }
}

impl Settings {
    /// Missing or empty files yield the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn palette_hotkey(&self) -> Hotkey {
        if let Some(hotkey) = parse_hotkey(&self.palette_hotkey) {
            return hotkey;
        }
        tracing::warn!(
            "provided palette_hotkey string '{}' is invalid; using default {}",
            self.palette_hotkey,
            DEFAULT_PALETTE_HOTKEY
        );
        Hotkey::palette_default()
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(PathBuf::from)
    }

    pub fn theme_store(&self) -> Result<ThemeStore> {
        let path = match &self.theme_store_path {
            Some(path) => PathBuf::from(path),
            None => ThemeStore::default_path()?,
        };
        Ok(ThemeStore::new(path))
    }
}

use crate::shell::{NativeShell, ShellCommand, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const THEME_STORAGE_KEY: &str = "theme-mode";
pub const THEME_STORE_FILE_NAME: &str = "theme.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Theme forced on the window, `None` when following the OS.
    pub fn forced_theme(self) -> Option<Theme> {
        match self {
            ThemeMode::Light => Some(Theme::Light),
            ThemeMode::Dark => Some(Theme::Dark),
            ThemeMode::System => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::System => write!(f, "system"),
        }
    }
}

/// Small durable key-value file holding the chosen theme mode.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs_next::data_dir().context("resolve user data directory")?;
        Ok(dir.join("overlay_shell").join(THEME_STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read theme store {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("deserialize theme store {}", self.path.display()))
    }

    pub fn load_mode(&self) -> Result<Option<ThemeMode>> {
        let entries = self.read_entries()?;
        let Some(value) = entries.get(THEME_STORAGE_KEY) else {
            return Ok(None);
        };
        let mode = serde_json::from_value(value.clone())
            .with_context(|| format!("parse `{THEME_STORAGE_KEY}` entry"))?;
        Ok(Some(mode))
    }

    /// Persist `mode`, keeping any other entries already in the file.
    pub fn save_mode(&self, mode: ThemeMode) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(%err, "discarding unreadable theme store");
            BTreeMap::new()
        });
        entries.insert(THEME_STORAGE_KEY.to_string(), serde_json::to_value(mode)?);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create theme store folder {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&entries).context("serialize theme store")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write theme store {}", self.path.display()))
    }
}

/// Tracks the chosen mode and the OS theme, and pushes the result to the window.
pub struct ThemeController<S> {
    shell: Rc<S>,
    store: ThemeStore,
    mode: Cell<ThemeMode>,
    system: Cell<Theme>,
}

impl<S: NativeShell> ThemeController<S> {
    pub fn new(shell: Rc<S>, store: ThemeStore) -> Self {
        let mode = match store.load_mode() {
            Ok(Some(mode)) => mode,
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to load theme mode; using default");
                ThemeMode::default()
            }
        };
        Self {
            shell,
            store,
            mode: Cell::new(mode),
            system: Cell::new(Theme::Dark),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn system_theme(&self) -> Theme {
        self.system.get()
    }

    pub fn effective_theme(&self) -> Theme {
        self.mode.get().forced_theme().unwrap_or(self.system.get())
    }

    /// Read the OS theme and apply the persisted mode to the window.
    pub async fn init(&self) {
        match self.shell.theme().await {
            Ok(theme) => self.system.set(theme.unwrap_or(Theme::Dark)),
            Err(err) => tracing::warn!(%err, "failed to read system theme"),
        }
        self.apply().await;
    }

    pub async fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        if let Err(err) = self.store.save_mode(mode) {
            tracing::warn!(%err, %mode, "failed to persist theme mode");
        }
        self.apply().await;
    }

    /// Record an OS theme change and return the resulting effective theme.
    pub fn on_system_theme_changed(&self, theme: Theme) -> Theme {
        self.system.set(theme);
        let effective = self.effective_theme();
        tracing::debug!(system = %theme, %effective, "system theme changed");
        effective
    }

    async fn apply(&self) {
        let command = ShellCommand::SetTheme(self.mode.get().forced_theme());
        if let Err(err) = self.shell.invoke(command).await {
            tracing::warn!(%err, "failed to apply window theme");
        }
    }
}

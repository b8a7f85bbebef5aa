//! Workspace discovery
//!
//! A workspace is any directory containing `.dspg-journal/`. Only the config
//! file lives there; articles and submissions are never written to disk.

use crate::error::{JournalError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "DSPG_JOURNAL_ROOT";

/// Directory holding a `.dspg-journal/config.toml`
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace: DSPG_JOURNAL_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'dspg-journal init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    CONFIG_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory with `.dspg-journal/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(JournalError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    /// Create `.dspg-journal/`; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Resolve a path from the config relative to this workspace's root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Effective configuration for a session.
///
/// An explicit file wins; otherwise a discovered workspace; otherwise defaults.
/// Relative catalog paths are resolved against the file's workspace.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let mut config = Config::load_from_file(path)?;
        if let (Some(catalog), Some(dir)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }
        return Ok(config);
    }

    match Workspace::discover() {
        Ok(workspace) => {
            tracing::debug!(root = %workspace.root.display(), "Using workspace config");
            let mut config = workspace.load_config()?;
            config.catalog = config.catalog.map(|c| workspace.resolve(&c));
            Ok(config)
        }
        Err(JournalError::NotInitialized(_)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

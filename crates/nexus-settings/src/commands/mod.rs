//! Command implementations for the nexus CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `config` - Config file management (init, path, validate)
//! - `profile` - Profile inspection and edits
//! - `widgets` - Per-layout widget listing and toggles
//! - `key` - Unsplash access key storage
//! - `search` - One-off photo search
//! - `tui` - The interactive settings panel

pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod profile;
pub(crate) mod search;
pub(crate) mod tui;
pub(crate) mod widgets;

pub(crate) use config::*;
pub(crate) use key::*;
pub(crate) use profile::*;
pub(crate) use search::*;
pub(crate) use tui::*;
pub(crate) use widgets::*;

use nexus_settings::config::error::ConfigError;
use nexus_settings::config::loader::ConfigLoader;
use nexus_settings::config::schema::Config;
use nexus_settings::logging;
use nexus_settings::store::SettingsStore;
use nexus_settings::LayoutType;
use std::path::{Path, PathBuf};

/// Loaded configuration plus the command-line overrides.
pub(crate) struct Context {
    pub(crate) config: Config,
    pub(crate) data_dir: PathBuf,
}

impl Context {
    /// Loads and validates the config at `config_path` (or the default
    /// location). `data_dir` overrides `storage.data_dir`.
    pub(crate) fn load(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = ConfigLoader::load(config_path)?;
        config.validate()?;
        let data_dir = data_dir.unwrap_or_else(|| config.data_dir());
        Ok(Self { config, data_dir })
    }

    /// The `--layout` flag, or the configured layout.
    pub(crate) fn layout(&self, flag: Option<LayoutType>) -> LayoutType {
        flag.unwrap_or(self.config.tui.layout)
    }

    /// File-backed stores under the data directory.
    pub(crate) fn store(&self) -> SettingsStore {
        SettingsStore::open(&self.data_dir)
    }

    /// Logs to stderr at the configured level unless `NEXUS_LOG` is set.
    pub(crate) fn init_cli_logging(&self) {
        logging::init_stderr(self.config.storage.log_level.as_filter());
    }
}

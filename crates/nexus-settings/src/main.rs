//! Nexus settings - CLI entry point
//!
//! This binary opens the terminal settings panel and exposes the same
//! operations as scriptable subcommands: profile edits, widget toggles,
//! the Unsplash access key, one-off photo searches, and config management.

use clap::{Parser, Subcommand};
use nexus_settings::{LayoutType, ProfileField, WidgetId};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod commands;

#[cfg(test)]
mod cli_tests;

/// Nexus settings panel
#[derive(Parser)]
#[command(name = "nexus")]
#[command(version, about = "Settings panel for the Nexus new-tab dashboard")]
pub(crate) struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Directory holding storage.json and local.json (overrides the config)
    #[arg(long, global = true)]
    pub(crate) data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Available subcommands for the nexus CLI
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open the settings panel in the terminal
    Tui {
        /// Layout the Widgets tab edits (focus, dashboard, workflow)
        #[arg(long)]
        layout: Option<LayoutType>,
    },

    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// List or toggle widgets of a layout
    Widgets {
        #[command(subcommand)]
        action: WidgetsAction,
    },

    /// Manage the Unsplash access key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Search Unsplash for background photos and print the results
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `profile` subcommand.
#[derive(Subcommand)]
pub(crate) enum ProfileAction {
    /// Print every profile field
    Show,
    /// Replace one profile field
    Set {
        /// Field: username, greeting, background-url, accent-color, theme
        field: ProfileField,
        /// New value (theme accepts light, dark, system)
        value: String,
    },
}

/// Actions for the `widgets` subcommand.
#[derive(Subcommand)]
pub(crate) enum WidgetsAction {
    /// List the widget catalog with each widget's state
    List {
        /// Layout to inspect (defaults to the configured layout)
        #[arg(long)]
        layout: Option<LayoutType>,
    },
    /// Enable a widget if disabled, disable it if enabled
    Toggle {
        /// Widget id, e.g. clock, tasks, github
        widget: WidgetId,
        /// Layout to change (defaults to the configured layout)
        #[arg(long)]
        layout: Option<LayoutType>,
    },
}

/// Actions for the `key` subcommand.
#[derive(Subcommand)]
pub(crate) enum KeyAction {
    /// Store the access key
    Set {
        /// Unsplash Access Key
        key: String,
    },
    /// Remove the stored access key
    Clear,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Config { action } => commands::run_config_command(action, config_path),
        Commands::Tui { layout } => with_context(config_path, data_dir, false, |context| {
            commands::run_tui_command(context, layout)
        }),
        Commands::Profile { action } => with_context(config_path, data_dir, true, |context| {
            commands::run_profile_command(context, action)
        }),
        Commands::Widgets { action } => with_context(config_path, data_dir, true, |context| {
            commands::run_widgets_command(context, action)
        }),
        Commands::Key { action } => with_context(config_path, data_dir, true, |context| {
            commands::run_key_command(context, action)
        }),
        Commands::Search { query } => with_context(config_path, data_dir, true, |context| {
            commands::run_search_command(context, &query.join(" "))
        }),
    }
}

/// Loads the configuration and runs `run` with it.
///
/// The TUI sets up its own file logging, so only CLI commands pass
/// `cli_logging`.
fn with_context(
    config_path: Option<&Path>,
    data_dir: Option<PathBuf>,
    cli_logging: bool,
    run: impl FnOnce(&commands::Context) -> ExitCode,
) -> ExitCode {
    let context = match commands::Context::load(config_path, data_dir) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cli_logging {
        context.init_cli_logging();
    }
    run(&context)
}

//! Config file commands: `init`, `path`, and `validate`.

use crate::ConfigAction;
use nexus_settings::config::{default, loader::ConfigLoader, xdg};
use std::path::Path;
use std::process::ExitCode;

/// Runs a `config` action. `config_path` is the `--config` override.
pub(crate) fn run_config_command(action: ConfigAction, config_path: Option<&Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            match config_path {
                Some(path) => println!("{}", path.display()),
                None => println!("{}", xdg::config_path().display()),
            }
            Ok(())
        }
        ConfigAction::Validate => {
            match ConfigLoader::load(config_path).and_then(|config| {
                config.validate()?;
                Ok(config)
            }) {
                Ok(config) => {
                    println!("Configuration is valid");
                    println!("{config:#?}");
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

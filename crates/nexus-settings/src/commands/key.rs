//! Unsplash access key commands.

use super::Context;
use crate::KeyAction;
use std::process::ExitCode;

pub(crate) fn run_key_command(context: &Context, action: KeyAction) -> ExitCode {
    let mut store = context.store();
    let (result, done) = match action {
        KeyAction::Set { key } => (store.set_api_key(key.trim()), "Access key saved"),
        KeyAction::Clear => (store.clear_api_key(), "Access key removed"),
    };
    match result {
        Ok(()) => {
            println!("{done}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Profile commands.
//!
//! `set` follows the panel's rule: the new value is merged into the last
//! stored profile (or the defaults) and the whole record is written back.
//! A stored profile that cannot be decoded at all is left untouched.

use super::Context;
use crate::ProfileAction;
use nexus_settings::{Profile, ProfileField};
use std::process::ExitCode;

pub(crate) fn run_profile_command(context: &Context, action: ProfileAction) -> ExitCode {
    match action {
        ProfileAction::Show => run_profile_show(context),
        ProfileAction::Set { field, value } => run_profile_set(context, field, &value),
    }
}

fn run_profile_show(context: &Context) -> ExitCode {
    let profile = match context.store().load_profile() {
        Ok(profile) => profile.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    print!("{}", format_profile(&profile));
    ExitCode::SUCCESS
}

fn run_profile_set(context: &Context, field: ProfileField, value: &str) -> ExitCode {
    let mut store = context.store();
    let current = match store.load_profile() {
        Ok(profile) => profile.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: profile could not be loaded, nothing changed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let updated = match current.with_field(field, value) {
        Ok(updated) => updated,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = store.save_profile(&updated) {
        eprintln!("Error: failed to save profile: {e}");
        return ExitCode::FAILURE;
    }
    println!("{} = {}", field.key(), updated.field(field));
    ExitCode::SUCCESS
}

/// One `key = value` line per field, in document order.
pub(crate) fn format_profile(profile: &Profile) -> String {
    ProfileField::ALL
        .iter()
        .map(|field| format!("{:<14} = {}\n", field.key(), profile.field(*field)))
        .collect()
}

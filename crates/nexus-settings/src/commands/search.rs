//! One-off photo search.
//!
//! Runs the panel's search on the calling thread, so the blocking client
//! never touches an async runtime. Prints one tab-separated line per photo:
//! id, label, full-size URL.

use super::Context;
use nexus_settings::panel::{SettingsPanel, MSG_KEY_REQUIRED, MSG_SEARCH_FAILED};
use nexus_settings::photos::PhotoCandidate;
use std::process::ExitCode;
use unsplash_search::UnsplashClient;

pub(crate) fn run_search_command(context: &Context, query: &str) -> ExitCode {
    let config = &context.config;
    let mut panel = SettingsPanel::new(context.store(), config.tui.layout);
    panel.set_query(query);

    let client =
        UnsplashClient::with_base_url(&config.unsplash.api_url).with_params(config.search_params());
    panel.search_with(&client);

    let message = panel.message();
    if message == MSG_KEY_REQUIRED || message == MSG_SEARCH_FAILED {
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }
    if !message.is_empty() {
        eprintln!("{message}");
    }
    print!("{}", format_results(panel.results()));
    ExitCode::SUCCESS
}

pub(crate) fn format_results(results: &[PhotoCandidate]) -> String {
    results
        .iter()
        .map(|photo| format!("{}\t{}\t{}\n", photo.id, photo.label, photo.full))
        .collect()
}

//! The interactive settings panel.

use super::Context;
use nexus_settings::logging::{self, LOG_FILE};
use nexus_settings::panel::SettingsPanel;
use nexus_settings::theme::SharedThemeSink;
use nexus_settings::tui::app::{unsplash_search, App};
use nexus_settings::LayoutType;
use std::process::ExitCode;

pub(crate) fn run_tui_command(context: &Context, layout: Option<LayoutType>) -> ExitCode {
    let config = &context.config;

    let log_path = context.data_dir.join(LOG_FILE);
    if let Err(e) = logging::init_file(&log_path, config.storage.log_level.as_filter()) {
        eprintln!("Error: cannot open log file {}: {e}", log_path.display());
        return ExitCode::FAILURE;
    }

    let tick_rate = match config.tick_rate() {
        Ok(rate) => rate,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let sink = SharedThemeSink::default();
    let panel = SettingsPanel::new(context.store(), context.layout(layout))
        .with_theme_sink(Box::new(sink.clone()))
        .with_color_scheme(config.appearance.color_scheme.probe());
    let search = unsplash_search(&config.unsplash.api_url, config.search_params());

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime for TUI: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = rt.block_on(async {
        let mut app = App::new(panel, sink, search).with_tick_rate(tick_rate);
        app.run().await
    });
    // A search still waiting on the network must not hold up exit.
    rt.shutdown_background();

    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

//! Widget commands: list the catalog for a layout, toggle one widget.

use super::Context;
use crate::WidgetsAction;
use nexus_settings::layout::Layouts;
use nexus_settings::widgets::CATALOG;
use nexus_settings::{LayoutType, WidgetId};
use std::process::ExitCode;

pub(crate) fn run_widgets_command(context: &Context, action: WidgetsAction) -> ExitCode {
    match action {
        WidgetsAction::List { layout } => run_widgets_list(context, context.layout(layout)),
        WidgetsAction::Toggle { widget, layout } => {
            run_widgets_toggle(context, widget, context.layout(layout))
        }
    }
}

fn run_widgets_list(context: &Context, layout: LayoutType) -> ExitCode {
    let layouts = match context.store().load_layouts() {
        Ok(layouts) => layouts.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: layouts could not be loaded: {e}");
            return ExitCode::FAILURE;
        }
    };
    print!("{}", format_widget_list(&layouts, layout));
    ExitCode::SUCCESS
}

/// Toggles `widget` in `layout` and writes every layout back.
///
/// Undecodable layouts are left untouched and reported as an error.
fn run_widgets_toggle(context: &Context, widget: WidgetId, layout: LayoutType) -> ExitCode {
    let mut store = context.store();
    let mut layouts = match store.load_layouts() {
        Ok(layouts) => layouts.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: layouts could not be loaded, nothing changed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let enabled = layouts.toggle(layout, widget);
    if let Err(e) = store.save_layouts(&layouts) {
        eprintln!("Error: failed to save layouts: {e}");
        return ExitCode::FAILURE;
    }
    let state = if enabled { "enabled" } else { "disabled" };
    println!("{} {} in the {} layout", widget.info().name, state, layout.name());
    ExitCode::SUCCESS
}

/// The catalog grouped by section, each widget marked `[x]` when enabled.
pub(crate) fn format_widget_list(layouts: &Layouts, layout: LayoutType) -> String {
    let config = layouts.get(layout);
    let mut out = format!(
        "{} layout: {} enabled\n",
        layout.name(),
        config.widgets.len()
    );
    for group in CATALOG {
        out.push_str(&format!("\n{}\n", group.label));
        for info in group.items {
            let mark = if config.contains(info.id) { "x" } else { " " };
            out.push_str(&format!(
                "  [{mark}] {:<12} {}\n",
                info.id.as_str(),
                info.name
            ));
        }
    }
    out
}

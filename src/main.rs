// Month Grid Application
// Main entry point
//
// Usage: month-grid [EVENTS.json] [CONFIG.toml]

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use month_grid::services::event::load_event_drafts;
use month_grid::services::settings::{default_config_path, load_config};
use month_grid::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Grid");

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let events_path = args.next();
    let config_path = args.next().or_else(default_config_path);

    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => Default::default(),
    };
    let drafts = match &events_path {
        Some(path) => load_event_drafts(path)?,
        None => Vec::new(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size(CalendarApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Month Grid",
        options,
        Box::new(move |cc| {
            let app = CalendarApp::new(cc, config, drafts)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("{}", err))
    .context("failed to run the calendar window")
}

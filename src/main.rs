mod app;
mod bindings;
mod chart;
mod color;
mod data;
mod layout;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchBoardApp;
use data::model::LaunchDataset;
use eframe::egui;

/// Fixed relative path of the launch-records CSV.
const DATA_PATH: &str = "data/launches.csv";

fn load_dataset() -> anyhow::Result<LaunchDataset> {
    data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading launch records from {DATA_PATH}"))
}

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded once and is immutable for the process lifetime.
    // A missing or malformed file aborts startup.
    let dataset = match load_dataset() {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records (payload {:.0} – {:.0} kg)",
        dataset.len(),
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 980.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
}

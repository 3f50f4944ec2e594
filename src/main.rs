//! staffscope - workforce demographics chart report
//!
//! Loads `output.csv` from the working directory and walks through four
//! distribution figures in one native window.

mod data;
mod charts;
mod reports;
mod gui;

use std::path::Path;

use anyhow::{anyhow, Context};
use eframe::egui;

use charts::{Theme, FIGURE_HEIGHT, FIGURE_WIDTH};
use gui::ReportViewer;

const DATASET_FILE: &str = "output.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::load_dataset(Path::new(DATASET_FILE))
        .with_context(|| format!("could not load {DATASET_FILE}"))?;

    let theme = Theme::default();
    let figures = reports::build_report(&dataset, theme)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([FIGURE_WIDTH as f32 + 16.0, FIGURE_HEIGHT as f32 + 16.0])
            .with_title(ReportViewer::window_title(&figures, 0)),
        ..Default::default()
    };

    eframe::run_native(
        "staffscope",
        options,
        Box::new(move |cc| Ok(Box::new(ReportViewer::new(cc, figures, theme)))),
    )
    .map_err(|e| anyhow!("Failed to show report window: {e}"))
}

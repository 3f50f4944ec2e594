//! Charts module - off-screen figure rendering

mod bar;
mod pie;
mod theme;

pub use bar::BarChart;
pub use pie::PieChart;
pub use theme::Theme;

use image::RgbImage;
use thiserror::Error;

/// Rendered figure dimensions in pixels.
pub const FIGURE_WIDTH: u32 = 960;
pub const FIGURE_HEIGHT: u32 = 720;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to prepare drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Rendered buffer did not match the figure size")]
    Buffer,
}

/// A fully rendered report figure.
pub struct Figure {
    pub title: String,
    pub image: RgbImage,
}

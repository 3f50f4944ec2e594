//! Report color themes.
//!
//! A theme is a fixed four color palette applied to every figure. Render
//! helpers take the theme as an explicit argument, nothing is stored
//! globally.

use egui::Color32;
use plotters::style::RGBColor;

/// Categorical slice colors for pie figures, cycled in order.
pub const SLICE_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Figure color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl Theme {
    /// Figure and plot background.
    pub fn background(&self) -> RGBColor {
        match self {
            Theme::Dark => RGBColor(11, 17, 22),
            Theme::Light => RGBColor(255, 255, 255),
            Theme::HighContrast => RGBColor(0, 0, 0),
        }
    }

    /// Bar fill.
    pub fn bar(&self) -> RGBColor {
        match self {
            Theme::Dark => RGBColor(94, 168, 255),
            Theme::Light => RGBColor(11, 109, 242),
            Theme::HighContrast => RGBColor(255, 255, 0),
        }
    }

    /// Titles, axis descriptions and tick labels.
    pub fn text(&self) -> RGBColor {
        match self {
            Theme::Dark => RGBColor(230, 238, 248),
            Theme::Light => RGBColor(11, 23, 32),
            Theme::HighContrast => RGBColor(255, 255, 255),
        }
    }

    /// Axis lines.
    pub fn axis(&self) -> RGBColor {
        match self {
            Theme::Dark => RGBColor(159, 176, 201),
            Theme::Light => RGBColor(83, 96, 112),
            Theme::HighContrast => RGBColor(255, 255, 255),
        }
    }

    /// Background as an egui color, for the viewer panel behind figures.
    pub fn background_fill(&self) -> Color32 {
        let RGBColor(r, g, b) = self.background();
        Color32::from_rgb(r, g, b)
    }
}

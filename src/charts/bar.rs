//! Horizontal bar chart rendering.
//!
//! Figures are drawn off screen into an RGB buffer and handed back as an
//! image, so the viewer never re-renders while a figure is on display.

use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{ChartError, Theme, FIGURE_HEIGHT, FIGURE_WIDTH};
use crate::data::FrequencyTable;

const DEFAULT_LABEL_SIZE: u32 = 10;
// Point sizes from the report layout scale 2x at the rendered resolution.
const FONT_SCALE: u32 = 2;

/// Horizontal bar chart of a frequency table, one bar per row.
///
/// Row 0 of the table sits at the bottom of the plot, matching the upward
/// y axis of the chart coordinates.
pub struct BarChart<'a> {
    table: &'a FrequencyTable,
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    label_size: u32,
}

impl<'a> BarChart<'a> {
    pub fn new(table: &'a FrequencyTable, title: &'a str, x_label: &'a str, y_label: &'a str) -> Self {
        Self {
            table,
            title,
            x_label,
            y_label,
            label_size: DEFAULT_LABEL_SIZE,
        }
    }

    /// Font size for the y tick labels, in points.
    pub fn label_size(mut self, size: u32) -> Self {
        self.label_size = size;
        self
    }

    /// Render the chart into a fresh RGB image.
    pub fn render(&self, theme: Theme) -> Result<RgbImage, ChartError> {
        let mut buffer = vec![0u8; (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (FIGURE_WIDTH, FIGURE_HEIGHT))
                .into_drawing_area();
            self.draw(&root, theme)?;
            root.present().map_err(|e| ChartError::Drawing(e.to_string()))?;
        }
        RgbImage::from_raw(FIGURE_WIDTH, FIGURE_HEIGHT, buffer).ok_or(ChartError::Buffer)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: Theme,
    ) -> Result<(), ChartError> {
        let background = theme.background();
        let bar_color = theme.bar();
        let text_color = theme.text();
        let axis_color = theme.axis();

        root.fill(&background)
            .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

        let labels = self.table.labels();
        let tick_size = DEFAULT_LABEL_SIZE * FONT_SCALE;
        let y_tick_size = self.label_size * FONT_SCALE;

        let title_style = ("sans-serif", 12 * FONT_SCALE).into_font().color(&text_color);
        let desc_style = ("sans-serif", tick_size).into_font().color(&text_color);
        let x_tick_style = ("sans-serif", tick_size).into_font().color(&text_color);
        let y_tick_style = ("sans-serif", y_tick_size).into_font().color(&text_color);

        // Size the label area to the widest category name so long labels
        // are not clipped, capped at a third of the figure.
        let y_label_area = labels
            .iter()
            .map(|label| {
                root.estimate_text_size(label, &y_tick_style)
                    .map(|(w, _)| w)
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
            .min(FIGURE_WIDTH / 3)
            + 16;

        let x_max = (self.table.max_count().max(1) as f64) * 1.05;
        let n = self.table.len();

        let mut chart = ChartBuilder::on(root)
            .caption(self.title, title_style)
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(0f64..x_max, (0..n).into_segmented())
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        let count_label = |x: &f64| format!("{:.0}", x);
        let category_label = |y: &SegmentValue<usize>| match y {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        // Label areas exist only on the left and bottom, so the top and
        // right sides carry no axis line.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(&axis_color)
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .axis_desc_style(desc_style)
            .x_label_style(x_tick_style)
            .y_label_style(y_tick_style)
            .x_label_formatter(&count_label)
            .y_label_formatter(&category_label)
            .y_labels(n + 1)
            .draw()
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        chart
            .draw_series(self.table.rows().iter().enumerate().map(|(i, &(_, count))| {
                let mut bar = Rectangle::new(
                    [
                        (0f64, SegmentValue::Exact(i)),
                        (count as f64, SegmentValue::Exact(i + 1)),
                    ],
                    bar_color.filled(),
                );
                bar.set_margin(5, 5, 0, 0);
                bar
            }))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn age_table() -> FrequencyTable {
        let df = df!("AgeRange" => &["25-34", "35-44", "25-34"]).unwrap();
        FrequencyTable::from_column(&df, "AgeRange")
            .unwrap()
            .sorted_by_label()
    }

    #[test]
    #[ignore = "font rendering unavailable in headless environments"]
    fn renders_at_figure_size_on_theme_background() {
        let table = age_table();
        let chart = BarChart::new(&table, "Age Distribution", "Count", "Age Range");
        let image = chart.render(Theme::Dark).unwrap();
        assert_eq!(image.dimensions(), (FIGURE_WIDTH, FIGURE_HEIGHT));
        let corner = image.get_pixel(0, 0);
        assert_eq!(corner.0, [11, 17, 22]);
    }
}

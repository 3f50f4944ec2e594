//! Pie chart rendering.
//!
//! Slices are polygon fans in pixel space. The first slice starts at the
//! top of the circle and slices advance counterclockwise.

use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::theme::SLICE_PALETTE;
use crate::charts::{ChartError, Theme, FIGURE_HEIGHT, FIGURE_WIDTH};
use crate::data::FrequencyTable;

const START_ANGLE: f64 = 90.0;
const ARC_STEPS: usize = 100;
const RADIUS: f64 = 250.0;
// Label and percentage distances from the center, as fractions of the radius.
const LABEL_DISTANCE: f64 = 1.1;
const PERCENT_DISTANCE: f64 = 0.6;
/// Slices below this share of the total keep their text hidden.
const ANNOTATION_THRESHOLD: f64 = 1.0;

/// Pie chart of a frequency table, one slice per row.
pub struct PieChart<'a> {
    table: &'a FrequencyTable,
    title: &'a str,
}

impl<'a> PieChart<'a> {
    pub fn new(table: &'a FrequencyTable, title: &'a str) -> Self {
        Self { table, title }
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
        let text_color = theme.text();

        root.fill(&background)
            .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

        let title_style = ("sans-serif", 24)
            .into_font()
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(self.title, &title_style, (FIGURE_WIDTH as i32 / 2, 20))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let total = self.table.total();
        if total == 0 {
            return Ok(());
        }

        let center = (FIGURE_WIDTH as i32 / 2, FIGURE_HEIGHT as i32 / 2 + 20);
        let label_style = ("sans-serif", 20)
            .into_font()
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let mut start = START_ANGLE;
        for (i, (label, count)) in self.table.rows().iter().enumerate() {
            let share = percent_share(*count, total);
            let sweep = share * 360.0 / 100.0;
            let color = SLICE_PALETTE[i % SLICE_PALETTE.len()];

            root.draw(&Polygon::new(
                slice_points(center, RADIUS, start, sweep),
                color.filled(),
            ))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

            let mid = start + sweep / 2.0;
            if share >= ANNOTATION_THRESHOLD {
                root.draw_text(label, &label_style, point_at(center, RADIUS * LABEL_DISTANCE, mid))
                    .map_err(|e| ChartError::Drawing(e.to_string()))?;
            }
            if let Some(percent) = percent_text(share) {
                root.draw_text(
                    &percent,
                    &label_style,
                    point_at(center, RADIUS * PERCENT_DISTANCE, mid),
                )
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            }

            start += sweep;
        }

        Ok(())
    }
}

/// Share of the total in percent. The product comes before the division
/// so whole percent shares compare exactly against the threshold.
fn percent_share(count: u64, total: u64) -> f64 {
    count as f64 * 100.0 / total as f64
}

/// Percentage text for a slice, or None when the share stays hidden.
fn percent_text(share: f64) -> Option<String> {
    if share >= ANNOTATION_THRESHOLD {
        Some(format!("{:.1}%", share))
    } else {
        None
    }
}

/// Pixel position at a distance from the center along an angle in degrees.
/// Screen y grows downward, so the y offset is subtracted to keep angles
/// counterclockwise.
fn point_at(center: (i32, i32), radius: f64, angle_deg: f64) -> (i32, i32) {
    let rad = angle_deg.to_radians();
    (
        center.0 + (radius * rad.cos()).round() as i32,
        center.1 - (radius * rad.sin()).round() as i32,
    )
}

/// Polygon fan for one slice, center first, then the arc.
fn slice_points(center: (i32, i32), radius: f64, start_deg: f64, sweep_deg: f64) -> Vec<(i32, i32)> {
    let mut points = Vec::with_capacity(ARC_STEPS + 2);
    points.push(center);
    for step in 0..=ARC_STEPS {
        let angle = start_deg + sweep_deg * step as f64 / ARC_STEPS as f64;
        points.push(point_at(center, radius, angle));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 100, true)]
    #[case(3, 300, true)]
    #[case(1, 101, false)]
    #[case(0, 10, false)]
    #[case(50, 100, true)]
    fn annotation_threshold_is_inclusive(
        #[case] count: u64,
        #[case] total: u64,
        #[case] annotated: bool,
    ) {
        let share = percent_share(count, total);
        assert_eq!(percent_text(share).is_some(), annotated);
        assert_eq!(share >= ANNOTATION_THRESHOLD, annotated);
    }

    #[test]
    fn whole_percent_share_is_exact() {
        assert_eq!(percent_share(1, 100), 1.0);
        assert_eq!(percent_share(25, 100), 25.0);
    }

    #[test]
    fn percent_text_has_one_decimal() {
        assert_eq!(percent_text(12.34).as_deref(), Some("12.3%"));
        assert_eq!(percent_text(100.0).as_deref(), Some("100.0%"));
    }

    #[test]
    fn first_slice_starts_at_the_top() {
        let points = slice_points((100, 100), 50.0, START_ANGLE, 90.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (100, 50));
        assert_eq!(points[points.len() - 1], (50, 100));
    }

    #[test]
    fn annotations_sit_at_their_configured_radii() {
        let center = (480, 380);
        let distance = |p: (i32, i32)| {
            (((p.0 - center.0).pow(2) + (p.1 - center.1).pow(2)) as f64).sqrt()
        };

        let label = point_at(center, RADIUS * LABEL_DISTANCE, 30.0);
        let percent = point_at(center, RADIUS * PERCENT_DISTANCE, 30.0);
        assert!((distance(label) - RADIUS * LABEL_DISTANCE).abs() < 1.0);
        assert!((distance(percent) - RADIUS * PERCENT_DISTANCE).abs() < 1.0);
    }

    #[test]
    fn shares_cover_the_whole_circle() {
        let df = df!("Component" => &["Army", "Navy", "Air Force", "Army"]).unwrap();
        let table = FrequencyTable::from_column(&df, "Component")
            .unwrap()
            .ranked_by_count();
        let total = table.total();
        let degrees: f64 = table
            .rows()
            .iter()
            .map(|&(_, count)| percent_share(count, total) * 360.0 / 100.0)
            .sum();
        assert!((degrees - 360.0).abs() < 1e-9);
    }
}

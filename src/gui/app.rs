//! Sequential report figure viewer.
//!
//! One native window walks through the rendered figures. Closing the
//! window advances to the next figure; closing the last one ends the
//! process.

use egui::{ColorImage, Frame, TextureHandle, TextureOptions, ViewportCommand};

use crate::charts::{Figure, Theme};

/// Main application window.
pub struct ReportViewer {
    figures: Vec<Figure>,
    theme: Theme,
    current: usize,
    texture: Option<TextureHandle>,
}

impl ReportViewer {
    pub fn new(_cc: &eframe::CreationContext<'_>, figures: Vec<Figure>, theme: Theme) -> Self {
        Self {
            figures,
            theme,
            current: 0,
            texture: None,
        }
    }

    /// Window title for the figure at `index`.
    pub fn window_title(figures: &[Figure], index: usize) -> String {
        format!(
            "Figure {}/{}: {}",
            index + 1,
            figures.len(),
            figures.get(index).map(|f| f.title.as_str()).unwrap_or_default()
        )
    }

    fn current_texture(&mut self, ctx: &egui::Context) -> Option<TextureHandle> {
        let figure = self.figures.get(self.current)?;
        if self.texture.is_none() {
            let (width, height) = figure.image.dimensions();
            let color_image =
                ColorImage::from_rgb([width as usize, height as usize], figure.image.as_raw());
            self.texture =
                Some(ctx.load_texture(figure.title.clone(), color_image, TextureOptions::LINEAR));
        }
        self.texture.clone()
    }
}

impl eframe::App for ReportViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A close request on any figure but the last advances the report
        // instead of closing the window.
        if ctx.input(|i| i.viewport().close_requested())
            && self.current + 1 < self.figures.len()
        {
            self.current += 1;
            self.texture = None;
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(ViewportCommand::Title(Self::window_title(
                &self.figures,
                self.current,
            )));
            log::debug!("Advanced to figure {}", self.current + 1);
        }

        let texture = self.current_texture(ctx);

        egui::CentralPanel::default()
            .frame(Frame::none().fill(self.theme.background_fill()))
            .show(ctx, |ui| {
                if let Some(texture) = &texture {
                    let available = ui.available_size();
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Image::new((texture.id(), texture.size_vec2()))
                                .maintain_aspect_ratio(true)
                                .max_size(available),
                        );
                    });
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn figure(title: &str) -> Figure {
        Figure {
            title: title.to_string(),
            image: RgbImage::new(4, 4),
        }
    }

    #[test]
    fn window_title_counts_through_the_report() {
        let figures = vec![figure("Age Distribution"), figure("Component Distribution")];
        assert_eq!(
            ReportViewer::window_title(&figures, 0),
            "Figure 1/2: Age Distribution"
        );
        assert_eq!(
            ReportViewer::window_title(&figures, 1),
            "Figure 2/2: Component Distribution"
        );
    }

    #[test]
    fn window_title_survives_an_out_of_range_index() {
        assert_eq!(ReportViewer::window_title(&[], 0), "Figure 1/0: ");
    }
}

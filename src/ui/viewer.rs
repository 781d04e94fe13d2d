use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::cli::RuntimeFlags;
use crate::core::image_loader::LoadedImage;

/// The viewer itself: one texture, one window, one way out.
///
/// Two states only: running, and terminated by a key press. Escape always
/// quits; with `-Q` any key does.
pub struct ViewerApp {
    texture: TextureHandle,
    quit_on_any_key: bool,
}

impl ViewerApp {
    pub fn new(ctx: &egui::Context, loaded: &LoadedImage, flags: &RuntimeFlags) -> Self {
        let rgba = loaded.image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture("viewer_image", color_image, TextureOptions::LINEAR);

        Self {
            texture,
            quit_on_any_key: flags.quit_on_any_key,
        }
    }

    fn quit_requested(&self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if self.quit_on_any_key {
                i.events
                    .iter()
                    .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
            } else {
                i.key_pressed(egui::Key::Escape)
            }
        })
    }

    fn render_image(&self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let image_size = self.texture.size_vec2();

        // Contain fit: scale to touch the window on one axis, center on the
        // other. The window already has the image's aspect ratio, so this
        // normally fills it edge to edge.
        let scale = (available_size.x / image_size.x).min(available_size.y / image_size.y);
        let scaled_size = image_size * scale;

        let rect = egui::Rect::from_center_size(ui.available_rect_before_wrap().center(), scaled_size);
        let response = ui.allocate_rect(rect, egui::Sense::hover());
        egui::Image::from_texture(&self.texture)
            .fit_to_exact_size(scaled_size)
            .paint_at(ui, response.rect);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.quit_requested(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                self.render_image(ui);
            });
    }
}

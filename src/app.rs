use anyhow::{anyhow, Result};
use log::debug;

use crate::cli::RuntimeFlags;
use crate::core::image_loader::LoadedImage;
use crate::ui::viewer::ViewerApp;

pub const APP_NAME: &str = "imgpreview";

/// Builds the window and hands the process over to the event loop. Blocks
/// until the viewer quits.
///
/// The window is fixed at the computed display size and centered on the
/// primary monitor. Always-on-top is a best-effort request; not every
/// platform honors it, which is a known limitation rather than a bug.
pub fn run(flags: RuntimeFlags, image: LoadedImage) -> Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([image.display_width as f32, image.display_height as f32])
        .with_resizable(false);
    if flags.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    debug!(
        "opening {}x{} window for {}",
        image.display_width,
        image.display_height,
        flags.image_path.display()
    );

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(&cc.egui_ctx, &image, &flags)))),
    )
    .map_err(|e| anyhow!("failed to start the viewer: {e}"))
}

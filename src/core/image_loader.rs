use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::config::Config;
use crate::core::fit::fit_within;
use crate::core::image_format::DecodeStrategy;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open image file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded image together with its intrinsic and display dimensions.
pub struct LoadedImage {
    pub image: DynamicImage,
    /// Intrinsic pixel width.
    pub width: u32,
    /// Intrinsic pixel height.
    pub height: u32,
    /// Window width computed from the configured bounding box.
    pub display_width: u32,
    /// Window height computed from the configured bounding box.
    pub display_height: u32,
}

/// Opens and decodes the image at `path`, then computes its display size
/// from the configured bounds. Files with a recognized extension go through
/// the matching decoder; everything else is sniffed by content.
pub fn load_image(path: &Path, config: &Config) -> Result<LoadedImage, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let image = match DecodeStrategy::from_path(path).image_format() {
        Some(format) => image::load(reader, format),
        None => ImageReader::new(reader)
            .with_guessed_format()
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .decode(),
    }
    .map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (image.width(), image.height());
    let (display_width, display_height) =
        fit_within(width, height, config.display.width, config.display.height);

    Ok(LoadedImage {
        image,
        width,
        height,
        display_width,
        display_height,
    })
}

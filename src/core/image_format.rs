use std::path::Path;

use image::ImageFormat;

/// How a file should be decoded, keyed by its normalized extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    Jpeg,
    Png,
    Gif,
    WebP,
    /// Unknown or missing extension: guess the format from the file contents.
    Sniff,
}

impl DecodeStrategy {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => DecodeStrategy::Jpeg,
            "png" => DecodeStrategy::Png,
            "gif" => DecodeStrategy::Gif,
            "webp" => DecodeStrategy::WebP,
            _ => DecodeStrategy::Sniff,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DecodeStrategy::Sniff)
    }

    /// The dedicated decoder format, or `None` for the sniffing fallback.
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            DecodeStrategy::Jpeg => Some(ImageFormat::Jpeg),
            DecodeStrategy::Png => Some(ImageFormat::Png),
            DecodeStrategy::Gif => Some(ImageFormat::Gif),
            DecodeStrategy::WebP => Some(ImageFormat::WebP),
            DecodeStrategy::Sniff => None,
        }
    }
}

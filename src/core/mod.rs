pub mod fit;
pub mod image_format;
pub mod image_loader;

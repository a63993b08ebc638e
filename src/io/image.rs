//! PNG decode/encode at the raster boundary

use crate::io::error::{PreprocessError, Result};
use crate::raster::RasterImage;
use image::RgbaImage;
use std::path::Path;

/// Decode any supported image file into an RGBA8 raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded dimensions are outside the supported range
pub fn load_raster(path: &Path) -> Result<RasterImage> {
    let decoded = image::open(path).map_err(|e| PreprocessError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::new(width, height, rgba.into_raw())
}

/// Encode `raster` as PNG at `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_raster(raster: &RasterImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PreprocessError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let buffer = RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
        .ok_or_else(|| PreprocessError::BufferLength {
            width: raster.width(),
            height: raster.height(),
            expected: raster.pixel_count() * 4,
            actual: raster.pixels().len(),
        })?;

    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PreprocessError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

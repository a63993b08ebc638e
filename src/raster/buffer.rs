//! Canonical RGBA8 raster buffer
//!
//! Pixels are stored row-major, four bytes per pixel (R, G, B, A), with no
//! row padding. The `width * height * 4` length invariant is checked at
//! construction, so every processor can index the buffer without further
//! validation. Processors never mutate their input; they build a new buffer.

use crate::io::configuration::{CHANNELS, MAX_IMAGE_DIMENSION};
use crate::io::error::{PreprocessError, Result};

/// Owned RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Byte length of an RGBA8 buffer with the given dimensions
///
/// # Errors
///
/// Returns an error if either side is zero, exceeds the dimension limit, or
/// the byte count overflows `usize`
pub fn buffer_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PreprocessError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be positive",
        });
    }
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(PreprocessError::InvalidDimensions {
            width,
            height,
            reason: "side exceeds maximum image dimension",
        });
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(CHANNELS))
        .ok_or(PreprocessError::InvalidDimensions {
            width,
            height,
            reason: "pixel count overflows",
        })
}

// Reserves up front so oversized requests surface as errors, not aborts
fn reserve_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_alloc_error| PreprocessError::Allocation { bytes: len })?;
    pixels.resize(len, 0);
    Ok(pixels)
}

impl RasterImage {
    /// Wrap an existing RGBA8 buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the buffer length is
    /// not exactly `width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(PreprocessError::BufferLength {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a fully transparent black image
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the buffer cannot be
    /// allocated
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let pixels = reserve_zeroed(buffer_len(width, height)?)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image where every pixel has the same colour
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the buffer cannot be
    /// allocated
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self> {
        let mut image = Self::blank(width, height)?;
        for pixel in image.pixels.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&color);
        }
        Ok(image)
    }

    /// Create a blank image sharing this image's dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated
    pub fn blank_like(&self) -> Result<Self> {
        Self::blank(self.width, self.height)
    }

    /// Copy this image into a freshly reserved buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated
    pub fn try_clone(&self) -> Result<Self> {
        let mut pixels = reserve_zeroed(self.pixels.len())?;
        pixels.copy_from_slice(&self.pixels);
        Ok(Self {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw interleaved RGBA bytes
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image and return its buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte offset of the pixel at `(x, y)`
    pub const fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read one pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        self.pixels
            .get(offset..offset + CHANNELS)
            .and_then(|slice| slice.try_into().ok())
    }

    /// Overwrite one pixel; writes outside the image are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        if let Some(slice) = self.pixels.get_mut(offset..offset + CHANNELS) {
            slice.copy_from_slice(&color);
        }
    }

    /// Re-check the length invariant
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer no longer matches the dimensions
    pub fn validate(&self) -> Result<()> {
        let expected = buffer_len(self.width, self.height)?;
        if self.pixels.len() == expected {
            Ok(())
        } else {
            Err(PreprocessError::BufferLength {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            })
        }
    }

    /// Write the same value to R, G and B of every pixel
    ///
    /// `values` is indexed row-major, one entry per pixel. Alpha is set to
    /// `alpha` when given, otherwise left as is.
    pub fn fill_gray<I>(&mut self, values: I, alpha: Option<u8>)
    where
        I: IntoIterator<Item = u8>,
    {
        for (pixel, value) in self.pixels.chunks_exact_mut(CHANNELS).zip(values) {
            pixel[0] = value;
            pixel[1] = value;
            pixel[2] = value;
            if let Some(a) = alpha {
                pixel[3] = a;
            }
        }
    }
}

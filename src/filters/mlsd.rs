//! Line-segment map built from greedy gradient walks

use crate::analysis::gradient::{GradientNorm, sobel};
use crate::analysis::grayscale::grayscale;
use crate::analysis::lines::{LineSegment, TraceSettings, trace_lines};
use crate::io::configuration::{
    DEFAULT_INTENSITY, DEFAULT_LENGTH_THRESHOLD, DEFAULT_LINE_THRESHOLD,
};
use crate::io::error::Result;
use crate::math::blend::{to_channel, unit_interval};
use crate::raster::RasterImage;
use crate::render::canvas::draw_line;
use log::debug;

/// Line tracer parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MlsdParams {
    /// Seed threshold as a fraction of 255 (0-1)
    pub line_threshold: f32,
    /// Minimum walk length in steps
    pub length_threshold: u32,
    /// Brightness of drawn lines (0-1)
    pub intensity: f32,
}

impl Default for MlsdParams {
    fn default() -> Self {
        Self {
            line_threshold: DEFAULT_LINE_THRESHOLD,
            length_threshold: DEFAULT_LENGTH_THRESHOLD,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl MlsdParams {
    /// Copy with every field clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            line_threshold: unit_interval(
                "line_threshold",
                self.line_threshold,
                DEFAULT_LINE_THRESHOLD,
            ),
            length_threshold: self.length_threshold.max(1),
            intensity: unit_interval("intensity", self.intensity, DEFAULT_INTENSITY),
        }
    }
}

// Expects parameters that are already normalised
fn trace(image: &RasterImage, params: &MlsdParams) -> Vec<LineSegment> {
    let gradient = sobel(&grayscale(image), GradientNorm::L2);
    trace_lines(
        &gradient.magnitude,
        TraceSettings {
            line_threshold: params.line_threshold,
            length_threshold: params.length_threshold,
        },
    )
}

/// Trace the segments of `image` without rendering them
///
/// # Errors
///
/// Returns an error if the input buffer is malformed
pub fn detect(image: &RasterImage, params: &MlsdParams) -> Result<Vec<LineSegment>> {
    image.validate()?;
    Ok(trace(image, &params.normalized()))
}

/// Render traced segments as straight lines on an opaque black canvas
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &MlsdParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();
    let segments = trace(image, &params);
    let level = to_channel(255.0 * params.intensity);

    let mut output = RasterImage::filled(image.width(), image.height(), [0, 0, 0, 255])?;
    for segment in &segments {
        draw_line(
            &mut output,
            (i64::from(segment.start.0), i64::from(segment.start.1)),
            (i64::from(segment.end.0), i64::from(segment.end.1)),
            [level; 3],
        );
    }

    debug!("rendered {} line segments at level {level}", segments.len());
    Ok(output)
}

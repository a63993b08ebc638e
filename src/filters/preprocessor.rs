//! Single dispatch point over every conditioning filter

use crate::filters::adjust::{self, EdgeAdjustments};
use crate::filters::canny::{self, CannyParams};
use crate::filters::depth::{self, DepthParams};
use crate::filters::inpaint_guide::{self, InpaintGuideParams};
use crate::filters::laplacian::{self, LaplacianParams};
use crate::filters::lineart::{self, LineartParams};
use crate::filters::mlsd::{self, MlsdParams};
use crate::filters::normal::{self, NormalParams};
use crate::filters::recolor::{self, RecolorParams};
use crate::filters::scribble::{self, ScribbleParams};
use crate::filters::shuffle::{self, ShuffleParams};
use crate::filters::sobel::{self, SobelParams};
use crate::filters::threshold::{self, ThresholdParams};
use crate::filters::tile_resample::{self, TileResampleParams};
use crate::io::error::Result;
use crate::raster::RasterImage;
use clap::ValueEnum;
use log::debug;
use rand::Rng;
use std::time::Instant;

/// Filter identifiers as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Double-threshold edge map
    Canny,
    /// Traced line segments
    Mlsd,
    /// Randomised tile relocation
    Shuffle,
    /// Luminance binarization
    Threshold,
    /// Mean-blend pixelation
    TileResample,
    /// Inpainting guide overlay
    InpaintGuide,
    /// Raw Sobel magnitude
    Sobel,
    /// Absolute Laplacian response
    Laplacian,
    /// Brightness-as-depth fallback
    Depth,
    /// Residual over a wide Gaussian background
    Lineart,
    /// Binary difference-of-Gaussians strokes
    Scribble,
    /// Gradient surface normals
    Normal,
    /// Gray level tinted toward a colour
    Recolor,
}

/// A filter together with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preprocessor {
    /// Canny-style edge map
    Canny(CannyParams),
    /// Line segment map
    Mlsd(MlsdParams),
    /// Tile shuffle
    Shuffle(ShuffleParams),
    /// Threshold binarizer
    Threshold(ThresholdParams),
    /// Tile mean-blend resampler
    TileResample(TileResampleParams),
    /// Inpainting guide
    InpaintGuide(InpaintGuideParams),
    /// Sobel magnitude map
    Sobel(SobelParams),
    /// Laplacian map
    Laplacian(LaplacianParams),
    /// Depth fallback map
    Depth(DepthParams),
    /// Lineart map
    Lineart(LineartParams),
    /// Scribble map
    Scribble(ScribbleParams),
    /// Normal map
    Normal(NormalParams),
    /// Colour tint
    Recolor(RecolorParams),
}

impl Preprocessor {
    /// Filter with default parameters
    pub fn with_defaults(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Canny => Self::Canny(CannyParams::default()),
            FilterKind::Mlsd => Self::Mlsd(MlsdParams::default()),
            FilterKind::Shuffle => Self::Shuffle(ShuffleParams::default()),
            FilterKind::Threshold => Self::Threshold(ThresholdParams::default()),
            FilterKind::TileResample => Self::TileResample(TileResampleParams::default()),
            FilterKind::InpaintGuide => Self::InpaintGuide(InpaintGuideParams::default()),
            FilterKind::Sobel => Self::Sobel(SobelParams::default()),
            FilterKind::Laplacian => Self::Laplacian(LaplacianParams::default()),
            FilterKind::Depth => Self::Depth(DepthParams::default()),
            FilterKind::Lineart => Self::Lineart(LineartParams::default()),
            FilterKind::Scribble => Self::Scribble(ScribbleParams::default()),
            FilterKind::Normal => Self::Normal(NormalParams::default()),
            FilterKind::Recolor => Self::Recolor(RecolorParams::default()),
        }
    }

    /// Which filter this is
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Canny(_) => FilterKind::Canny,
            Self::Mlsd(_) => FilterKind::Mlsd,
            Self::Shuffle(_) => FilterKind::Shuffle,
            Self::Threshold(_) => FilterKind::Threshold,
            Self::TileResample(_) => FilterKind::TileResample,
            Self::InpaintGuide(_) => FilterKind::InpaintGuide,
            Self::Sobel(_) => FilterKind::Sobel,
            Self::Laplacian(_) => FilterKind::Laplacian,
            Self::Depth(_) => FilterKind::Depth,
            Self::Lineart(_) => FilterKind::Lineart,
            Self::Scribble(_) => FilterKind::Scribble,
            Self::Normal(_) => FilterKind::Normal,
            Self::Recolor(_) => FilterKind::Recolor,
        }
    }

    /// Short machine-friendly name, also used in output file names
    pub const fn name(&self) -> &'static str {
        match self.kind() {
            FilterKind::Canny => "canny",
            FilterKind::Mlsd => "mlsd",
            FilterKind::Shuffle => "shuffle",
            FilterKind::Threshold => "threshold",
            FilterKind::TileResample => "tile_resample",
            FilterKind::InpaintGuide => "inpaint_guide",
            FilterKind::Sobel => "sobel",
            FilterKind::Laplacian => "laplacian",
            FilterKind::Depth => "depth",
            FilterKind::Lineart => "lineart",
            FilterKind::Scribble => "scribble",
            FilterKind::Normal => "normal",
            FilterKind::Recolor => "recolor",
        }
    }

    /// True for filters whose output is a grayscale structure map
    pub const fn is_edge_map(&self) -> bool {
        matches!(
            self.kind(),
            FilterKind::Canny
                | FilterKind::Mlsd
                | FilterKind::Sobel
                | FilterKind::Laplacian
                | FilterKind::Lineart
                | FilterKind::Scribble
        )
    }

    /// Parameter names and display values, in declaration order
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Canny(p) => vec![
                ("low_threshold", p.low_threshold.to_string()),
                ("high_threshold", p.high_threshold.to_string()),
                ("use_l2_gradient", p.use_l2_gradient.to_string()),
                ("gaussian_blur", p.gaussian_blur.to_string()),
                ("strategy", format!("{:?}", p.strategy)),
            ],
            Self::Mlsd(p) => vec![
                ("line_threshold", p.line_threshold.to_string()),
                ("length_threshold", p.length_threshold.to_string()),
                ("intensity", p.intensity.to_string()),
            ],
            Self::Shuffle(p) => vec![
                ("tile_size", p.tile_size.to_string()),
                ("intensity", p.intensity.to_string()),
            ],
            Self::Threshold(p) => vec![
                ("threshold", p.threshold.to_string()),
                ("intensity", p.intensity.to_string()),
                ("invert_colors", p.invert_colors.to_string()),
                ("mode", format!("{:?}", p.mode)),
            ],
            Self::TileResample(p) => vec![
                ("tile_size", p.tile_size.to_string()),
                ("intensity", p.intensity.to_string()),
            ],
            Self::InpaintGuide(p) => vec![("intensity", p.intensity.to_string())],
            Self::Sobel(p) | Self::Laplacian(p) => vec![
                ("scale", p.scale.to_string()),
                ("delta", p.delta.to_string()),
            ],
            Self::Depth(p) => vec![
                ("contrast", p.contrast.to_string()),
                ("brightness", p.brightness.to_string()),
                ("normalize", p.normalize.to_string()),
                ("invert", p.invert.to_string()),
                ("edge_weight", p.edge_weight.to_string()),
                ("depth_strength", p.depth_strength.to_string()),
                ("smoothing", p.smoothing.to_string()),
            ],
            Self::Lineart(p) => vec![("sigma", p.sigma.to_string())],
            Self::Scribble(p) => vec![("threshold", p.threshold.to_string())],
            Self::Normal(p) => vec![("strength", p.strength.to_string())],
            Self::Recolor(p) => vec![
                ("method", format!("{:?}", p.method)),
                (
                    "color",
                    format!("#{:02x}{:02x}{:02x}", p.color[0], p.color[1], p.color[2]),
                ),
            ],
        }
    }

    /// Run the filter; `rng` is only drawn from by the shuffle
    ///
    /// # Errors
    ///
    /// Propagates the chosen filter's contract violations and allocation
    /// failures
    pub fn process<R: Rng + ?Sized>(&self, image: &RasterImage, rng: &mut R) -> Result<RasterImage> {
        let start = Instant::now();
        let output = match self {
            Self::Canny(p) => canny::process(image, p),
            Self::Mlsd(p) => mlsd::process(image, p),
            Self::Shuffle(p) => shuffle::process(image, p, rng),
            Self::Threshold(p) => threshold::process(image, p),
            Self::TileResample(p) => tile_resample::process(image, p),
            Self::InpaintGuide(p) => inpaint_guide::process(image, p),
            Self::Sobel(p) => sobel::process(image, p),
            Self::Laplacian(p) => laplacian::process(image, p),
            Self::Depth(p) => depth::process(image, p),
            Self::Lineart(p) => lineart::process(image, p),
            Self::Scribble(p) => scribble::process(image, p),
            Self::Normal(p) => normal::process(image, p),
            Self::Recolor(p) => recolor::process(image, p),
        }?;

        debug!(
            "{} on {}x{} took {:?}",
            self.name(),
            image.width(),
            image.height(),
            start.elapsed()
        );
        Ok(output)
    }

    /// Run the filter, then the edge post-pass when it applies
    ///
    /// Adjustments are ignored for filters that are not edge maps.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Preprocessor::process`]
    pub fn process_adjusted<R: Rng + ?Sized>(
        &self,
        image: &RasterImage,
        adjustments: &EdgeAdjustments,
        rng: &mut R,
    ) -> Result<RasterImage> {
        let output = self.process(image, rng)?;
        if self.is_edge_map() && !adjustments.is_neutral() {
            adjust::process(&output, adjustments)
        } else {
            Ok(output)
        }
    }
}

//! Algorithm constants and parameter defaults

// Raster limits
/// Maximum accepted width or height in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 32_768;
/// Bytes per RGBA8 pixel
pub const CHANNELS: usize = 4;

// BT.601 luminance weights
/// Red weight for luminance
pub const LUMA_R: f32 = 0.299;
/// Green weight for luminance
pub const LUMA_G: f32 = 0.587;
/// Blue weight for luminance
pub const LUMA_B: f32 = 0.114;

// Edge classification levels
/// Edge map value for pixels above the high threshold
pub const STRONG_EDGE: u8 = 255;
/// Edge map value for pixels between the thresholds
pub const WEAK_EDGE: u8 = 128;

/// Canny low threshold default
pub const DEFAULT_LOW_THRESHOLD: f32 = 100.0;
/// Canny high threshold default
pub const DEFAULT_HIGH_THRESHOLD: f32 = 200.0;
/// Gaussian sigma applied before the gradient pass
pub const DEFAULT_GAUSSIAN_BLUR: f32 = 1.4;
/// Largest accepted Gaussian sigma for any smoothing pass
pub const MAX_GAUSSIAN_SIGMA: f32 = 100.0;
/// Gaussian kernel radius in multiples of sigma
pub const GAUSSIAN_RADIUS_SIGMAS: f32 = 3.0;

// Line tracing
/// Walks stop when no unvisited neighbour exceeds this magnitude
pub const LINE_WALK_CUTOFF: f32 = 50.0;
/// Fraction of 255 a pixel must exceed to start a walk
pub const DEFAULT_LINE_THRESHOLD: f32 = 0.1;
/// Minimum number of steps for a walk to be kept
pub const DEFAULT_LENGTH_THRESHOLD: u32 = 10;

// Tile operations
/// Tile edge length for the shuffler
pub const DEFAULT_SHUFFLE_TILE_SIZE: u32 = 64;
/// Tile edge length for the mean-blend resampler
pub const DEFAULT_RESAMPLE_TILE_SIZE: u32 = 8;

/// Threshold binarizer cut level
pub const DEFAULT_BINARY_THRESHOLD: f32 = 128.0;

/// Shared default for every `intensity` parameter
pub const DEFAULT_INTENSITY: f32 = 1.0;

// Gradient map scaling shared by the Sobel and Laplacian outputs
/// Multiplier applied to the response
pub const DEFAULT_RESPONSE_SCALE: f32 = 1.0;
/// Offset added after scaling
pub const DEFAULT_RESPONSE_DELTA: f32 = 0.0;

// Brightness-as-depth fallback
/// Contrast applied to normalised luminance
pub const DEFAULT_DEPTH_CONTRAST: f32 = 1.2;
/// Brightness offset applied after contrast
pub const DEFAULT_DEPTH_BRIGHTNESS: f32 = 0.1;
/// Share of the Canny edge cue in the depth blend
pub const DEFAULT_DEPTH_EDGE_WEIGHT: f32 = 0.2;
/// Canny low threshold used for the depth edge cue
pub const DEPTH_EDGE_LOW: f32 = 50.0;
/// Canny high threshold used for the depth edge cue
pub const DEPTH_EDGE_HIGH: f32 = 150.0;
/// Spread of depth values around mid-gray
pub const DEFAULT_DEPTH_STRENGTH: f32 = 1.0;
/// Largest Gaussian sigma for depth smoothing
pub const MAX_DEPTH_SMOOTHING: f32 = 10.0;

// Lineart and scribble extraction
/// Gaussian sigma of the lineart background estimate
pub const DEFAULT_LINEART_SIGMA: f32 = 6.0;
/// Residuals at or below this level are ignored when picking the lineart scale
pub const LINEART_NOISE_FLOOR: f32 = 8.0;
/// Smallest divisor used to normalise lineart residuals
pub const LINEART_MIN_SCALE: f32 = 16.0;
/// Output level of a lineart residual equal to the divisor
pub const LINEART_GAIN: f32 = 127.0;
/// Sigma of the fine scribble blur
pub const SCRIBBLE_FINE_SIGMA: f32 = 0.5;
/// Sigma of the coarse scribble blur
pub const SCRIBBLE_COARSE_SIGMA: f32 = 5.0;
/// Scribble cut level applied to the doubled Gaussian difference
pub const DEFAULT_SCRIBBLE_THRESHOLD: f32 = 32.0;

/// Multiplier on gradients before they tilt the surface normal
pub const DEFAULT_NORMAL_STRENGTH: f32 = 1.0;

/// Largest dilation box for edge post-processing
pub const MAX_EDGE_WIDTH: u32 = 5;

// Inpaint guide overlay
/// Opacity of the black wash over the source
pub const GUIDE_WASH_OPACITY: f32 = 0.3;
/// Spacing of guide grid lines in pixels
pub const GUIDE_GRID_SPACING: u32 = 32;
/// Grid line opacity at full intensity
pub const GUIDE_GRID_ALPHA: f32 = 0.2;
/// Mask indicator opacity at full intensity
pub const GUIDE_MASK_ALPHA: f32 = 0.5;
/// Mask radius as a fraction of the shorter image side
pub const GUIDE_MASK_RADIUS_FRACTION: f32 = 0.15;
/// Caption drawn under the mask indicator
pub const GUIDE_LABEL: &str = "INPAINT AREA";

// Annotation box
/// Height of one annotation text line
pub const ANNOTATION_LINE_HEIGHT: u32 = 20;
/// Extra height added around the annotation lines
pub const ANNOTATION_PADDING: u32 = 40;
/// Horizontal inset of annotation text
pub const ANNOTATION_MARGIN: u32 = 10;
/// Opacity of the annotation backdrop
pub const ANNOTATION_BACKDROP_ALPHA: f32 = 0.7;
/// Integer upscale applied to the bitmap font
pub const FONT_SCALE: u32 = 2;

/// Fixed seed for reproducible tile shuffles
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Extension of processed images
pub const OUTPUT_EXTENSION: &str = "png";

//! Error types for buffer validation, parameter contracts and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all preprocessing operations
#[derive(Debug)]
pub enum PreprocessError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or save a processed image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Image dimensions cannot describe a raster buffer
    ///
    /// Raised for zero-sized sides and for sides above
    /// [`MAX_IMAGE_DIMENSION`](crate::io::configuration::MAX_IMAGE_DIMENSION).
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
        /// Which limit was violated
        reason: &'static str,
    },

    /// Pixel buffer length disagrees with `width * height * 4`
    BufferLength {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Byte count implied by the dimensions
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// Parameter violates a contract that clamping cannot repair
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Output buffer could not be reserved
    Allocation {
        /// Number of bytes requested
        bytes: usize,
    },
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image from '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid image dimensions {width}x{height}: {reason}")
            }
            Self::BufferLength {
                width,
                height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Pixel buffer for {width}x{height} image must hold {expected} bytes, got {actual}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Allocation { bytes } => {
                write!(f, "Failed to allocate {bytes} bytes for output buffer")
            }
        }
    }
}

impl std::error::Error for PreprocessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for preprocessing results
pub type Result<T> = std::result::Result<T, PreprocessError>;

impl From<std::io::Error> for PreprocessError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PreprocessError {
    PreprocessError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a path the command line cannot work with
pub fn io_error(msg: &str) -> PreprocessError {
    PreprocessError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

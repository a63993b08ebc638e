//! Input/output boundary: command line, image files, errors and constants

/// Command-line parsing and batch orchestration
pub mod cli;
/// Tunable constants and filter defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG decode and encode
pub mod image;
/// Terminal progress bars
pub mod progress;

//! Input/output operations and error handling

/// Command-line parsing and the generate/replay driver
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rasterization of layouts
pub mod image;
/// Text preview of activation masks
pub mod preview;
/// Replay progress display
pub mod progress;

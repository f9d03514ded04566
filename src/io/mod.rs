//! Input handling, configuration, and the command-line front end

/// Command-line arguments and batch file processing
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types for the front end
pub mod error;
/// Splitting puzzle text into shape blocks and region lines
pub mod input;
/// Progress display across regions and files
pub mod progress;

//! Input/output: command line, configuration, parameters, errors, SVG export
//! and progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Constants, defaults and the validated configuration record
pub mod configuration;
/// Error types and context enrichment
pub mod error;
/// Rule parameter maps
pub mod parameters;
/// Cell progress display
pub mod progress;
/// SVG surface and document rendering
pub mod svg;

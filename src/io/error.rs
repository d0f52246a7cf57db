//! Error types and context management for pattern generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Rule index outside the five known rules
    UnimplementedRule {
        /// The requested rule index
        rule: i64,
    },

    /// Random distribution name not supported
    UnimplementedDistribution {
        /// The requested distribution name
        name: String,
    },

    /// Rule option value outside its closed set of choices
    UnimplementedOption {
        /// Name of the option
        parameter: &'static str,
        /// Requested value
        value: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Textual parameter list could not be parsed
    MalformedParameters {
        /// The offending input
        input: String,
        /// Description of what is wrong with it
        reason: String,
    },

    /// Rejection sampling hit its retry cap without accepting a draw
    ///
    /// Occurs for degenerate parameters such as a zero step length, where
    /// almost no draw can satisfy the acceptance bound.
    SamplingExhausted {
        /// The sampling operation that gave up
        operation: &'static str,
        /// Number of draws attempted
        attempts: usize,
        /// Grid cell (x, y) being drawn, when known
        cell: Option<(usize, usize)>,
    },

    /// A surface restore was requested with no saved state
    UnbalancedRestore,

    /// Failed to write the finished SVG document
    SvgExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
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

    /// Numerical setup produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnimplementedRule { rule } => {
                write!(f, "Rule {rule} is not implemented (expected 0 to 4)")
            }
            Self::UnimplementedDistribution { name } => {
                write!(
                    f,
                    "Distribution '{name}' is not implemented (expected uniform, exponential or normal)"
                )
            }
            Self::UnimplementedOption { parameter, value } => {
                write!(f, "Option '{parameter}' = '{value}' is not implemented")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedParameters { input, reason } => {
                write!(f, "Malformed parameters '{input}': {reason}")
            }
            Self::SamplingExhausted {
                operation,
                attempts,
                cell,
            } => {
                write!(f, "Sampling exhausted in {operation} after {attempts} draws")?;
                if let Some((x, y)) = cell {
                    write!(f, " (cell {x},{y})")?;
                }
                Ok(())
            }
            Self::UnbalancedRestore => write!(f, "Restoring from an empty surface state stack"),
            Self::SvgExport { path, source } => {
                write!(f, "Failed to export SVG to '{}': {source}", path.display())
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SvgExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Grid cell (x, y) being drawn
    pub cell: Option<(usize, usize)>,
}

/// Enriches error messages with generation state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the cell position
    ///
    /// # Errors
    ///
    /// Propagates the original error with the cell context applied
    fn with_cell(self, cell: (usize, usize)) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GenerationError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only sampling failures are tied to a position on the grid
            if let GenerationError::SamplingExhausted { cell, .. } = &mut error
                && cell.is_none()
            {
                *cell = context.cell;
            }
            error
        })
    }

    fn with_cell(self, cell: (usize, usize)) -> Result<T> {
        self.with_context(ErrorContext { cell: Some(cell) })
    }
}

impl From<std::io::Error> for GenerationError {
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
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed parameters error
pub fn malformed(input: &str, reason: &impl ToString) -> GenerationError {
    GenerationError::MalformedParameters {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

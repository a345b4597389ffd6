//! Error types for catalog loading, search requests and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all cliff placement operations
///
/// A search that finds no path is not an error; see
/// [`SearchOutcome`](crate::algorithm::search::SearchOutcome).
#[derive(Debug)]
pub enum CliffError {
    /// A catalog record is malformed
    Config {
        /// INI section holding the record
        section: String,
        /// Key inside the section
        field: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// A section referenced by the catalog does not exist
    MissingSection {
        /// Name of the absent section
        section: String,
    },

    /// No cliff type with this name is loaded
    UnknownCliffType {
        /// Requested name
        name: String,
    },

    /// The cliff type cannot be used in the active theater
    TheaterMismatch {
        /// Name of the cliff type
        cliff_type: String,
        /// Active theater
        theater: String,
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

    /// Failed to save a preview image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// A computation or worker failed unexpectedly
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CliffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config {
                section,
                field,
                reason,
            } => {
                write!(
                    f,
                    "Invalid cliff configuration in [{section}] field '{field}': {reason}"
                )
            }
            Self::MissingSection { section } => {
                write!(f, "Missing configuration section [{section}]")
            }
            Self::UnknownCliffType { name } => {
                write!(f, "Unknown cliff type '{name}'")
            }
            Self::TheaterMismatch {
                cliff_type,
                theater,
            } => {
                write!(
                    f,
                    "Cliff type '{cliff_type}' is not available in theater '{theater}'"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for CliffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cliff placement results
pub type Result<T> = std::result::Result<T, CliffError>;

/// Create a configuration error for a section field
pub fn config_error(section: &str, field: &'static str, reason: &impl ToString) -> CliffError {
    CliffError::Config {
        section: section.to_string(),
        field,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CliffError {
    CliffError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CliffError {
    CliffError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Rewrites parameter-level parse failures as configuration errors
pub trait InSection<T> {
    /// Attribute an error to a section field of the catalog
    ///
    /// # Errors
    ///
    /// Propagates the original failure as [`CliffError::Config`]; errors that
    /// already carry a section are passed through unchanged
    fn in_section(self, section: &str, field: &'static str) -> Result<T>;
}

impl<T> InSection<T> for Result<T> {
    fn in_section(self, section: &str, field: &'static str) -> Result<T> {
        self.map_err(|error| match error {
            CliffError::InvalidParameter { value, reason, .. } => {
                config_error(section, field, &format!("'{value}': {reason}"))
            }
            other => other,
        })
    }
}

//! Error types and script-line context for engine and wrapper operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all imaging operations
#[derive(Debug)]
pub enum ImagingError {
    /// A parameter or input value violates an operation's contract
    ///
    /// This is the only error the transformation engine raises. It is always
    /// reported before any output is computed.
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
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

    /// A batch script could not be parsed
    Script {
        /// 1-based line of the offending token
        line: usize,
        /// Description of the syntax problem
        reason: String,
    },

    /// A batch script statement failed while running
    AtLine {
        /// 1-based line of the failing statement
        line: usize,
        /// Error raised by the statement
        source: Box<ImagingError>,
    },

    /// A command needs a current image but none has been loaded or generated
    EmptySession {
        /// Command that required an image
        operation: &'static str,
    },
}

impl fmt::Display for ImagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
            Self::AtLine { line, source } => {
                write!(f, "Line {line}: {source}")
            }
            Self::EmptySession { operation } => {
                write!(f, "Cannot {operation}: no image has been loaded or generated")
            }
        }
    }
}

impl std::error::Error for ImagingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::AtLine { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for imaging results
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Attaches the running script line to errors raised by a statement
pub trait WithLine<T> {
    /// Wrap any error in [`ImagingError::AtLine`]
    ///
    /// Parse errors already carry a line and are passed through unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line context applied
    fn at_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithLine<T> for std::result::Result<T, E>
where
    E: Into<ImagingError>,
{
    fn at_line(self, line: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            error @ (ImagingError::Script { .. } | ImagingError::AtLine { .. }) => error,
            error => ImagingError::AtLine {
                line,
                source: Box::new(error),
            },
        })
    }
}

impl From<image::ImageError> for ImagingError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ImagingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ImagingError {
    ImagingError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a script syntax error
pub fn script_error(line: usize, reason: &impl ToString) -> ImagingError {
    ImagingError::Script {
        line,
        reason: reason.to_string(),
    }
}

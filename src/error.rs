//! Error types for the report pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a report
#[derive(Error, Debug)]
pub enum Error {
    /// A task's script exited unsuccessfully
    #[error("Script {} failed ({}): {stderr}", .script.display(), describe_status(.status))]
    ProcessFailed {
        script: PathBuf,
        /// Exit code, `None` when the process was killed by a signal
        status: Option<i32>,
        stderr: String,
    },

    /// The interpreter could not be launched at all
    #[error("Failed to launch interpreter `{interpreter}`: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// A task's program source is not on disk
    #[error("Program source not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// Failed to render a screenshot
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to serialize the document
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    /// Invalid configuration or task list
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an `std::io::Error` with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::RenderError(err.to_string())
    }
}

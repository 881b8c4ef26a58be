//! Error types and handling for storcat
//!
//! Device arithmetic is infallible; the only failure path in the catalog is
//! writing report lines to an output sink.

/// Main error type for storcat operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Report generation failed
    #[error("Report error: {message}")]
    Report {
        /// Error message describing the report issue
        message: String,
    },
}

impl Error {
    /// Create a new report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_display() {
        let err = Error::report("device list is empty");
        assert_eq!(err.to_string(), "Report error: device list is empty");
    }
}

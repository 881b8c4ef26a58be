//! Result type alias for storcat operations

/// Result type used throughout storcat
pub type Result<T> = std::result::Result<T, crate::Error>;

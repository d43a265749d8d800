//! Global error types for the WordGrid application.
//!
//! All error categories across the application are unified into a single
//! `WgError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using WgError.
pub type WgResult<T> = Result<T, WgError>;

/// Unified error type covering all error categories in WordGrid.
#[derive(Error, Debug)]
pub enum WgError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Word list errors --
    /// A word contains characters outside A-Z.
    #[error("invalid word '{0}': only letters A-Z are allowed")]
    InvalidWord(String),

    /// A word exceeds the maximum placeable length.
    #[error("word '{word}' is too long ({len} letters, max {max})")]
    WordTooLong {
        /// The offending word.
        word: String,
        /// Its length in letters.
        len: usize,
        /// Maximum supported length.
        max: usize,
    },

    /// The word list is empty after normalization.
    #[error("no usable words in input list")]
    EmptyWordList,

    // -- Generation errors --
    /// All whole-grid generation attempts were exhausted without success.
    #[error("failed to generate a valid grid after {attempts} attempts")]
    GenerationFailed {
        /// Number of whole-grid attempts made.
        attempts: u32,
    },

    /// A generated puzzle failed its verification scan.
    #[error("puzzle verification failed: word '{0}' not locatable in grid")]
    VerificationFailed(String),

    // -- Network errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Word service returned an error response.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Authentication against the word service failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    // -- Word provider errors --
    /// No word pack exists for the requested theme.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Service errors --
    /// A service failed to initialize.
    #[error("service init error: {0}")]
    ServiceInit(String),

    /// A service operation failed.
    #[error("service error: {0}")]
    Service(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for WgError {
    fn from(e: serde_json::Error) -> Self {
        WgError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for WgError {
    fn from(e: toml::de::Error) -> Self {
        WgError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wg_error_display() {
        let err = WgError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn test_word_too_long_display() {
        let err = WgError::WordTooLong {
            word: "EXTRAORDINARILYLONG".to_string(),
            len: 19,
            max: 16,
        };
        assert!(err.to_string().contains("EXTRAORDINARILYLONG"));
        assert!(err.to_string().contains("19"));
    }

    #[test]
    fn test_generation_failed_display() {
        let err = WgError::GenerationFailed { attempts: 500 };
        assert_eq!(
            err.to_string(),
            "failed to generate a valid grid after 500 attempts"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WgError = io.into();
        assert!(matches!(err, WgError::Io(_)));
    }
}

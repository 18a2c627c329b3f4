//! Error types for xseal
//!
//! Decryption failures are deliberately collapsed into a single variant that
//! carries no cause, so callers cannot tell a wrong password from a tampered
//! or corrupt blob.

use thiserror::Error;

/// The main error type for xseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Problems obtaining input from the user (prompt, stdin, arguments)
    #[error("Input error: {0}")]
    Input(String),

    /// Key derivation rejected its parameters
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Sealing a message failed (random source or cipher failure)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Any failure while opening a blob
    #[error("Decryption failed")]
    Decryption,
}

impl SealError {
    /// Short, cause-free name of the error kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Input(_) => "input",
            Self::KeyDerivation(_) => "key_derivation",
            Self::Encryption(_) => "encryption",
            Self::Decryption => "decryption",
        }
    }

    /// Check if this is a decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for xseal operations
pub type SealResult<T> = Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SealError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_decryption_error_is_opaque() {
        let err = SealError::Decryption;
        assert_eq!(err.to_string(), "Decryption failed");
        assert_eq!(err.kind(), "decryption");
        assert!(err.is_decryption());
    }

    #[test]
    fn test_kind_omits_detail() {
        let err = SealError::KeyDerivation("salt too short".into());
        assert_eq!(err.kind(), "key_derivation");
        assert!(!err.is_decryption());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let seal_err: SealError = io_err.into();
        assert!(matches!(seal_err, SealError::Io(_)));
    }
}

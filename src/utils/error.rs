use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Rustoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Rustoc operations
#[derive(Debug)]
pub enum RustocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Headline extraction error
    Source(String),
    /// Invalid headline record
    Validation(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for RustocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustocError::Io(err) => write!(f, "IO error: {}", err),
            RustocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RustocError::Source(msg) => write!(f, "Source error: {}", msg),
            RustocError::Validation(msg) => write!(f, "Validation error: {}", msg),
            RustocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RustocError {}

impl From<io::Error> for RustocError {
    fn from(err: io::Error) -> Self {
        RustocError::Io(err)
    }
}

impl From<String> for RustocError {
    fn from(msg: String) -> Self {
        RustocError::Generic(msg)
    }
}

impl From<&str> for RustocError {
    fn from(msg: &str) -> Self {
        RustocError::Generic(msg.to_string())
    }
}

//! Custom error types for prnotes.

use thiserror::Error;

/// Main error type for prnotes operations.
#[derive(Error, Debug)]
pub enum PrNotesError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Forge errors
    #[error("Forge request failed with status {status}: {body}")]
    ForgeStatus { status: u16, body: String },

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    // Parsing errors
    #[error("Invalid timestamp '{input}': expected ISO-8601")]
    Timestamp { input: String },

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using PrNotesError
pub type Result<T> = std::result::Result<T, PrNotesError>;

impl PrNotesError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a timestamp error for the offending input
    pub fn timestamp(input: impl Into<String>) -> Self {
        Self::Timestamp {
            input: input.into(),
        }
    }

    /// Whether a failed request is worth sending again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(_) => true,
            Self::ForgeStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for PrNotesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::NetworkError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 | 403 => Self::AuthenticationError(err.to_string()),
                code => Self::ForgeStatus {
                    status: code,
                    body: err.to_string(),
                },
            }
        } else if err.is_decode() {
            Self::ForgeError(format!("unexpected response body: {err}"))
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for PrNotesError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

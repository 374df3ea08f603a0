use thiserror::Error;

/// Message shown to the user when the whole fallback chain failed.
pub const ALL_PROVIDERS_FAILED_MESSAGE: &str =
    "Translation failed: no translation service is reachable right now. Please try again later.";

/// Failure of a single provider call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// One failed attempt inside a fallback run.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptFailure {
    pub provider: String,
    pub reason: String,
    pub timed_out: bool,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", ALL_PROVIDERS_FAILED_MESSAGE)]
    AllProvidersFailed { attempts: Vec<AttemptFailure> },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("A translation is already running")]
    Busy,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Per-provider failures behind an aggregate error, empty for any other variant.
    pub fn attempts(&self) -> &[AttemptFailure] {
        match self {
            AppError::AllProvidersFailed { attempts } => attempts,
            _ => &[],
        }
    }
}

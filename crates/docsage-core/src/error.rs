//! Error types shared across the workspace.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocSageError>;

#[derive(Debug, Error)]
pub enum DocSageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("API key missing for provider '{0}'")]
    ApiKeyMissing(String),

    #[error("Unknown provider '{0}'")]
    ProviderNotFound(String),

    /// Caller-side validation failure. The gateway maps this to a
    /// client-error status; everything else becomes a generic 500.
    #[error("{0}")]
    InvalidPrompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

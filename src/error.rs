//! Error types for the portfolio MCP server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when handing a message to the email provider.
///
/// The `Display` text of each variant is what the contact pipeline inspects
/// when it has to fall back to keyword classification, so provider wording is
/// carried through verbatim where the provider supplies it.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// HTTP transport failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider rejected the credentials (missing or invalid API key)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Provider refused the request (unverified sending domain, restricted key)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Provider rejected the payload, usually the recipient address
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit or daily quota exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Any other non-success status from the provider
    #[error("Email provider error (status {status}): {message}")]
    ProviderError { status: u16, message: String },

    /// Failed to parse the provider response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The dispatch did not complete in time
    #[error("Request timeout")]
    Timeout,

    /// Generic dispatch error with context
    #[error("Email dispatch error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading the case-study catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No item with the requested id
    #[error("Case study not found: {0}")]
    NotFound(String),

    /// Seed file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(String),

    /// Seed file is not a valid catalog
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid lookup parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Generic catalog error
    #[error("Catalog error: {0}")]
    Other(String),
}

/// Errors reported by an audit sink. These are logged and otherwise ignored.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to serialize audit record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Audit sink unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with AuditError
pub type AuditResult<T> = Result<T, AuditError>;

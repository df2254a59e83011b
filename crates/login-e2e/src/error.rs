// Error types for the login e2e suite

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a login scenario
///
/// Driver failures (selector not found within its wait budget, navigation
/// failure, browser not installed) arrive through the [`Error::Driver`]
/// variant and carry the driver's own message. Nothing is retried here;
/// a failed step fails its scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying browser-automation failure
    #[error("driver error: {0}")]
    Driver(#[from] playwright_rs::Error),

    /// The configured base URL could not be parsed or joined
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An element was located but exposed no text content
    #[error("element '{selector}' has no text content")]
    EmptyText { selector: String },

    /// An observed value did not match the scenario's expectation
    #[error("expected {observable} to contain '{expected}', got '{actual}'")]
    OutcomeMismatch {
        observable: &'static str,
        expected: String,
        actual: String,
    },

    /// A screenshot artifact could not be written
    #[error("failed to write artifact '{}': {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

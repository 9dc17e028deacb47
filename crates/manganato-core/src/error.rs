//! Error types for the manganato scraper
//!
//! Provides a single error enum covering configuration, network and
//! HTML-structure failures, with Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all manganato scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum MangaNatoError {
    /// Genre registry resource missing, unreadable or malformed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Genre key not present in the registry
    #[error("Invalid genre: {0}")]
    InvalidGenre(String),

    /// Caller supplied an unusable argument (empty URL, zero page limit)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Request rejected by the site's anti-bot protection (HTTP 403)
    #[error("Blocked by anti-bot protection: {0}")]
    Blocked(String),

    /// Page not found on server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Failed to build a CSS selector
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),
}

impl MangaNatoError {
    /// Whether this error came from the page fetcher rather than from
    /// configuration or extraction
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::RateLimited | Self::Blocked(_) | Self::NotFound(_)
        )
    }
}

impl Serialize for MangaNatoError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for manganato operations
pub type Result<T> = std::result::Result<T, MangaNatoError>;

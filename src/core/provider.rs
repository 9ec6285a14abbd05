//! Provider abstraction for remote sentiment services
//!
//! This module defines a common trait for the remote classification tiers
//! (Watson NLP BERT and Watson NLU) so the fallback chain can branch on a
//! typed outcome instead of vendor-specific failures.

use crate::models::sentiment::AnalysisResult;
use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Classify a reqwest transport failure
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProviderError::Timeout(error.to_string())
        } else {
            ProviderError::Transport(error.to_string())
        }
    }
}

/// Trait for remote sentiment classification services
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Classify a text string, returning the normalized result
    async fn analyze_sentiment(&self, text: &str) -> Result<AnalysisResult, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

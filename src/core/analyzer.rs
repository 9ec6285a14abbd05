//! Two-tier sentiment fallback chain
//!
//! The analyzer tries the primary provider once; on any provider error it
//! falls back to the secondary provider once. Both tiers failing (or the
//! secondary never being configured) collapses into the unset-fields
//! failure result, so callers never see a provider error directly.

use crate::core::provider::SentimentProvider;
use crate::models::sentiment::AnalysisResult;
use std::sync::Arc;
use tracing::{error, warn};

/// Fallback-chain analyzer shared across request handlers
pub struct SentimentAnalyzer {
    primary: Arc<dyn SentimentProvider>,
    fallback: Option<Arc<dyn SentimentProvider>>,
}

impl SentimentAnalyzer {
    /// Create a new analyzer
    ///
    /// `fallback` is `None` when the secondary tier's credentials were not
    /// configured at startup.
    pub fn new(
        primary: Arc<dyn SentimentProvider>,
        fallback: Option<Arc<dyn SentimentProvider>>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Analyze text, degrading through the fallback chain
    ///
    /// Each tier is tried at most once; there is no retry or backoff.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        match self.primary.analyze_sentiment(text).await {
            Ok(result) => result,
            Err(e) => {
                warn!("{} unavailable: {}", self.primary.provider_name(), e);

                let Some(fallback) = &self.fallback else {
                    error!("No fallback provider configured; returning failure result");
                    return AnalysisResult::unavailable();
                };

                match fallback.analyze_sentiment(text).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!("{} error: {}", fallback.provider_name(), e);
                        AnalysisResult::unavailable()
                    }
                }
            }
        }
    }
}

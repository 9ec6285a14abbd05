//! Canonical sentiment analysis result types
//!
//! This module defines the uniform result shape every provider response is
//! normalized into before it reaches the web layer.

use serde::{Deserialize, Serialize};

/// Canonical sentiment polarity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "SENT_POSITIVE")]
    Positive,
    #[serde(rename = "SENT_NEGATIVE")]
    Negative,
    #[serde(rename = "SENT_NEUTRAL")]
    Neutral,
}

impl SentimentLabel {
    /// Map a vendor-supplied label string to the canonical label
    ///
    /// Accepts any case and tolerates an already-canonical `SENT_` prefix.
    /// Unknown labels map to `Neutral`.
    pub fn from_vendor(label: &str) -> Self {
        let normalized = label.trim().to_uppercase();
        let normalized = normalized.strip_prefix("SENT_").unwrap_or(&normalized);

        match normalized {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Human-readable label without the `SENT_` prefix
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

/// Normalized analysis outcome
///
/// Both fields unset is the caller-visible failure signal: the web layer
/// renders it as an error message rather than surfacing a server error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: Option<SentimentLabel>,
    pub score: Option<f64>,
}

impl AnalysisResult {
    /// Successful result with both fields set
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            label: Some(label),
            score: Some(score),
        }
    }

    /// Failure result with both fields unset
    pub fn unavailable() -> Self {
        Self {
            label: None,
            score: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.label.is_none()
    }
}

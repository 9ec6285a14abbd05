//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for the sentiment gateway:
//! the analyzer endpoint, the static index page, and a health check.

use crate::core::analyzer::SentimentAnalyzer;
use crate::core::config::Config;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<SentimentAnalyzer>,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/sentimentAnalyzer", get(analyze_sentiment))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Query parameters for the analyzer endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}

/// GET /sentimentAnalyzer - Analyze the submitted text
///
/// Responds with a plain-text sentence on success. Analyzer failure
/// degrades to a plain error message rather than a server error.
async fn analyze_sentiment(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let Some(text) = params
        .text_to_analyze
        .filter(|text| !text.trim().is_empty())
    else {
        debug!("Rejecting request with missing or blank textToAnalyze");
        return (
            StatusCode::BAD_REQUEST,
            "Error: No text provided for analysis.",
        )
            .into_response();
    };

    info!("Analyzing sentiment for {} characters of text", text.len());

    let result = state.analyzer.analyze(&text).await;

    match (result.label, result.score) {
        (Some(label), Some(score)) => format!(
            "The given text has been identified as {} with a score of {}.",
            label.display_name(),
            score
        )
        .into_response(),
        _ => "Error: Unable to analyze sentiment.".into_response(),
    }
}

/// GET / - Static index page with the submission form
async fn render_index_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "bert_endpoint": state.config.bert_url,
        "nlu_fallback_configured": state.config.has_nlu_credentials(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::{ProviderError, SentimentProvider};
    use crate::models::sentiment::{AnalysisResult, SentimentLabel};
    use async_trait::async_trait;

    struct StubProvider {
        outcome: Option<AnalysisResult>,
    }

    #[async_trait]
    impl SentimentProvider for StubProvider {
        async fn analyze_sentiment(&self, _text: &str) -> Result<AnalysisResult, ProviderError> {
            match &self.outcome {
                Some(result) => Ok(result.clone()),
                None => Err(ProviderError::Transport("connection refused".to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    fn test_state(outcome: Option<AnalysisResult>) -> AppState {
        let config = Config {
            nlu_api_key: None,
            nlu_url: None,
            nlu_timeout: 30,
            bert_url: "https://example.invalid/SentimentPredict".to_string(),
            bert_model_id: "test-model".to_string(),
            bert_timeout: 10,
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        };
        let analyzer = SentimentAnalyzer::new(Arc::new(StubProvider { outcome }), None);
        AppState {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_renders_sentence() {
        let state = test_state(Some(AnalysisResult::new(SentimentLabel::Positive, 0.87)));
        let params = AnalyzeParams {
            text_to_analyze: Some("I love this product".to_string()),
        };

        let response = analyze_sentiment(State(state), Query(params)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "The given text has been identified as POSITIVE with a score of 0.87."
        );
    }

    #[tokio::test]
    async fn test_analyze_failure_returns_error_message() {
        let state = test_state(None);
        let params = AnalyzeParams {
            text_to_analyze: Some("some text".to_string()),
        };

        let response = analyze_sentiment(State(state), Query(params)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "Error: Unable to analyze sentiment."
        );
    }

    #[tokio::test]
    async fn test_missing_parameter_is_handled() {
        let state = test_state(Some(AnalysisResult::new(SentimentLabel::Neutral, 0.5)));
        let params = AnalyzeParams {
            text_to_analyze: None,
        };

        let response = analyze_sentiment(State(state), Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            "Error: No text provided for analysis."
        );
    }

    #[tokio::test]
    async fn test_blank_text_is_handled() {
        let state = test_state(Some(AnalysisResult::new(SentimentLabel::Neutral, 0.5)));
        let params = AnalyzeParams {
            text_to_analyze: Some("   ".to_string()),
        };

        let response = analyze_sentiment(State(state), Query(params)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

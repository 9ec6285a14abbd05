//! Watson NLP BERT provider implementation
//!
//! Talks to the fixed-URL BERT sentiment prediction endpoint. The service
//! needs no credentials; the model is selected through a gRPC metadata
//! header on each request.

use crate::conversion::response_converter::convert_bert_to_result;
use crate::core::provider::{ProviderError, SentimentProvider};
use crate::models::sentiment::AnalysisResult;
use crate::models::watson::{BertPredictRequest, BertPredictResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Header carrying the model selector
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// BERT-based sentiment provider (primary tier)
pub struct BertProvider {
    client: Client,
    service_url: String,
    model_id: String,
}

impl BertProvider {
    /// Create a new BERT provider
    ///
    /// # Arguments
    ///
    /// * `service_url` - Full URL of the SentimentPredict endpoint
    /// * `model_id` - Model selector sent in the metadata header
    /// * `timeout` - Request timeout in seconds
    pub fn new(service_url: String, model_id: String, timeout: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            service_url,
            model_id,
        }
    }
}

#[async_trait]
impl SentimentProvider for BertProvider {
    async fn analyze_sentiment(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let body = BertPredictRequest::for_text(text);

        let response = self
            .client
            .post(&self.service_url)
            .header(MODEL_ID_HEADER, &self.model_id)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let predict: BertPredictResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        convert_bert_to_result(&predict).ok_or_else(|| {
            ProviderError::InvalidResponse("Response missing documentSentiment".to_string())
        })
    }

    fn provider_name(&self) -> &str {
        "Watson BERT"
    }
}

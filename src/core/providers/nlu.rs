//! IBM Watson NLU provider implementation
//!
//! Talks to the Watson Natural Language Understanding REST API with IAM
//! basic auth (`apikey:<key>`). Constructed only when credentials are
//! present in the configuration.

use crate::conversion::response_converter::convert_nlu_to_result;
use crate::core::provider::{ProviderError, SentimentProvider};
use crate::models::sentiment::AnalysisResult;
use crate::models::watson::{NluAnalyzeRequest, NluAnalyzeResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// NLU API version pinned by this service
const NLU_API_VERSION: &str = "2022-04-07";

/// Watson NLU sentiment provider (fallback tier)
pub struct NluProvider {
    client: Client,
    api_key: String,
    service_url: String,
}

impl NluProvider {
    /// Create a new NLU provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - IAM API key for the NLU service instance
    /// * `service_url` - Base URL of the service instance
    /// * `timeout` - Request timeout in seconds
    pub fn new(api_key: String, service_url: String, timeout: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            service_url,
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/v1/analyze", self.service_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SentimentProvider for NluProvider {
    async fn analyze_sentiment(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let body = NluAnalyzeRequest::for_text(text);

        let response = self
            .client
            .post(self.analyze_url())
            .query(&[("version", NLU_API_VERSION)])
            .basic_auth("apikey", Some(&self.api_key))
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
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::Authentication(message),
                _ => ProviderError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let analysis: NluAnalyzeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        convert_nlu_to_result(&analysis).ok_or_else(|| {
            ProviderError::InvalidResponse("Response missing document sentiment".to_string())
        })
    }

    fn provider_name(&self) -> &str {
        "Watson NLU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_url() {
        let provider = NluProvider::new(
            "key".to_string(),
            "https://api.us-south.natural-language-understanding.watson.cloud.ibm.com/instances/abc/".to_string(),
            30,
        );
        assert_eq!(
            provider.analyze_url(),
            "https://api.us-south.natural-language-understanding.watson.cloud.ibm.com/instances/abc/v1/analyze"
        );
    }
}

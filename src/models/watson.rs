//! Watson API data models
//!
//! This module defines the request and response wire structures for the two
//! remote sentiment services: the Watson NLU REST API and the Watson NLP
//! BERT prediction endpoint.

use serde::{Deserialize, Serialize};

/// NLU `/v1/analyze` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluAnalyzeRequest {
    pub text: String,
    pub features: NluFeatures,
}

impl NluAnalyzeRequest {
    /// Build an analyze request for document-level sentiment only
    pub fn for_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            features: NluFeatures {
                sentiment: NluSentimentOptions {},
            },
        }
    }
}

/// Requested NLU features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluFeatures {
    pub sentiment: NluSentimentOptions,
}

/// Sentiment feature options (empty object selects the defaults)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluSentimentOptions {}

/// NLU `/v1/analyze` response body (sentiment portion only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluAnalyzeResponse {
    #[serde(default)]
    pub sentiment: Option<NluSentiment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluSentiment {
    #[serde(default)]
    pub document: Option<NluDocumentSentiment>,
}

/// Document-level sentiment as reported by NLU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluDocumentSentiment {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// BERT `SentimentPredict` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BertPredictRequest {
    pub raw_document: BertRawDocument,
}

impl BertPredictRequest {
    pub fn for_text(text: &str) -> Self {
        Self {
            raw_document: BertRawDocument {
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BertRawDocument {
    pub text: String,
}

/// BERT `SentimentPredict` response body (document sentiment portion only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BertPredictResponse {
    #[serde(rename = "documentSentiment", default)]
    pub document_sentiment: Option<BertDocumentSentiment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BertDocumentSentiment {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nlu_request_serialization() {
        let request = NluAnalyzeRequest::for_text("I love this product");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "I love this product");
        assert_eq!(json["features"]["sentiment"], serde_json::json!({}));
    }

    #[test]
    fn test_bert_request_serialization() {
        let request = BertPredictRequest::for_text("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["raw_document"]["text"], "hello");
    }

    #[test]
    fn test_nlu_response_deserialization() {
        let body = r#"{
            "usage": {"text_units": 1},
            "sentiment": {"document": {"score": 0.87, "label": "positive"}},
            "language": "en"
        }"#;
        let response: NluAnalyzeResponse = serde_json::from_str(body).unwrap();
        let document = response.sentiment.unwrap().document.unwrap();
        assert_eq!(document.label.as_deref(), Some("positive"));
        assert_eq!(document.score, Some(0.87));
    }

    #[test]
    fn test_bert_response_deserialization() {
        let body = r#"{
            "documentSentiment": {"score": 0.997, "label": "SENT_POSITIVE", "mixed": false},
            "producerId": {"name": "Aggregated Sentiment Workflow", "version": "0.0.1"}
        }"#;
        let response: BertPredictResponse = serde_json::from_str(body).unwrap();
        let document = response.document_sentiment.unwrap();
        assert_eq!(document.label.as_deref(), Some("SENT_POSITIVE"));
        assert_eq!(document.score, Some(0.997));
    }

    #[test]
    fn test_nlu_response_without_sentiment() {
        let response: NluAnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.sentiment.is_none());
    }
}

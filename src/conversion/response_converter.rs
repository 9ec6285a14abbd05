//! Watson response to canonical result conversion
//!
//! This module converts the two vendor response shapes (NLU and BERT) into
//! the canonical `AnalysisResult`.

use crate::models::sentiment::{AnalysisResult, SentimentLabel};
use crate::models::watson::{BertPredictResponse, NluAnalyzeResponse};

/// Convert an NLU analyze response to the canonical result
///
/// Returns `None` when the response carries no document sentiment at all.
/// Within a present document, a missing label defaults to neutral and a
/// missing score defaults to 0.0, matching the NLU service's own defaults.
pub fn convert_nlu_to_result(response: &NluAnalyzeResponse) -> Option<AnalysisResult> {
    let document = response.sentiment.as_ref()?.document.as_ref()?;

    let label = document
        .label
        .as_deref()
        .map(SentimentLabel::from_vendor)
        .unwrap_or(SentimentLabel::Neutral);
    let score = document.score.unwrap_or(0.0);

    Some(AnalysisResult::new(label, score))
}

/// Convert a BERT prediction response to the canonical result
///
/// Returns `None` when the response carries no `documentSentiment` block.
/// The BERT service reports labels already in `SENT_*` form; the score is
/// passed through unchanged.
pub fn convert_bert_to_result(response: &BertPredictResponse) -> Option<AnalysisResult> {
    let document = response.document_sentiment.as_ref()?;

    let label = document
        .label
        .as_deref()
        .map(SentimentLabel::from_vendor)
        .unwrap_or(SentimentLabel::Neutral);
    let score = document.score.unwrap_or(0.0);

    Some(AnalysisResult::new(label, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_nlu_response() {
        let response: NluAnalyzeResponse = serde_json::from_str(
            r#"{"sentiment": {"document": {"score": 0.87, "label": "positive"}}}"#,
        )
        .unwrap();

        let result = convert_nlu_to_result(&response).unwrap();
        assert_eq!(result.label, Some(SentimentLabel::Positive));
        assert_eq!(result.score, Some(0.87));
    }

    #[test]
    fn test_convert_nlu_negative_score_passes_through() {
        let response: NluAnalyzeResponse = serde_json::from_str(
            r#"{"sentiment": {"document": {"score": -0.92, "label": "negative"}}}"#,
        )
        .unwrap();

        let result = convert_nlu_to_result(&response).unwrap();
        assert_eq!(result.label, Some(SentimentLabel::Negative));
        assert_eq!(result.score, Some(-0.92));
    }

    #[test]
    fn test_convert_nlu_missing_document() {
        let response: NluAnalyzeResponse = serde_json::from_str(r#"{"sentiment": {}}"#).unwrap();
        assert!(convert_nlu_to_result(&response).is_none());

        let response: NluAnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert!(convert_nlu_to_result(&response).is_none());
    }

    #[test]
    fn test_convert_nlu_defaults_within_document() {
        let response: NluAnalyzeResponse =
            serde_json::from_str(r#"{"sentiment": {"document": {}}}"#).unwrap();

        let result = convert_nlu_to_result(&response).unwrap();
        assert_eq!(result.label, Some(SentimentLabel::Neutral));
        assert_eq!(result.score, Some(0.0));
    }

    #[test]
    fn test_convert_bert_response() {
        let response: BertPredictResponse = serde_json::from_str(
            r#"{"documentSentiment": {"score": 0.997, "label": "SENT_POSITIVE"}}"#,
        )
        .unwrap();

        let result = convert_bert_to_result(&response).unwrap();
        assert_eq!(result.label, Some(SentimentLabel::Positive));
        assert_eq!(result.score, Some(0.997));
    }

    #[test]
    fn test_convert_bert_missing_document_sentiment() {
        let response: BertPredictResponse = serde_json::from_str("{}").unwrap();
        assert!(convert_bert_to_result(&response).is_none());
    }
}

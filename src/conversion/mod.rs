//! Vendor response conversion
//!
//! This module reshapes provider-specific response bodies into the
//! canonical [`AnalysisResult`](crate::models::sentiment::AnalysisResult).

pub mod response_converter;

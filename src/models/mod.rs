//! API data models
//!
//! This module contains the canonical result types and the Watson wire
//! structures.

pub mod sentiment;
pub mod watson;

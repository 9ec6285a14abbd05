//! Core application modules
//!
//! This module contains configuration, logging, the provider abstraction,
//! and the fallback-chain analyzer.

pub mod analyzer;
pub mod config;
pub mod logging;
pub mod provider;
pub mod providers;

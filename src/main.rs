//! Sentiment Analysis Gateway
//!
//! This application serves a small web front end that forwards submitted
//! text to remote Watson sentiment services (BERT first, NLU as fallback)
//! and renders the returned label and confidence score.

mod api;
mod conversion;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::analyzer::SentimentAnalyzer;
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::provider::SentimentProvider;
use crate::core::providers::{BertProvider, NluProvider};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load environment variables from .env file, if present
    dotenv::dotenv().ok();

    // Load configuration
    let config = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Primary tier: BERT prediction service
    let bert: Arc<dyn SentimentProvider> = Arc::new(BertProvider::new(
        config.bert_url.clone(),
        config.bert_model_id.clone(),
        config.bert_timeout,
    ));

    // Fallback tier: Watson NLU, only when credentials are configured
    let nlu: Option<Arc<dyn SentimentProvider>> =
        config.nlu_credentials().map(|(api_key, service_url)| {
            Arc::new(NluProvider::new(api_key, service_url, config.nlu_timeout))
                as Arc<dyn SentimentProvider>
        });

    if nlu.is_none() {
        warn!("Watson NLU credentials not configured; fallback tier disabled");
    }

    let analyzer = Arc::new(SentimentAnalyzer::new(bert, nlu));

    // Create application state
    let app_state = AppState {
        config: config.clone(),
        analyzer,
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Sentiment Analysis Gateway v1.0.0");
    println!("✅ Configuration loaded successfully");
    println!("   BERT endpoint: {}", config.bert_url);
    println!("   BERT model: {}", config.bert_model_id);
    println!("   BERT timeout: {}s", config.bert_timeout);
    println!(
        "   NLU fallback: {}",
        if config.has_nlu_credentials() {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    println!("   Server: {}:{}", config.host, config.port);
    println!();
}

/// Print help message
fn print_help() {
    println!("Sentiment Analysis Gateway v1.0.0");
    println!();
    println!("Usage: sentiment-gateway [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables (a local .env file is loaded at startup):");
    println!("  WATSON_NLU_API_KEY - IAM API key for the NLU fallback tier");
    println!("  WATSON_NLU_URL - Service instance URL for the NLU fallback tier");
    println!("  BERT_SERVICE_URL - SentimentPredict endpoint URL");
    println!("  BERT_MODEL_ID - Model selector for the BERT service");
    println!("  HOST - Server host (default: 127.0.0.1)");
    println!("  PORT - Server port (default: 8080)");
    println!("  LOG_LEVEL - Logging level (default: info)");
    println!("  CONFIG_PATH - Path to a TOML config file (default: config.toml)");
    println!();
    println!("The NLU credentials are optional: without them the gateway still");
    println!("serves requests through the BERT tier, with no fallback hop.");
}

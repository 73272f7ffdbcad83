//! Service entry point.
//!
//! Loads configuration, the intake script and the wiring for the chat
//! endpoint, then serves HTTP until shutdown.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sally_intake::adapters::ai::{GroqConfig, GroqProvider};
use sally_intake::adapters::http::chat::{self, ChatAppState};
use sally_intake::adapters::script::load_script;
use sally_intake::adapters::storage::InMemorySessionStore;
use sally_intake::adapters::transcript::CsvTranscriptSink;
use sally_intake::application::ProcessMessageHandler;
use sally_intake::config::AppConfig;
use sally_intake::domain::intake::{
    AnswerValidator, ConversationEngine, SensitiveTopicDetector,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sally_intake=info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    // No script, no service.
    let catalog = load_script(&config.intake.script_path).await?;
    tracing::info!(
        script = %config.intake.script_path,
        questions = catalog.len(),
        "intake script loaded"
    );

    let engine = Arc::new(ConversationEngine::new(
        Arc::new(catalog),
        AnswerValidator::new(config.intake.validation_rules()),
        SensitiveTopicDetector::new(config.intake.sensitive_phrases.clone()),
        config.intake.engine_messages(),
    ));

    let generator = Arc::new(GroqProvider::new(
        GroqConfig::new(config.ai.api_key())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(Duration::from_secs(config.ai.timeout_secs))
            .with_max_retries(config.ai.max_retries),
    ));

    let handler = Arc::new(ProcessMessageHandler::new(
        engine,
        Arc::new(InMemorySessionStore::new()),
        generator,
        Arc::new(CsvTranscriptSink::new(config.intake.transcript_dir.clone())),
    ));

    let app = chat::router(ChatAppState { handler })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

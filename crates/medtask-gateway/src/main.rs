//! MedTask gateway - HTTP entry point for the medical-instruction parser

use anyhow::Context;
use medtask_gateway::{routes, ServerConfig};
use medtask_llm::OllamaProvider;
use medtask_parser::{MedicalTaskParser, ParserConfig};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let provider = OllamaProvider::new(&config.ollama_url, &config.model);
    let parser_config = ParserConfig {
        model_name: config.model.clone(),
        ..ParserConfig::default()
    };
    let parser = MedicalTaskParser::new(provider, parser_config);

    let app = routes::router(Arc::new(parser));

    let listener = tokio::net::TcpListener::bind(config.full_address())
        .await
        .with_context(|| format!("failed to bind {}", config.full_address()))?;

    tracing::info!(
        "medtask gateway listening on http://{} (model backend {})",
        config.full_address(),
        config.ollama_url
    );

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

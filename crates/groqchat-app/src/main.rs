use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use groqchat::cli::Cli;
use groqchat::web::{WebServer, WebServerConfig};
use groqchat_chat::{ChatService, SessionStore};
use groqchat_llm_api::config::{api_key_from_env, normalize_api_url, GROQ_API_URL};
use groqchat_llm_api::GroqClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let cli = Cli::parse();

    // The API key is required up front so a misconfigured deployment fails
    // at startup instead of on the first chat request
    let api_key = api_key_from_env()?;

    let api_url = match cli.api_url.as_deref() {
        Some(url) => normalize_api_url(url),
        None => GROQ_API_URL.to_string(),
    };

    info!(model = %cli.model, api_url = %api_url, "initializing completion client");

    let client = Arc::new(GroqClient::new(
        api_key,
        cli.model.clone(),
        api_url,
        cli.temperature,
    ));
    let store = Arc::new(SessionStore::new());
    let chat = Arc::new(ChatService::new(store, client));

    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;

    let server = WebServer::new(
        WebServerConfig {
            bind_addr,
            allowed_origin: cli.frontend_origin.clone(),
        },
        chat,
    );

    server.start().await
}

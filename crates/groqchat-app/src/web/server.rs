use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use groqchat_chat::ChatService;

use crate::web::routes::{self, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origin: String,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    chat: Arc<ChatService>,
}

/// Build the routed app with the CORS and trace layers applied
///
/// Cross-origin access is limited to the designated front-end origin.
pub fn build_app(state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid front-end origin: {}", allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(routes::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: WebServerConfig, chat: Arc<ChatService>) -> Self {
        Self { config, chat }
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let app = build_app(AppState { chat: self.chat }, &self.config.allowed_origin)?;

        info!(
            addr = %self.config.bind_addr,
            origin = %self.config.allowed_origin,
            "groqchat server listening"
        );

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind_addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

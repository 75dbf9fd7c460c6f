mod ats;
mod compiler;
mod config;
mod errors;
mod llm_client;
mod optimize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::compiler::LatexCompiler;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; /api/optimize and /api/email-optimize will return 503");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    info!("LLM client initialized (model: {})", config.gemini_model);

    // Initialize LaTeX compiler (engine availability is probed per request,
    // so the service boots even without Tectonic installed)
    let compiler = LatexCompiler::new(config.tectonic_path.clone());
    info!("LaTeX compiler initialized (engine: {})", config.tectonic_path);

    // Build app state
    let state = AppState {
        llm,
        compiler,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.request_timeout_ms,
        )));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from the configured origin allowlist.
/// A literal `*` entry permits any origin (and drops credentials, which
/// cannot be combined with a wildcard).
fn cors_layer(config: &Config) -> CorsLayer {
    if config.client_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .client_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

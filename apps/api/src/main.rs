mod assist;
mod config;
mod errors;
mod fixtures;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod notifications;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::llm_client::{DisabledGenerator, GeminiClient, TextGenerator};
use crate::matching::scorer::{FallbackMatchScorer, GenerativeMatchScorer, SkillOverlapScorer};
use crate::notifications::center::NotificationCenter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    let generator: Arc<dyn TextGenerator> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), config.gemini_model.clone())?;
            info!("Generative client initialized (model: {})", client.model());
            Arc::new(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; AI features will use their fallbacks");
            Arc::new(DisabledGenerator)
        }
    };

    let skill_scorer = SkillOverlapScorer::new(config.match_jitter);
    info!("Skill-overlap jitter policy: {:?}", config.match_jitter);
    let match_scorer = Arc::new(FallbackMatchScorer::new(
        Arc::new(GenerativeMatchScorer::new(generator.clone())),
        skill_scorer,
    ));

    let catalog = JobCatalog::new(fixtures::sample_jobs());
    let notifications = NotificationCenter::new(fixtures::sample_notifications());
    info!("Seeded catalog with {} jobs", catalog.len().await);

    let state = AppState {
        config: config.clone(),
        generator,
        match_scorer,
        skill_scorer,
        catalog,
        notifications,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once a frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

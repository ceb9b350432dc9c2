mod config;
mod contact;
mod content;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use section_tracker::SectionRegistry;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{MessageRelay, Web3FormsRelay};
use crate::content::ProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Warm the profile cache; a broken file is reported per request, not fatal.
    let profiles = Arc::new(ProfileStore::new(
        config.profile_path.clone(),
        config.profile_hot_reload,
    ));
    match profiles.get().await {
        Ok(loaded) => info!(
            "Profile loaded from {} ({} placeholders)",
            profiles.path().display(),
            loaded.todos.len()
        ),
        Err(e) => warn!("Profile not loaded at startup: {e}"),
    }

    let relay: Option<Arc<dyn MessageRelay>> = match &config.relay_access_key {
        Some(key) => {
            info!("Contact relay configured ({})", config.relay_url);
            Some(Arc::new(Web3FormsRelay::new(
                config.relay_url.clone(),
                key.clone(),
                config.site_origin.clone(),
            )))
        }
        None => {
            warn!("WEB3FORMS_ACCESS_KEY not set; contact submissions will be refused");
            None
        }
    };

    let sections = Arc::new(SectionRegistry::portfolio());
    info!(
        "Serving {} navigation targets, landing '{}'",
        sections.descriptors().len(),
        sections.landing().id
    );

    let cors = match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(
                HeaderValue::from_str(origin).context("CORS_ALLOWED_ORIGIN is not a valid header value")?,
            ))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        None => CorsLayer::permissive(),
    };

    let state = AppState {
        profiles,
        relay,
        sections,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reabode_api::{
    cache::{create_redis_client, Cache},
    config::Config,
    routes::create_router,
    services::{
        providers::{CatalogProductSource, HttpProductSource, ProductSource},
        vision::{GeminiVisionProvider, SampleVisionProvider, VisionProvider},
        CatalogStore,
    },
    state::AppState,
};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reabode_api=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::from_env()?;

    let catalog = Arc::new(CatalogStore::new(&config.catalog_path).load());
    tracing::info!(
        path = %config.catalog_path,
        products = catalog.len(),
        "Catalog loaded"
    );

    let (cache, cache_handle) = match &config.redis_url {
        Some(url) => Cache::new(create_redis_client(url)?).await,
        None => {
            tracing::info!("REDIS_URL not set, caching disabled");
            Cache::disabled()
        }
    };

    let vision: Arc<dyn VisionProvider> = match &config.gemini_api_key {
        Some(key) if !key.trim().is_empty() => Arc::new(GeminiVisionProvider::new(
            key.clone(),
            config.gemini_api_url.clone(),
            config.gemini_model.clone(),
        )),
        _ => {
            tracing::warn!("GEMINI_API_KEY not set, using sample room analysis");
            Arc::new(SampleVisionProvider)
        }
    };

    let product_source: Arc<dyn ProductSource> = match &config.live_source_url {
        Some(url) => Arc::new(HttpProductSource::new(cache, url.clone())),
        None => Arc::new(CatalogProductSource::new(catalog.clone())),
    };

    tracing::info!(
        vision = vision.name(),
        product_source = product_source.name(),
        scoring_profile = ?config.scoring_profile,
        "Services initialized"
    );

    let state = Arc::new(AppState::new(
        catalog,
        vision,
        product_source,
        config.scoring_profile,
    ));

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cache_handle.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

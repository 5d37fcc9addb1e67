//! Product Service - CRUD over a single product entity
//!
//! Postgres holds the products; an optional cache (Redis or in-process)
//! holds the full listing for a bounded time and is dropped on every write.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_svc::api::create_router;
use product_svc::cache::{CacheGateway, MemoryCache, RedisCache};
use product_svc::config::CacheSettings;
use product_svc::store::PgProductStore;
use product_svc::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the product service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables (fails fast)
/// 3. Connect to Postgres and ensure the schema exists
/// 4. Build the cache gateway, if a cache is configured
/// 5. Start HTTP server with graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_svc=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting product service");

    let config = Config::from_env().context("loading configuration")?;
    info!(
        "Configuration loaded: port={}, max_db_connections={}, cache={}",
        config.server_port,
        config.database_max_connections,
        match &config.cache {
            CacheSettings::Disabled => "disabled",
            CacheSettings::Memory => "memory",
            CacheSettings::Redis(_) => "redis",
        }
    );

    let store = PgProductStore::connect(&config.database_url, config.database_max_connections)
        .await
        .context("connecting to database")?;
    store.ensure_schema().await.context("ensuring schema")?;
    info!("Database connected");

    let (cache, cleanup_handle) = build_cache(&config).await?;

    let state = AppState::from_parts(Arc::new(store), cache);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the cache gateway for the configured backend.
///
/// A configured Redis that cannot be reached at startup is an error; a
/// missing one just disables caching.
async fn build_cache(config: &Config) -> anyhow::Result<(CacheGateway, Option<JoinHandle<()>>)> {
    match &config.cache {
        CacheSettings::Disabled => {
            info!("Cache disabled (REDIS_URL not set)");
            Ok((CacheGateway::disabled(), None))
        }
        CacheSettings::Memory => {
            let cache = Arc::new(MemoryCache::new());
            let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
            info!("In-process cache enabled");
            Ok((CacheGateway::new(cache), Some(handle)))
        }
        CacheSettings::Redis(url) => {
            let cache = RedisCache::connect(url)
                .await
                .context("connecting to redis")?;
            cache.ping().await.context("pinging redis")?;
            info!("Redis connected");
            Ok((CacheGateway::new(Arc::new(cache)), None))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}

//! Service entry point: configuration, cache wiring, HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use plansmith::api::{start_server, AppState};
use plansmith::cache::{MemoryCache, RedisCache, ResultCache};
use plansmith::providers::YandexGptProvider;
use plansmith::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fail fast: missing credentials abort startup before any route exists.
    let config = Config::load().context("invalid service configuration")?;

    let provider = YandexGptProvider::from_config(&config)?;

    // The cache is best-effort. When Redis is unreachable at startup the
    // service still runs, with an in-process cache instead of a shared one.
    let cache: Arc<dyn ResultCache> = match RedisCache::connect(&config.redis_url()).await {
        Ok(redis) => Arc::new(redis),
        Err(e) => {
            warn!(error = %e, "redis unavailable, using in-process result cache");
            Arc::new(MemoryCache::new())
        }
    };

    let state = AppState::new(Arc::new(provider), cache, config.cache_ttl_secs);
    start_server(&config.bind, state).await
}

//! Redis-backed result cache.
//!
//! Uses a [`ConnectionManager`] so transient connection loss heals itself
//! between calls. Every backend error is logged at `warn` and degraded to a
//! miss or a dropped write; a broken cache must never fail a plan request.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, warn};

use super::ResultCache;

/// Result cache backed by a shared Redis instance.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis at `url` and return a cache handle.
    ///
    /// Fails only when the initial connection cannot be established; the
    /// caller decides whether to fall back to another backend.
    pub async fn connect(url: &str) -> crate::error::Result<Self> {
        let client = redis::Client::open(url).map_err(crate::error::PlanError::from)?;
        let manager = client
            .get_connection_manager()
            .await
            .map_err(crate::error::PlanError::from)?;
        debug!(url, "connected to redis result cache");
        Ok(Self { manager })
    }
}

#[async_trait]
impl ResultCache for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut con = self.manager.clone();
        match con.get::<_, Option<String>>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "redis GET failed, treating as cache miss");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) {
        let mut con = self.manager.clone();
        if let Err(e) = con.set_ex::<_, _, ()>(key, value, ttl_secs).await {
            warn!(error = %e, "redis SETEX failed, result not cached");
        }
    }
}

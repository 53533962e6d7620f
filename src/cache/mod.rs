//! Result cache: deterministic key derivation plus pluggable TTL backends.
//!
//! The cache is an optimization, not a correctness mechanism. Backends are
//! best-effort: a failing lookup is a miss, a failing store is a no-op, and
//! concurrent identical requests may both miss and both call upstream.

pub mod memory;
pub mod redis_cache;

pub use memory::MemoryCache;
pub use redis_cache::RedisCache;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Key/value store with per-entry expiration.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Look up a cached value. Expired entries and backend failures both
    /// surface as `None`.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value with a TTL. Backend failures are logged, not returned.
    async fn set(&self, key: &str, value: &str, ttl_secs: u64);
}

/// Derive a deterministic cache key from a request payload.
///
/// The payload is serialized to JSON with object keys sorted
/// lexicographically (`serde_json::Map` is a `BTreeMap`), so two requests
/// with identical field values hash identically regardless of construction
/// order. The digest is SHA-256, rendered as lowercase hex.
pub fn cache_key<T: Serialize>(payload: &T) -> String {
    let canonical = serde_json::to_value(payload)
        .unwrap_or(Value::Null)
        .to_string();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

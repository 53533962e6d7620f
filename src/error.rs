//! Error taxonomy for the plan service.

use thiserror::Error;

/// Main error type for the service.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Required configuration is missing or invalid. Fatal at startup,
    /// never produced once the service is running.
    #[error("configuration error: {0}")]
    Config(String),

    /// The completion service could not be reached or answered with a
    /// non-success status.
    #[error("upstream completion call failed: {0}")]
    Upstream(String),

    /// The completion service answered 2xx but the body did not match the
    /// expected shape (missing `result`, empty `alternatives`, missing
    /// message text). Distinct from a genuine empty plan.
    #[error("completion response did not match the expected shape")]
    MalformedResponse,

    /// Cache backend failure. Logged and treated as a miss; never surfaced
    /// to HTTP callers.
    #[error("cache backend error: {0}")]
    Cache(String),
}

/// Type alias for Result with our error type.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Helper to build the error for a missing environment variable.
pub fn env_error(var: &str) -> PlanError {
    PlanError::Config(format!("missing environment variable: {var}"))
}

impl From<redis::RedisError> for PlanError {
    fn from(err: redis::RedisError) -> Self {
        PlanError::Cache(err.to_string())
    }
}

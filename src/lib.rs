//! Plansmith — LLM-backed event plan generation service.
//!
//! Turns structured event descriptions into natural-language event plans by
//! delegating text generation to a YandexGPT-compatible completion endpoint,
//! caching results so identical requests within the TTL never pay for a
//! second upstream call.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod providers;

pub use config::Config;
pub use error::{PlanError, Result};

//! Completion providers for plan generation.

pub mod yandex;

pub use yandex::YandexGptProvider;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{EventRequest, PlanUpdateRequest};

/// The seam between the HTTP handlers and the completion service.
///
/// Mocked in handler tests so orchestration can be exercised without a
/// network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Produce a plan text for a new event.
    async fn generate_plan(&self, req: &EventRequest) -> Result<String>;

    /// Revise an existing plan according to the user's comment.
    async fn update_plan(&self, req: &PlanUpdateRequest) -> Result<String>;
}

//! Request and response bodies for the plan routes.
//!
//! Inputs derive `Serialize` as well: the cache key is a hash of their
//! canonical JSON form.

use serde::{Deserialize, Serialize};

/// A structured description of the event to plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    /// Venue, free text. Rendered as "TBD" in the prompt when absent.
    #[serde(default)]
    pub location: Option<String>,
    /// ISO-8601 date string. Rendered as "TBD" in the prompt when absent.
    #[serde(default)]
    pub event_date: Option<String>,
    pub event_type: String,
    pub participants: u32,
    /// Special requests from the requester, free text.
    #[serde(default)]
    pub user_prompt: Option<String>,
}

/// A previously generated plan plus the requested changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanUpdateRequest {
    pub original_plan: String,
    #[serde(default)]
    pub user_comment: Option<String>,
}

/// The single output type for both plan operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub plan_text: String,
}

//! Analytics event submission: models, API wrapper and detached tracking
//!
//! Tracking is strictly fire-and-forget. Nothing on the response path may
//! await an analytics call; use [`track_detached`], which spawns the
//! submission and only logs failures.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::services::http::{ApiError, HttpClient};

/// Session window used to derive stable-ish session ids (30 minutes)
const SESSION_WINDOW_SECS: i64 = 30 * 60;

/// A single tracking event as accepted by `POST /analytics/events`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub action: String,
    pub target_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<HashMap<String, String>>,
}

/// Event fields a call site provides; channel/session/device are filled in
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub action: &'static str,
    pub target_type: &'static str,
    pub target_id: Option<String>,
    pub props: HashMap<String, String>,
}

impl EventDraft {
    pub fn new(action: &'static str, target_type: &'static str) -> Self {
        Self {
            action,
            target_type,
            target_id: None,
            props: HashMap::new(),
        }
    }

    pub fn target(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    pub fn prop(mut self, key: &str, value: impl Into<String>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn prop_opt(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.props.insert(key.to_string(), value);
        }
        self
    }
}

/// Identity of the Telegram interaction an event belongs to
#[derive(Debug, Clone, Default)]
pub struct TelegramContext {
    pub user_id: i64,
    pub chat_id: i64,
    pub message_id: Option<i32>,
    pub username: Option<String>,
}

impl TelegramContext {
    /// Builds a context from a command/callback input, when a user is present
    pub fn from_input(input: &crate::core::types::CommandInput) -> Option<Self> {
        let user = input.user.as_ref()?;
        let user_id = user.id.parse::<i64>().ok()?;
        Some(Self {
            user_id,
            // Chat id is not threaded through the generic input
            chat_id: 0,
            message_id: input.message_id,
            username: user.name.clone(),
        })
    }
}

/// Thin wrapper over the analytics endpoint
pub struct AnalyticsApiService {
    http: Arc<HttpClient>,
}

impl AnalyticsApiService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn track_event(&self, event: &TrackingEvent) -> Result<(), ApiError> {
        log::info!(
            "Tracking event: {} {} {:?}",
            event.action,
            event.target_type,
            event.target_id
        );

        self.http
            .post_json::<serde_json::Value, _>("/analytics/events", event)
            .await?;
        Ok(())
    }
}

/// Analytics scope bound to one Telegram interaction
pub struct Analytics {
    service: Arc<AnalyticsApiService>,
    ctx: TelegramContext,
}

impl Analytics {
    pub fn new(service: Arc<AnalyticsApiService>, ctx: TelegramContext) -> Self {
        Self { service, ctx }
    }

    fn session_id(&self) -> String {
        let window = Utc::now().timestamp() / SESSION_WINDOW_SECS;
        format!("telegram_{}_{}_{}", self.ctx.user_id, self.ctx.chat_id, window)
    }

    fn device_id(&self) -> String {
        format!("telegram_device_{}", self.ctx.user_id)
    }

    fn build(&self, draft: EventDraft) -> TrackingEvent {
        TrackingEvent {
            action: draft.action.to_string(),
            target_type: draft.target_type.to_string(),
            target_id: draft.target_id,
            channel: "TELEGRAM".to_string(),
            user_agent: Some("Telegram Bot".to_string()),
            is_mobile: Some(true),
            session_id: Some(self.session_id()),
            device_id: Some(self.device_id()),
            props: if draft.props.is_empty() {
                None
            } else {
                Some(draft.props)
            },
        }
    }

    pub async fn track(&self, draft: EventDraft) -> Result<(), ApiError> {
        let event = self.build(draft);
        self.service.track_event(&event).await
    }
}

/// Submits an event off the critical path
///
/// The spawned task owns the scope; the caller continues immediately and a
/// failed submission is only ever logged.
pub fn track_detached(analytics: Analytics, draft: EventDraft) {
    tokio::spawn(async move {
        let action = draft.action;
        let target_type = draft.target_type;
        if let Err(e) = analytics.track(draft).await {
            log::warn!(
                "Analytics tracking failed (non-blocking): {} [{} {}]",
                e,
                action,
                target_type
            );
        }
    });
}

/// Prebuilt drafts for the events this bot emits
pub mod events {
    use super::EventDraft;
    use crate::services::models::Race;

    pub fn race_view(race: &Race) -> EventDraft {
        EventDraft::new("VIEW", "RACE_EVENT")
            .target(format!("race:{}", race.id))
            .prop("race_name", race.title.clone())
            .prop("distance", race.distances.join(", "))
            .prop_opt("city", race.city.clone())
    }

    pub fn registration_click(race: &Race) -> EventDraft {
        EventDraft::new("CLICK", "RACE_REGISTRATION")
            .target(format!("race:{}", race.id))
            .prop("race_name", race.title.clone())
            .prop("registration_link", race.link.clone())
            .prop("provider", "external")
    }

    pub fn favorite_action(race: &Race, added: bool) -> EventDraft {
        EventDraft::new(if added { "FAVORITE_ADD" } else { "FAVORITE_REMOVE" }, "RACE_EVENT")
            .target(format!("race:{}", race.id))
            .prop("race_name", race.title.clone())
            .prop("distance", race.distances.join(", "))
            .prop_opt("city", race.city.clone())
    }

    pub fn favorites_list_view(count: usize) -> EventDraft {
        EventDraft::new("VIEW", "FAVORITES_LIST")
            .target("favorites_list")
            .prop("favorites_count", count.to_string())
            .prop("has_favorites", if count > 0 { "true" } else { "false" })
    }

    pub fn favorites_command(count: usize) -> EventDraft {
        EventDraft::new("COMMAND", "FAVORITES_LIST")
            .target("favorites_command")
            .prop("command", "/favoritas")
            .prop("favorites_count", count.to_string())
            .prop("has_favorites", if count > 0 { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_camel_case_and_skips_absent() {
        let event = TrackingEvent {
            action: "VIEW".to_string(),
            target_type: "RACE_EVENT".to_string(),
            target_id: Some("race:abc".to_string()),
            channel: "TELEGRAM".to_string(),
            user_agent: None,
            is_mobile: Some(true),
            session_id: None,
            device_id: None,
            props: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["targetType"], "RACE_EVENT");
        assert_eq!(json["isMobile"], true);
        assert!(json.get("sessionId").is_none());
        assert!(json.get("props").is_none());
    }

    #[test]
    fn test_draft_builder_collects_props() {
        let draft = EventDraft::new("CLICK", "RACE_REGISTRATION")
            .target("race:abc")
            .prop("provider", "external")
            .prop_opt("city", None);
        assert_eq!(draft.target_id.as_deref(), Some("race:abc"));
        assert_eq!(draft.props.len(), 1);
    }
}

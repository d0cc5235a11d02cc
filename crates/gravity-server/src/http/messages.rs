use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use gravity_core::api::{DataEnvelope, DraftRequest, DraftResponse, SendMessageRequest};
use gravity_core::engine::{self, drafts::current_draft};
use gravity_core::models::StreamItem;

use super::AppState;
use crate::error::ApiResult;

fn draft_response(draft: String) -> Json<DraftResponse> {
    Json(DraftResponse {
        draft,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Handler for POST /api/messages/:item_id
pub(super) async fn send_message(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<Json<DataEnvelope<StreamItem>>> {
    let now = Utc::now();
    let mut appended = 0;
    let item = state.repo.update(&item_id, &mut |item: &mut StreamItem| {
        appended = engine::send_message(item, &request.content, now);
    })?;
    tracing::info!(item_id = %item.id, appended, "Message sent");
    Ok(Json(DataEnvelope::new(item)))
}

/// Handler for POST /api/messages/:item_id/draft
///
/// Without a refinement the current draft is returned as is.
pub(super) async fn refine_draft(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(request): Json<DraftRequest>,
) -> ApiResult<Json<DraftResponse>> {
    let refinement = request.refinement.as_deref().unwrap_or_default();

    let mut draft = String::new();
    state.repo.update(&item_id, &mut |item: &mut StreamItem| {
        let message = request
            .message_id
            .as_deref()
            .and_then(|id| item.find_message_mut(id));
        let current = current_draft(message.as_deref());
        draft = engine::refine_draft(current, refinement);
        if let Some(insight) = message.and_then(|m| m.draft_insight_mut()) {
            insight.content = draft.clone();
        }
    })?;

    tracing::debug!(item_id = %item_id, refined = !refinement.trim().is_empty(), "Draft requested");
    Ok(draft_response(draft))
}

/// Handler for POST /api/messages/:item_id/draft/regenerate
pub(super) async fn regenerate_draft(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(request): Json<DraftRequest>,
) -> ApiResult<Json<DraftResponse>> {
    let mut draft = String::new();
    state.repo.update(&item_id, &mut |item: &mut StreamItem| {
        draft = state.drafts.lock().next_draft().to_string();
        if let Some(insight) = request
            .message_id
            .as_deref()
            .and_then(|id| item.find_message_mut(id))
            .and_then(|m| m.draft_insight_mut())
        {
            insight.content = draft.clone();
        }
    })?;

    tracing::debug!(item_id = %item_id, "Draft regenerated");
    Ok(draft_response(draft))
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use gravity_core::api::{DataEnvelope, StreamMeta, StreamQuery, StreamResponse};
use gravity_core::engine::{paginate, rank_items};
use gravity_core::models::{Priority, StreamFilter, StreamItem};
use gravity_core::GravityError;

use super::AppState;
use crate::error::ApiResult;

/// Handler for GET /api/stream
pub(super) async fn list_stream(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Json<StreamResponse> {
    let filter = StreamFilter::from_param(query.filter.as_deref());
    let priority = query.priority.as_deref().and_then(Priority::from_param);
    let limit = state
        .limits
        .clamp(query.limit.as_deref().and_then(|l| l.trim().parse().ok()));

    let items = state.repo.list();
    let page = paginate(rank_items(&items, filter, priority), limit, query.cursor.as_deref());

    tracing::debug!(
        filter = filter.label(),
        returned = page.items.len(),
        total = page.total_count,
        "Listing stream"
    );

    Json(StreamResponse {
        data: page.items.into_iter().cloned().collect(),
        meta: StreamMeta {
            cursor: page.cursor,
            has_more: page.has_more,
            total_count: page.total_count,
        },
    })
}

/// Handler for GET /api/stream/:id
pub(super) async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataEnvelope<StreamItem>>> {
    let item = state.repo.get(&id).ok_or(GravityError::NotFound(id))?;
    Ok(Json(DataEnvelope::new(item)))
}

/// Handler for PATCH|POST /api/stream/:id/read
pub(super) async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataEnvelope<StreamItem>>> {
    let item = state.repo.update(&id, &mut |item: &mut StreamItem| {
        if item.mark_read() {
            tracing::info!(item_id = %item.id, "Marked item read");
        }
    })?;
    Ok(Json(DataEnvelope::new(item)))
}

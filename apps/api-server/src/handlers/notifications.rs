//! Notification feed handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::domain::Notification;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct FeedResponse {
    notifications: Vec<Notification>,
    unread_count: usize,
}

#[derive(Serialize)]
struct MarkReadResponse {
    marked: u64,
}

/// GET /api/notifications - the caller's feed, newest first.
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let feed = state.feed.list(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(FeedResponse {
        notifications: feed.notifications,
        unread_count: feed.unread_count,
    }))
}

/// POST /api/notifications/read - mark every unread notification read.
pub async fn mark_all_read(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let marked = state.feed.mark_all_read(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(MarkReadResponse { marked }))
}

//! Axum route handlers for the Notifications API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::notification::{NewNotification, Notification};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

/// GET /api/v1/notifications
pub async fn handle_list_notifications(
    State(state): State<AppState>,
) -> Result<Json<NotificationListResponse>, AppError> {
    let notifications = state.notifications.list().await;
    let unread_count = state.notifications.unread_count().await;
    Ok(Json(NotificationListResponse {
        notifications,
        unread_count,
    }))
}

/// POST /api/v1/notifications
pub async fn handle_add_notification(
    State(state): State<AppState>,
    Json(request): Json<NewNotification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::blank("title"));
    }
    let notification = state.notifications.add(request).await;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PATCH /api/v1/notifications/:id/read
pub async fn handle_mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.notifications.mark_read(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Notification {id} not found")))
    }
}

/// POST /api/v1/notifications/read-all
pub async fn handle_mark_all_read(State(state): State<AppState>) -> StatusCode {
    state.notifications.mark_all_read().await;
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/notifications/:id
pub async fn handle_remove_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.notifications.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Notification {id} not found")))
    }
}

/// DELETE /api/v1/notifications
pub async fn handle_clear_notifications(State(state): State<AppState>) -> StatusCode {
    state.notifications.clear().await;
    StatusCode::NO_CONTENT
}

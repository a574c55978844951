//! User profile, picture, subscription and account deletion handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use quill_core::domain::User;
use quill_core::ports::TokenService;
use quill_core::service::{PasswordChange, ProfileUpdate};
use quill_shared::dto::{SubscriptionResponse, UpdateProfileRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::auth::mint_token;

pub(super) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        picture: user.picture.clone(),
        bio: user.bio.clone(),
        subscriber_count: user.subscribers.len(),
        created_at: user.created_at.to_rfc3339(),
    }
}

/// GET /api/users/{user_id} - public profile.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let user = state.account.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user_response(&user)))
}

/// PUT /api/users/me - update profile fields.
///
/// Responds with a fresh assertion: the old one still carries the
/// pre-update display snapshot.
pub async fn update_profile(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let password_change = match (req.current_password, req.new_password) {
        (Some(current), Some(new)) => {
            if new.len() < 8 {
                return Err(AppError::BadRequest(
                    "Password must be at least 8 characters".to_string(),
                ));
            }
            Some(PasswordChange { current, new })
        }
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "A password change requires both the current and the new password".to_string(),
            ));
        }
    };

    let update = ProfileUpdate {
        first_name: req.first_name,
        last_name: req.last_name,
        bio: req.bio,
        picture: req.picture,
        password_change,
    };

    let user = state.account.update_profile(identity.user_id, update).await?;
    Ok(HttpResponse::Ok().json(mint_token(&token_service, &user)?))
}

/// POST /api/users/me/picture - upload an avatar image.
///
/// The raw request body is handed to the object store; the returned URL
/// becomes the new picture and propagates to every denormalized snapshot.
pub async fn upload_picture(
    state: web::Data<AppState>,
    identity: Identity,
    req: HttpRequest,
    bytes: web::Bytes,
) -> AppResult<HttpResponse> {
    let media = state
        .media
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("Picture uploads are not configured".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("Empty upload".to_string()));
    }

    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");
    if !content_type.starts_with("image/") {
        return Err(AppError::BadRequest("Expected an image payload".to_string()));
    }

    let url = media.upload(bytes.to_vec(), content_type).await?;
    let user = state.account.set_picture(identity.user_id, url).await?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}

/// DELETE /api/users/me - delete the account and everything it owns.
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.account.delete_account(identity.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/users/{user_id}/subscription - toggle the caller's
/// subscription to another user.
pub async fn toggle_subscription(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state
        .subscriptions
        .toggle(identity.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SubscriptionResponse {
        subscribed: result.subscribed,
        subscriber_count: result.subscriber_count,
    }))
}

//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::ports::TokenService;
use quill_shared::dto::{AuthResponse, FederatedLoginRequest, LoginRequest, RegisterRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::users::user_response;

/// Mint an identity assertion embedding the user's current display snapshot.
pub(super) fn mint_token(
    token_service: &Arc<dyn TokenService>,
    user: &User,
) -> AppResult<AuthResponse> {
    let token = token_service
        .generate_token(user.id, &user.email, &user.snapshot())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    })
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "First and last name are required".to_string(),
        ));
    }

    let user = state
        .account
        .register(
            req.email,
            &req.password,
            req.first_name,
            req.last_name,
            req.date_of_birth,
        )
        .await?;

    Ok(HttpResponse::Created().json(mint_token(&token_service, &user)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .account
        .authenticate(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            // An unknown email reads the same as a bad password.
            quill_core::DomainError::NotFoundByKey(_) => AppError::Unauthorized,
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(mint_token(&token_service, &user)?))
}

/// POST /api/auth/oauth - login through a federated identity provider.
pub async fn federated_login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<FederatedLoginRequest>,
) -> AppResult<HttpResponse> {
    let verifier = state
        .federation
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("Federated login is not configured".to_string()))?;

    let profile = verifier.verify(&body.provider_token).await?;
    let user = state.account.federated_login(profile).await?;

    Ok(HttpResponse::Ok().json(mint_token(&token_service, &user)?))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.account.get_user(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(user_response(&user)))
}

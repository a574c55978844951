//! Post, comment, like and grammar-assist handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::ports::apply_suggestions;
use quill_shared::dto::{
    CreateCommentRequest, CreatePostRequest, GrammarCheckRequest, GrammarCheckResponse,
    SuggestionDto, UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let post = state
        .content
        .create_post(identity.user_id, req.title, &req.content, req.image)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{post_id} - public read.
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.content.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/users/{user_id}/posts - public read.
pub async fn list_by_author(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let posts = state.content.list_posts_by_author(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /api/posts/{post_id}
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .content
        .edit_post(
            identity.user_id,
            path.into_inner(),
            req.title,
            req.content.as_deref(),
            req.image,
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{post_id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .content
        .delete_post(identity.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{post_id}/like - strict toggle.
pub async fn toggle_like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .content
        .toggle_like(identity.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/{post_id}/comments - public read, oldest first.
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state.content.list_comments(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/posts/{post_id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Comment cannot be empty".to_string()));
    }

    let comment = state
        .content
        .add_comment(identity.user_id, path.into_inner(), req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .content
        .delete_comment(identity.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/grammar/check - suggestions for a draft, plus the text with
/// each suggestion's first occurrence applied.
pub async fn grammar_check(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<GrammarCheckRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let suggestions = state.grammar.suggest(&req.text).await?;
    let corrected = apply_suggestions(&req.text, &suggestions);

    Ok(HttpResponse::Ok().json(GrammarCheckResponse {
        corrected,
        suggestions: suggestions
            .into_iter()
            .map(|s| SuggestionDto {
                original: s.original,
                replacement: s.replacement,
            })
            .collect(),
    }))
}

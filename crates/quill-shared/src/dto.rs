//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to login through a federated identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederatedLoginRequest {
    pub provider_token: String,
}

/// Request to update profile fields. Omitted fields are left untouched;
/// a password change must include the current password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub picture: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Request to create a post. `content` is raw inline markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Request to edit a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Request for grammar suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarCheckRequest {
    pub text: String,
}

/// Grammar suggestions plus the text with each first occurrence replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarCheckResponse {
    pub corrected: String,
    pub suggestions: Vec<SuggestionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionDto {
    pub original: String,
    pub replacement: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture: String,
    pub bio: String,
    pub subscriber_count: usize,
    pub created_at: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response to a subscription toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub subscribed: bool,
    pub subscriber_count: usize,
}

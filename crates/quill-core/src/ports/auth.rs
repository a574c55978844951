//! Authentication ports: identity assertions, secret hashing and federated
//! identity verification.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::AuthorSnapshot;

/// Claims carried by an identity assertion. The display snapshot is the one
/// cached at issuance time; it is trusted without re-deriving.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture: String,
    pub exp: i64,
}

/// Identity assertion issuer - mints and verifies signed, time-bounded
/// tokens embedding the user's cached display snapshot.
pub trait TokenService: Send + Sync {
    /// Mint an assertion for a user with the given display snapshot.
    fn generate_token(
        &self,
        user_id: Uuid,
        email: &str,
        snapshot: &AuthorSnapshot,
    ) -> Result<String, AuthError>;

    /// Validate and decode an assertion.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Assertion lifetime, for the transport's `expires_in` field.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Verified profile supplied by a third-party identity federation.
#[derive(Debug, Clone)]
pub struct FederatedProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture: String,
}

/// Third-party identity federation - exchanges a provider token for a
/// verified profile.
#[async_trait]
pub trait FederatedIdentityVerifier: Send + Sync {
    async fn verify(&self, provider_token: &str) -> Result<FederatedProfile, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Federation error: {0}")]
    Federation(String),
}

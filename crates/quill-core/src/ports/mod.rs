//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod grammar;
mod media;
mod repository;

pub use auth::{
    AuthError, FederatedIdentityVerifier, FederatedProfile, PasswordService, TokenClaims,
    TokenService,
};
pub use grammar::{GrammarError, GrammarService, Suggestion, apply_suggestions};
pub use media::{MediaError, MediaStore};
pub use repository::{
    BaseRepository, CommentRepository, NotificationRepository, PostRepository, UserRepository,
};

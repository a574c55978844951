//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! document-store repositories (in-memory and Postgres), the JWT identity
//! assertion issuer, Argon2 secret hashing, and HTTP clients for the
//! object store, the grammar service and federated identity.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM-backed stores; without it only the
//!   in-memory stores are available.

pub mod auth;
pub mod database;
pub mod federation;
pub mod grammar;
pub mod media;
pub mod memory;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use federation::OidcUserinfoVerifier;
pub use grammar::{HttpGrammarClient, NoopGrammarClient};
pub use media::HttpMediaStore;
pub use memory::{
    InMemoryCommentRepository, InMemoryNotificationRepository, InMemoryPostRepository,
    InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConnections, PostgresCommentRepository, PostgresNotificationRepository,
    PostgresPostRepository, PostgresUserRepository,
};
pub use database::DatabaseConfig;

//! In-memory store implementations.
//!
//! Used as the fallback when no database is configured and as the store
//! doubles for service-level tests. Data is lost on process restart.

mod comment;
mod notification;
mod post;
mod user;

pub use comment::InMemoryCommentRepository;
pub use notification::InMemoryNotificationRepository;
pub use post::InMemoryPostRepository;
pub use user::InMemoryUserRepository;

#[cfg(test)]
mod tests;

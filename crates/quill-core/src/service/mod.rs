//! Core services - the cross-entity consistency logic.
//!
//! Each service takes its stores and collaborators as injected `Arc<dyn …>`
//! ports so the side-effecting steps (snapshot propagation, cascade
//! deletion, notification fan-out) are explicit and testable.

mod account;
mod content;
mod notifications;
mod propagation;
mod subscription;

pub use account::{AccountService, PasswordChange, ProfileUpdate};
pub use content::ContentService;
pub use notifications::{NotificationFeed, NotificationService};
pub use propagation::ConsistencyPropagator;
pub use subscription::{SubscriptionService, SubscriptionState};

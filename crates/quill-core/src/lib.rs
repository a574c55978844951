//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! Entities, ports and the cross-entity consistency services live here;
//! infrastructure (stores, token issuer, HTTP clients) is injected through
//! the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod markup;
pub mod ports;
pub mod service;

pub use error::DomainError;

//! SeaORM entities mirroring the domain records. Subscriber and like sets
//! are stored as JSONB arrays of UUIDs.

pub mod comment;
pub mod notification;
pub mod post;
pub mod user;

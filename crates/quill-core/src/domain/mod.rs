//! Domain entities - the core business objects.

mod comment;
mod notification;
mod post;
mod user;

pub use comment::Comment;
pub use notification::{Notification, NotificationKind};
pub use post::Post;
pub use user::{AuthorSnapshot, User};

//! Domain entities - the core business objects.

mod comment;
mod draft;
mod like;
mod post;

pub use comment::{Comment, CommentId};
pub use draft::{ContentDraft, validate_username};
pub use like::{Like, LikeId};
pub use post::{Post, PostId};

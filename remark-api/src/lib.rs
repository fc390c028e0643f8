mod comment;
pub use comment::{Comment, CommentId, Field, NewComment, PostId};

mod error;
pub use error::Error;

mod comment;

pub use comment::{Comment, CommentResponse, CreateCommentRequest};

mod add_comment;
mod delete_comment;
mod list_comments;
mod toggle_comment_like;

pub use add_comment::{
    AddCommentCommand, AddCommentCommandError, AddCommentError, AddCommentUseCase,
    MAX_COMMENT_LEN,
};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use list_comments::{ListCommentsError, ListCommentsUseCase};
pub use toggle_comment_like::{ToggleCommentLikeError, ToggleCommentLikeUseCase};

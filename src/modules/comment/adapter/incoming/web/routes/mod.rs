mod add_comment;
mod delete_comment;
mod list_comments;
mod toggle_comment_like;

pub use add_comment::{__path_add_comment_handler, add_comment_handler, AddCommentRequest};
pub use delete_comment::{__path_delete_comment_handler, delete_comment_handler};
pub use list_comments::{
    __path_list_comments_handler, __path_public_comments_handler, list_comments_handler,
    public_comments_handler, CommentsQuery,
};
pub use toggle_comment_like::{
    __path_toggle_comment_like_handler, toggle_comment_like_handler, ToggleCommentLikeRequest,
};

use std::sync::Arc;

use crate::modules::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase, ToggleCommentLikeUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub add: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn ToggleCommentLikeUseCase + Send + Sync>,
    pub list: Arc<dyn ListCommentsUseCase + Send + Sync>,
}

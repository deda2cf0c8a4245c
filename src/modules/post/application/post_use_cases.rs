use std::sync::Arc;

use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, EditPostUseCase, ListPostsUseCase,
    TogglePostLikeUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn TogglePostLikeUseCase + Send + Sync>,
    pub list: Arc<dyn ListPostsUseCase + Send + Sync>,
}

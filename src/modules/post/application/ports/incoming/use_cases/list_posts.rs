use async_trait::async_trait;

use crate::modules::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError>;
}

use async_trait::async_trait;

use crate::modules::post::application::ports::{
    incoming::use_cases::{ListPostsError, ListPostsUseCase},
    outgoing::{PageRequest, PageResult, PostListFilter, PostQuery, PostView},
};

#[derive(Debug, Clone)]
pub struct ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListPostsError::QueryFailed(e.to_string()))
    }
}

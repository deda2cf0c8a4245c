use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::email::application::ports::outgoing::{EngagementNotifier, PostCommentedEvent};
use crate::modules::comment::application::domain::entities::{CommentNode, CommentTarget};
use crate::modules::comment::application::ports::{
    incoming::use_cases::{AddCommentCommand, AddCommentError, AddCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, NewComment},
};
use crate::modules::post::application::domain::entities::PostRecord;
use crate::modules::post::application::ports::outgoing::PostQuery;

#[derive(Clone)]
pub struct AddCommentService<R, Q, P>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    repository: R,
    query: Q,
    posts: P,
    notifier: Arc<dyn EngagementNotifier + Send + Sync>,
}

impl<R, Q, P> fmt::Debug for AddCommentService<R, Q, P>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddCommentService").finish_non_exhaustive()
    }
}

impl<R, Q, P> AddCommentService<R, Q, P>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        query: Q,
        posts: P,
        notifier: Arc<dyn EngagementNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            query,
            posts,
            notifier,
        }
    }

    /// Post a top-level comment may attach to; authors cannot comment on their own post.
    async fn commentable_post(
        &self,
        command: &AddCommentCommand,
        post_id: uuid::Uuid,
    ) -> Result<PostRecord, AddCommentError> {
        let post = self
            .posts
            .find_record(post_id)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?
            .ok_or(AddCommentError::PostNotFound)?;

        if post.is_owned_by(command.author()) {
            return Err(AddCommentError::SelfCommentForbidden);
        }

        Ok(post)
    }
}

#[async_trait]
impl<R, Q, P> AddCommentUseCase for AddCommentService<R, Q, P>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(&self, command: AddCommentCommand) -> Result<CommentNode, AddCommentError> {
        let post = match command.target() {
            CommentTarget::Post(post_id) => Some(self.commentable_post(&command, post_id).await?),
            CommentTarget::Comment(parent_id) => {
                self.query
                    .find_record(parent_id)
                    .await
                    .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?
                    .ok_or(AddCommentError::ParentNotFound)?;
                None
            }
        };

        let created = self
            .repository
            .create_comment(NewComment {
                author: command.author(),
                content: command.content().to_string(),
                target: command.target(),
            })
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?;

        info!("Comment {} added by {}", created.id, created.author);

        if let Some(post) = post {
            self.notifier.post_commented(PostCommentedEvent {
                post_id: post.id,
                post_title: post.title,
                post_owner: post.owner,
                commenter: command.author(),
                comment: command.content().to_string(),
            });
        }

        self.query
            .find_node(created.id)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                AddCommentError::RepositoryError(format!("comment {} missing after insert", created.id))
            })
    }
}

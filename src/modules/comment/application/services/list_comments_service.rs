use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::{CommentNode, MAX_COMMENT_DEPTH};
use crate::modules::comment::application::ports::{
    incoming::use_cases::{ListCommentsError, ListCommentsUseCase},
    outgoing::CommentQuery,
};
use crate::modules::post::application::ports::outgoing::PostQuery;

/// Loads a post's comment tree one level per query, breadth first.
#[derive(Debug, Clone)]
pub struct ListCommentsService<Q, P>
where
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    query: Q,
    posts: P,
}

impl<Q, P> ListCommentsService<Q, P>
where
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    pub fn new(query: Q, posts: P) -> Self {
        Self { query, posts }
    }

    async fn load_levels(&self, post_id: Uuid) -> Result<Vec<Vec<CommentNode>>, ListCommentsError> {
        let query_err = |e: String| ListCommentsError::QueryFailed(e);

        let top = self
            .query
            .top_level(post_id)
            .await
            .map_err(|e| query_err(e.to_string()))?;
        let mut levels = vec![top];

        while levels.len() < MAX_COMMENT_DEPTH {
            let parent_ids: Vec<Uuid> = levels
                .last()
                .map(|level| level.iter().map(|n| n.id).collect())
                .unwrap_or_default();
            if parent_ids.is_empty() {
                break;
            }

            let replies = self
                .query
                .replies_to(parent_ids)
                .await
                .map_err(|e| query_err(e.to_string()))?;
            if replies.is_empty() {
                break;
            }
            levels.push(replies);
        }

        if levels.len() == MAX_COMMENT_DEPTH {
            if let Some(deepest) = levels.last_mut() {
                let ids = deepest.iter().map(|n| n.id).collect();
                let with_replies = self
                    .query
                    .ids_with_replies(ids)
                    .await
                    .map_err(|e| query_err(e.to_string()))?;

                for node in deepest.iter_mut() {
                    node.has_more_replies = with_replies.contains(&node.id);
                }
            }
        }

        Ok(levels)
    }
}

/// Attaches each level to its parents, deepest first, preserving query order.
fn assemble_tree(mut levels: Vec<Vec<CommentNode>>) -> Vec<CommentNode> {
    let mut children: HashMap<Uuid, Vec<CommentNode>> = HashMap::new();

    while let Some(mut level) = levels.pop() {
        for node in level.iter_mut() {
            node.replies = children.remove(&node.id).unwrap_or_default();
        }

        if levels.is_empty() {
            return level;
        }

        for node in level {
            if let Some(parent_id) = node.parent_comment_id {
                children.entry(parent_id).or_default().push(node);
            }
        }
    }

    Vec::new()
}

#[async_trait]
impl<Q, P> ListCommentsUseCase for ListCommentsService<Q, P>
where
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentNode>, ListCommentsError> {
        self.posts
            .find_record(post_id)
            .await
            .map_err(|e| ListCommentsError::QueryFailed(e.to_string()))?
            .ok_or(ListCommentsError::PostNotFound)?;

        let levels = self.load_levels(post_id).await?;
        Ok(assemble_tree(levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::comment::application::domain::entities::CommentTarget;
    use crate::modules::comment::application::services::test_doubles::InMemoryComments;
    use crate::modules::post::application::services::test_doubles::{post_record, InMemoryPosts};

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn setup() -> (InMemoryComments, Uuid, ListCommentsService<InMemoryComments, InMemoryPosts>) {
        let post = post_record(user(), "Hello");
        let posts = InMemoryPosts::with(vec![post.clone()]);
        let comments = InMemoryComments::default();
        let service = ListCommentsService::new(comments.clone(), posts);
        (comments, post.id, service)
    }

    #[tokio::test]
    async fn builds_nested_tree_in_creation_order() {
        // Arrange
        let (comments, post_id, service) = setup();
        let first = comments.seed(user(), CommentTarget::Post(post_id));
        let second = comments.seed(user(), CommentTarget::Post(post_id));
        let reply_a = comments.seed(user(), CommentTarget::Comment(first.id));
        let reply_b = comments.seed(user(), CommentTarget::Comment(first.id));
        let nested = comments.seed(user(), CommentTarget::Comment(reply_b.id));

        // Act
        let tree = service.execute(post_id).await.unwrap();

        // Assert
        let top_ids: Vec<Uuid> = tree.iter().map(|n| n.id).collect();
        assert_eq!(top_ids, vec![first.id, second.id]);

        let replies: Vec<Uuid> = tree[0].replies.iter().map(|n| n.id).collect();
        assert_eq!(replies, vec![reply_a.id, reply_b.id]);
        assert_eq!(tree[0].replies[1].replies[0].id, nested.id);
        assert!(tree[1].replies.is_empty());
        assert!(tree.iter().all(|n| !n.has_more_replies));
    }

    #[tokio::test]
    async fn cuts_off_at_max_depth_and_flags_more_replies() {
        let (comments, post_id, service) = setup();
        let mut parent = comments.seed(user(), CommentTarget::Post(post_id));
        let mut chain = vec![parent.id];
        for _ in 0..MAX_COMMENT_DEPTH {
            parent = comments.seed(user(), CommentTarget::Comment(parent.id));
            chain.push(parent.id);
        }

        let tree = service.execute(post_id).await.unwrap();

        let mut node = &tree[0];
        let mut depth = 1;
        while let Some(child) = node.replies.first() {
            node = child;
            depth += 1;
        }
        assert_eq!(depth, MAX_COMMENT_DEPTH);
        assert_eq!(node.id, chain[MAX_COMMENT_DEPTH - 1]);
        assert!(node.has_more_replies);
    }

    #[tokio::test]
    async fn post_without_comments_is_empty() {
        let (_, post_id, service) = setup();

        let tree = service.execute(post_id).await.unwrap();

        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn missing_post() {
        let (_, _, service) = setup();

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ListCommentsError::PostNotFound)));
    }

    #[test]
    fn assemble_tree_of_no_levels_is_empty() {
        assert!(assemble_tree(Vec::new()).is_empty());
    }
}

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::{comment_likes, comments};
use crate::modules::comment::application::domain::entities::{CommentNode, CommentRecord};
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};
use crate::shared::authors::{load_authors, unknown_author};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn nodes(&self, select: Select<comments::Entity>) -> Result<Vec<CommentNode>, DbErr> {
        let models = select
            .order_by_asc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let comment_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let authors = load_authors(&*self.db, models.iter().map(|m| m.user_id).collect()).await?;

        let mut likers: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for like in comment_likes::Entity::find()
            .filter(comment_likes::Column::CommentId.is_in(comment_ids))
            .order_by_asc(comment_likes::Column::CreatedAt)
            .all(&*self.db)
            .await?
        {
            likers.entry(like.comment_id).or_default().push(like.user_id);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let author = authors
                    .get(&m.user_id)
                    .cloned()
                    .unwrap_or_else(|| unknown_author(m.user_id));
                let likes = likers.remove(&m.id).unwrap_or_default();

                CommentNode {
                    id: m.id,
                    content: m.content,
                    author,
                    post_id: m.post_id,
                    parent_comment_id: m.parent_comment_id,
                    likes_count: likes.len() as u64,
                    likes,
                    created_at: m.created_at.into(),
                    updated_at: m.updated_at.into(),
                    has_more_replies: false,
                    replies: Vec::new(),
                }
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_record(
        &self,
        comment_id: Uuid,
    ) -> Result<Option<CommentRecord>, CommentQueryError> {
        let comment = comments::Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(comment.map(|m| m.to_record()))
    }

    async fn find_node(&self, comment_id: Uuid) -> Result<Option<CommentNode>, CommentQueryError> {
        let mut nodes = self
            .nodes(comments::Entity::find_by_id(comment_id))
            .await
            .map_err(map_db_err)?;

        Ok(nodes.pop())
    }

    async fn top_level(&self, post_id: Uuid) -> Result<Vec<CommentNode>, CommentQueryError> {
        self.nodes(comments::Entity::find().filter(comments::Column::PostId.eq(post_id)))
            .await
            .map_err(map_db_err)
    }

    async fn replies_to(
        &self,
        parent_ids: Vec<Uuid>,
    ) -> Result<Vec<CommentNode>, CommentQueryError> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.nodes(
            comments::Entity::find().filter(comments::Column::ParentCommentId.is_in(parent_ids)),
        )
        .await
        .map_err(map_db_err)
    }

    async fn ids_with_replies(
        &self,
        comment_ids: Vec<Uuid>,
    ) -> Result<HashSet<Uuid>, CommentQueryError> {
        if comment_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let parents = comments::Entity::find()
            .select_only()
            .column(comments::Column::ParentCommentId)
            .filter(comments::Column::ParentCommentId.is_in(comment_ids))
            .distinct()
            .into_tuple::<Option<Uuid>>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(parents.into_iter().flatten().collect())
    }

    async fn has_liked(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<bool, CommentQueryError> {
        let like = comment_likes::Entity::find_by_id((comment_id, user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(like.is_some())
    }

    async fn count_likes(&self, comment_id: Uuid) -> Result<u64, CommentQueryError> {
        let total = comment_likes::Entity::find()
            .select_only()
            .column_as(comment_likes::Column::UserId.count(), "total")
            .filter(comment_likes::Column::CommentId.eq(comment_id))
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .unwrap_or(0);

        Ok(total.max(0) as u64)
    }
}

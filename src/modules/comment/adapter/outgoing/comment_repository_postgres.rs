use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::{comment_likes, comments};
use crate::modules::comment::application::domain::entities::{CommentRecord, CommentTarget};
use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    match e {
        DbErr::RecordNotFound(_) => CommentRepositoryError::NotFound,
        other => CommentRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let (post_id, parent_comment_id) = match comment.target {
            CommentTarget::Post(id) => (Some(id), None),
            CommentTarget::Comment(id) => (None, Some(id)),
        };

        let active = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(comment.author.into()),
            post_id: Set(post_id),
            parent_comment_id: Set(parent_comment_id),
            content: Set(comment.content),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        // Replies and like rows follow through ON DELETE CASCADE.
        let result = comments::Entity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn add_like(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommentRepositoryError> {
        let like = comment_likes::ActiveModel {
            comment_id: Set(comment_id),
            user_id: Set(user_id.into()),
            created_at: NotSet,
        };

        match comment_likes::Entity::insert(like)
            .exec_without_returning(&*self.db)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn remove_like(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommentRepositoryError> {
        comment_likes::Entity::delete_many()
            .filter(comment_likes::Column::CommentId.eq(comment_id))
            .filter(comment_likes::Column::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

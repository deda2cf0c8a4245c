// src/modules/post/adapter/outgoing/post_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::adapter::outgoing::sea_orm_entity::{post_likes, posts};
use crate::modules::post::application::domain::entities::PostRecord;
use crate::modules::post::application::ports::outgoing::{
    NewPost, PostChanges, PostRepository, PostRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PostRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => PostRepositoryError::NotFound,
            other => PostRepositoryError::DatabaseError(other.to_string()),
        }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, post: NewPost) -> Result<PostRecord, PostRepositoryError> {
        let active = posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(post.owner.into()),
            title: Set(post.title),
            content: Set(post.content),
            image_url: Set(post.image_url),
            is_edited: Set(false),
            edited_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError> {
        let mut active = posts::ActiveModel {
            id: Set(post_id),
            title: Set(changes.title),
            is_edited: Set(true),
            edited_at: Set(Some(changes.edited_at.into())),
            updated_at: Set(changes.edited_at.into()),
            ..Default::default()
        };
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(url) = changes.image_url {
            active.image_url = Set(Some(url));
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(updated.to_record())
    }

    async fn delete_post_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Replies go with their top-level comment through the parent FK cascade.
        if let Err(e) = comments::Entity::delete_many()
            .filter(comments::Column::PostId.eq(post_id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        if let Err(e) = post_likes::Entity::delete_many()
            .filter(post_likes::Column::PostId.eq(post_id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        let deleted = match posts::Entity::delete_by_id(post_id).exec(&txn).await {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if deleted.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(PostRepositoryError::NotFound);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn add_like(&self, post_id: Uuid, user_id: UserId) -> Result<(), PostRepositoryError> {
        let like = post_likes::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id.into()),
            created_at: NotSet,
        };

        match post_likes::Entity::insert(like)
            .exec_without_returning(&*self.db)
            .await
        {
            Ok(_) => Ok(()),
            // A concurrent toggle got there first.
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(Self::map_db_err(e)),
        }
    }

    async fn remove_like(
        &self,
        post_id: Uuid,
        user_id: UserId,
    ) -> Result<(), PostRepositoryError> {
        let user_uuid: Uuid = user_id.into();

        post_likes::Entity::delete_many()
            .filter(post_likes::Column::PostId.eq(post_id))
            .filter(post_likes::Column::UserId.eq(user_uuid))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}

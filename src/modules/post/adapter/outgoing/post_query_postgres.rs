// src/modules/post/adapter/outgoing/post_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::authors::{load_authors, unknown_author};
use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::modules::post::adapter::outgoing::sea_orm_entity::{post_likes, posts};
use crate::modules::post::application::domain::entities::PostRecord;
use crate::modules::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostQuery, PostQueryError, PostView,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Joins authors, likers and top-level comment counts onto a page of posts.
    async fn assemble_views(&self, models: Vec<posts::Model>) -> Result<Vec<PostView>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let author_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();

        let authors = load_authors(&*self.db, author_ids).await?;

        let mut likers: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for like in post_likes::Entity::find()
            .filter(post_likes::Column::PostId.is_in(post_ids.clone()))
            .order_by_asc(post_likes::Column::CreatedAt)
            .all(&*self.db)
            .await?
        {
            likers.entry(like.post_id).or_default().push(like.user_id);
        }

        let comment_counts: HashMap<Uuid, i64> = comments::Entity::find()
            .select_only()
            .column(comments::Column::PostId)
            .column_as(comments::Column::Id.count(), "total")
            .filter(comments::Column::PostId.is_in(post_ids))
            .group_by(comments::Column::PostId)
            .into_tuple::<(Option<Uuid>, i64)>()
            .all(&*self.db)
            .await?
            .into_iter()
            .filter_map(|(post_id, total)| post_id.map(|id| (id, total)))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let author = authors
                    .get(&m.user_id)
                    .cloned()
                    .unwrap_or_else(|| unknown_author(m.user_id));
                let likes = likers.remove(&m.id).unwrap_or_default();
                let comments_count = comment_counts.get(&m.id).copied().unwrap_or(0);
                model_to_view(m, author, likes, comments_count)
            })
            .collect())
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_record(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError> {
        let post = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(post.map(|m| m.to_record()))
    }

    async fn find_view(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError> {
        let Some(post) = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = self.assemble_views(vec![post]).await.map_err(map_db_err)?;
        Ok(views.pop())
    }

    async fn list(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let mut query = posts::Entity::find();
        if let Some(author) = filter.author {
            query = query.filter(posts::Column::UserId.eq(author.value()));
        }

        let total = query
            .clone()
            .select_only()
            .column_as(posts::Column::Id.count(), "total")
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .unwrap_or(0);

        let models = query
            .order_by_desc(posts::Column::CreatedAt)
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = self.assemble_views(models).await.map_err(map_db_err)?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total: total.max(0) as u64,
        })
    }

    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PostQueryError> {
        let like = post_likes::Entity::find_by_id((post_id, user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(like.is_some())
    }

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, PostQueryError> {
        let total = post_likes::Entity::find()
            .select_only()
            .column_as(post_likes::Column::UserId.count(), "total")
            .filter(post_likes::Column::PostId.eq(post_id))
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .unwrap_or(0);

        Ok(total.max(0) as u64)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(
    model: posts::Model,
    author: crate::modules::post::application::domain::entities::AuthorSummary,
    likes: Vec<Uuid>,
    comments_count: i64,
) -> PostView {
    PostView {
        id: model.id,
        title: model.title,
        content: model.content,
        image_url: model.image_url,
        is_edited: model.is_edited,
        edited_at: model.edited_at.map(Into::into),
        author,
        likes_count: likes.len() as u64,
        likes,
        comments_count: comments_count.max(0) as u64,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::test_models::user_model;
    use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::test_models::post_model;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn total_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("total".to_string(), Value::BigInt(Some(n)))])
    }

    fn like_model(post_id: Uuid, user_id: Uuid) -> post_likes::Model {
        post_likes::Model {
            post_id,
            user_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn comment_count_row(post_id: Uuid, n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("post_id".to_string(), Value::Uuid(Some(Box::new(post_id)))),
            ("total".to_string(), Value::BigInt(Some(n))),
        ])
    }

    #[tokio::test]
    async fn test_find_record_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        let result = query.find_record(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_view_joins_author_likes_and_comments() {
        // Arrange
        let post_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let fan = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, owner, "Hello")]])
            .append_query_results([vec![user_model(owner, "ann@x.com", true)]])
            .append_query_results([vec![like_model(post_id, fan)]])
            .append_query_results([vec![comment_count_row(post_id, 2)]])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        // Act
        let view = query.find_view(post_id).await.unwrap().unwrap();

        // Assert
        assert_eq!(view.title, "Hello");
        assert_eq!(view.author.id, owner);
        assert_eq!(view.author.username, "ann");
        assert_eq!(view.likes, vec![fan]);
        assert_eq!(view.likes_count, 1);
        assert_eq!(view.comments_count, 2);
    }

    #[tokio::test]
    async fn test_list_empty_page_skips_joins() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![total_row(0)]])
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        let page = query
            .list(PostListFilter::everyone(), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.per_page, 20);
    }

    #[tokio::test]
    async fn test_has_liked() {
        let post_id = Uuid::new_v4();
        let fan = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![like_model(post_id, fan)]])
            .append_query_results([Vec::<post_likes::Model>::new()])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        assert!(query.has_liked(post_id, UserId::from(fan)).await.unwrap());
        assert!(!query
            .has_liked(post_id, UserId::from(Uuid::new_v4()))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_count_likes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![total_row(4)]])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        assert_eq!(query.count_likes(Uuid::new_v4()).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_database_error_maps() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".into())])
            .into_connection();
        let query = PostQueryPostgres::new(Arc::new(db));

        let result = query.find_record(Uuid::new_v4()).await;

        assert!(matches!(result, Err(PostQueryError::DatabaseError(_))));
    }
}

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::post::application::domain::entities::AuthorSummary;

impl From<&users::Model> for AuthorSummary {
    fn from(user: &users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            profile_image_url: user.profile_image_url.clone(),
        }
    }
}

/// Author summaries for the given user ids, one query.
pub(crate) async fn load_authors<C>(
    db: &C,
    user_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, AuthorSummary>, DbErr>
where
    C: ConnectionTrait,
{
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = users::Entity::find()
        .filter(users::Column::Id.is_in(user_ids))
        .all(db)
        .await?;

    Ok(users
        .iter()
        .map(|u| (u.id, AuthorSummary::from(u)))
        .collect())
}

/// Placeholder for a row whose author could not be loaded.
pub(crate) fn unknown_author(id: Uuid) -> AuthorSummary {
    tracing::warn!(user_id = %id, "Author row missing");
    AuthorSummary {
        id,
        name: String::new(),
        username: String::new(),
        profile_image_url: None,
    }
}

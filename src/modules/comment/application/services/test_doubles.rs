//! In-memory comment store mirroring the foreign-key cascade of the real schema.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::entities::{
    CommentNode, CommentRecord, CommentTarget,
};
use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError, NewComment,
};
use crate::modules::post::application::domain::entities::AuthorSummary;

#[derive(Default)]
struct State {
    // Insertion order is creation order.
    comments: Vec<CommentRecord>,
    likes: BTreeSet<(Uuid, Uuid)>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryComments {
    state: Arc<Mutex<State>>,
}

impl InMemoryComments {
    /// Stores a comment directly, bypassing validation.
    pub fn seed(&self, author: UserId, target: CommentTarget) -> CommentRecord {
        let mut state = self.state.lock().unwrap();
        let record = Self::record(&state, author, "seeded".into(), target);
        state.comments.push(record.clone());
        record
    }

    pub fn get(&self, comment_id: Uuid) -> Option<CommentRecord> {
        self.state
            .lock()
            .unwrap()
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    fn record(state: &State, author: UserId, content: String, target: CommentTarget) -> CommentRecord {
        // Strictly increasing timestamps keep ordering deterministic.
        let created_at = Utc::now() + Duration::milliseconds(state.comments.len() as i64);
        let (post_id, parent_comment_id) = match target {
            CommentTarget::Post(id) => (Some(id), None),
            CommentTarget::Comment(id) => (None, Some(id)),
        };

        CommentRecord {
            id: Uuid::new_v4(),
            author,
            content,
            post_id,
            parent_comment_id,
            created_at,
            updated_at: created_at,
        }
    }

    fn node_of(state: &State, record: &CommentRecord) -> CommentNode {
        let likes: Vec<Uuid> = state
            .likes
            .iter()
            .filter(|(c, _)| *c == record.id)
            .map(|(_, u)| *u)
            .collect();

        CommentNode {
            id: record.id,
            content: record.content.clone(),
            author: AuthorSummary {
                id: record.author.value(),
                name: "Bob".into(),
                username: "bob".into(),
                profile_image_url: None,
            },
            post_id: record.post_id,
            parent_comment_id: record.parent_comment_id,
            likes_count: likes.len() as u64,
            likes,
            created_at: record.created_at,
            updated_at: record.updated_at,
            has_more_replies: false,
            replies: Vec::new(),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn create_comment(
        &self,
        comment: NewComment,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let record = Self::record(&state, comment.author, comment.content, comment.target);
        state.comments.push(record.clone());
        Ok(record)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;

        if !state.comments.iter().any(|c| c.id == comment_id) {
            return Err(CommentRepositoryError::NotFound);
        }

        let mut doomed: HashSet<Uuid> = HashSet::from([comment_id]);
        loop {
            let before = doomed.len();
            let children: Vec<Uuid> = state
                .comments
                .iter()
                .filter(|c| c.parent_comment_id.is_some_and(|p| doomed.contains(&p)))
                .map(|c| c.id)
                .collect();
            doomed.extend(children);
            if doomed.len() == before {
                break;
            }
        }

        state.comments.retain(|c| !doomed.contains(&c.id));
        state.likes.retain(|(c, _)| !doomed.contains(c));
        Ok(())
    }

    async fn add_like(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.likes.insert((comment_id, user_id.value()));
        Ok(())
    }

    async fn remove_like(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.likes.remove(&(comment_id, user_id.value()));
        Ok(())
    }
}

#[async_trait]
impl CommentQuery for InMemoryComments {
    async fn find_record(
        &self,
        comment_id: Uuid,
    ) -> Result<Option<CommentRecord>, CommentQueryError> {
        Ok(self.get(comment_id))
    }

    async fn find_node(&self, comment_id: Uuid) -> Result<Option<CommentNode>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .map(|c| Self::node_of(&state, c)))
    }

    async fn top_level(&self, post_id: Uuid) -> Result<Vec<CommentNode>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| c.post_id == Some(post_id))
            .map(|c| Self::node_of(&state, c))
            .collect())
    }

    async fn replies_to(
        &self,
        parent_ids: Vec<Uuid>,
    ) -> Result<Vec<CommentNode>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| c.parent_comment_id.is_some_and(|p| parent_ids.contains(&p)))
            .map(|c| Self::node_of(&state, c))
            .collect())
    }

    async fn ids_with_replies(
        &self,
        comment_ids: Vec<Uuid>,
    ) -> Result<HashSet<Uuid>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter_map(|c| c.parent_comment_id)
            .filter(|p| comment_ids.contains(p))
            .collect())
    }

    async fn has_liked(
        &self,
        comment_id: Uuid,
        user_id: UserId,
    ) -> Result<bool, CommentQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .likes
            .contains(&(comment_id, user_id.value())))
    }

    async fn count_likes(&self, comment_id: Uuid) -> Result<u64, CommentQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .likes
            .iter()
            .filter(|(c, _)| *c == comment_id)
            .count() as u64)
    }
}

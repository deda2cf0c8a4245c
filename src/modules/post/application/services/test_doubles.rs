//! In-memory post store and a recording notifier for the post and comment service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::{
    EngagementNotifier, PostCommentedEvent, PostLikedEvent,
};
use crate::modules::post::application::domain::entities::{AuthorSummary, PostRecord};
use crate::modules::post::application::ports::outgoing::{
    NewPost, PageRequest, PageResult, PostChanges, PostListFilter, PostQuery, PostQueryError,
    PostRepository, PostRepositoryError, PostView,
};

// ──────────────────────────────────────────────────────────
// Post store
// ──────────────────────────────────────────────────────────

#[derive(Default)]
struct State {
    posts: HashMap<Uuid, PostRecord>,
    likes: BTreeSet<(Uuid, Uuid)>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryPosts {
    state: Arc<Mutex<State>>,
}

pub fn post_record(owner: UserId, title: &str) -> PostRecord {
    let now = Utc::now();
    PostRecord {
        id: Uuid::new_v4(),
        owner,
        title: title.to_string(),
        content: "body".to_string(),
        image_url: None,
        is_edited: false,
        edited_at: None,
        created_at: now,
        updated_at: now,
    }
}

impl InMemoryPosts {
    pub fn with(posts: Vec<PostRecord>) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for post in posts {
                state.posts.insert(post.id, post);
            }
        }
        store
    }

    pub fn get(&self, post_id: Uuid) -> Option<PostRecord> {
        self.state.lock().unwrap().posts.get(&post_id).cloned()
    }

    pub fn likers(&self, post_id: Uuid) -> Vec<Uuid> {
        self.state
            .lock()
            .unwrap()
            .likes
            .iter()
            .filter(|(p, _)| *p == post_id)
            .map(|(_, u)| *u)
            .collect()
    }

    /// Number of repository calls that changed state.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    fn view_of(state: &State, record: &PostRecord) -> PostView {
        let likes: Vec<Uuid> = state
            .likes
            .iter()
            .filter(|(p, _)| *p == record.id)
            .map(|(_, u)| *u)
            .collect();

        PostView {
            id: record.id,
            title: record.title.clone(),
            content: record.content.clone(),
            image_url: record.image_url.clone(),
            is_edited: record.is_edited,
            edited_at: record.edited_at,
            author: AuthorSummary {
                id: record.owner.value(),
                name: "Ann".to_string(),
                username: "ann".to_string(),
                profile_image_url: None,
            },
            likes_count: likes.len() as u64,
            likes,
            comments_count: 0,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create_post(&self, post: NewPost) -> Result<PostRecord, PostRepositoryError> {
        let mut record = post_record(post.owner, &post.title);
        record.content = post.content;
        record.image_url = post.image_url;

        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.posts.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        let record = state
            .posts
            .get_mut(&post_id)
            .ok_or(PostRepositoryError::NotFound)?;

        record.title = changes.title;
        if let Some(content) = changes.content {
            record.content = content;
        }
        if let Some(url) = changes.image_url {
            record.image_url = Some(url);
        }
        record.is_edited = true;
        record.edited_at = Some(changes.edited_at);
        record.updated_at = changes.edited_at;
        Ok(record.clone())
    }

    async fn delete_post_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state
            .posts
            .remove(&post_id)
            .ok_or(PostRepositoryError::NotFound)?;
        state.likes.retain(|(p, _)| *p != post_id);
        Ok(())
    }

    async fn add_like(&self, post_id: Uuid, user_id: UserId) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.likes.insert((post_id, user_id.value()));
        Ok(())
    }

    async fn remove_like(
        &self,
        post_id: Uuid,
        user_id: UserId,
    ) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state.likes.remove(&(post_id, user_id.value()));
        Ok(())
    }
}

#[async_trait]
impl PostQuery for InMemoryPosts {
    async fn find_record(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError> {
        Ok(self.get(post_id))
    }

    async fn find_view(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .get(&post_id)
            .map(|record| Self::view_of(&state, record)))
    }

    async fn list(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let state = self.state.lock().unwrap();
        let mut records: Vec<&PostRecord> = state
            .posts
            .values()
            .filter(|p| filter.author.map_or(true, |a| p.owner == a))
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = records.len() as u64;
        let items = records
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|r| Self::view_of(&state, r))
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PostQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .likes
            .contains(&(post_id, user_id.value())))
    }

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, PostQueryError> {
        Ok(self.likers(post_id).len() as u64)
    }
}

// ──────────────────────────────────────────────────────────
// Notifier
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engagement {
    Liked(PostLikedEvent),
    Commented(PostCommentedEvent),
}

#[derive(Clone, Default)]
pub struct RecordingEngagementNotifier {
    events: Arc<Mutex<Vec<Engagement>>>,
}

impl RecordingEngagementNotifier {
    pub fn events(&self) -> Vec<Engagement> {
        self.events.lock().unwrap().clone()
    }
}

impl EngagementNotifier for RecordingEngagementNotifier {
    fn post_liked(&self, event: PostLikedEvent) {
        self.events.lock().unwrap().push(Engagement::Liked(event));
    }

    fn post_commented(&self, event: PostCommentedEvent) {
        self.events.lock().unwrap().push(Engagement::Commented(event));
    }
}

use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::email::application::ports::outgoing::{
    EmailRecipient, EngagementNotifier, PostCommentedEvent, PostLikedEvent, UserEmailNotifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Skipped,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Send failed: {0}")]
    Send(String),
}

/// Sends like/comment emails on detached tasks so request handlers never wait
/// on SMTP. Owners are mailed only when they opted in, verified their email,
/// and are not the actor.
#[derive(Clone)]
pub struct BackgroundEngagementNotifier {
    users: Arc<dyn UserQuery + Send + Sync>,
    emails: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl BackgroundEngagementNotifier {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        emails: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self { users, emails }
    }

    async fn resolve_parties(
        &self,
        owner_id: UserId,
        actor_id: UserId,
    ) -> Result<Option<(User, User)>, NotificationError> {
        if owner_id == actor_id {
            return Ok(None);
        }

        let owner = self
            .users
            .find_by_id(owner_id)
            .await
            .map_err(|e| NotificationError::Lookup(e.to_string()))?;
        let owner = match owner {
            Some(owner) if owner.accepts_notifications() => owner,
            _ => return Ok(None),
        };

        let actor = self
            .users
            .find_by_id(actor_id)
            .await
            .map_err(|e| NotificationError::Lookup(e.to_string()))?;

        Ok(actor.map(|actor| (owner, actor)))
    }

    pub async fn deliver_like(
        &self,
        event: &PostLikedEvent,
    ) -> Result<DeliveryOutcome, NotificationError> {
        let Some((owner, liker)) = self.resolve_parties(event.post_owner, event.liker).await? else {
            return Ok(DeliveryOutcome::Skipped);
        };

        self.emails
            .send_like_notification(
                &EmailRecipient::from(&owner),
                &liker.name,
                &event.post_title,
                event.post_id,
            )
            .await
            .map_err(|e| NotificationError::Send(e.to_string()))?;

        Ok(DeliveryOutcome::Sent)
    }

    pub async fn deliver_comment(
        &self,
        event: &PostCommentedEvent,
    ) -> Result<DeliveryOutcome, NotificationError> {
        let Some((owner, commenter)) = self
            .resolve_parties(event.post_owner, event.commenter)
            .await?
        else {
            return Ok(DeliveryOutcome::Skipped);
        };

        self.emails
            .send_comment_notification(
                &EmailRecipient::from(&owner),
                &commenter.name,
                &event.post_title,
                &event.comment,
                event.post_id,
            )
            .await
            .map_err(|e| NotificationError::Send(e.to_string()))?;

        Ok(DeliveryOutcome::Sent)
    }
}

impl EngagementNotifier for BackgroundEngagementNotifier {
    fn post_liked(&self, event: PostLikedEvent) {
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.deliver_like(&event).await {
                Ok(outcome) => {
                    tracing::debug!(post_id = %event.post_id, ?outcome, "Like notification handled")
                }
                Err(e) => {
                    tracing::warn!(post_id = %event.post_id, error = %e, "Like notification failed")
                }
            }
        });
    }

    fn post_commented(&self, event: PostCommentedEvent) {
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.deliver_comment(&event).await {
                Ok(outcome) => {
                    tracing::debug!(post_id = %event.post_id, ?outcome, "Comment notification handled")
                }
                Err(e) => {
                    tracing::warn!(post_id = %event.post_id, error = %e, "Comment notification failed")
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use crate::email::adapter::outgoing::recording_sender::RecordingEmailSender;
    use crate::email::application::services::{EmailBranding, UserEmailService};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use uuid::Uuid;

    struct InMemoryUsers {
        users: HashMap<UserId, User>,
    }

    #[async_trait]
    impl UserQuery for InMemoryUsers {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
            Ok(self.users.get(&id).cloned())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            unimplemented!("Not used in this test")
        }
        async fn find_by_reset_token_hash(
            &self,
            _hash: &str,
        ) -> Result<Option<User>, UserQueryError> {
            unimplemented!("Not used in this test")
        }
    }

    fn notifier_with(users: Vec<User>) -> (BackgroundEngagementNotifier, RecordingEmailSender) {
        let sender = RecordingEmailSender::new();
        let emails = UserEmailService::new(Arc::new(sender.clone()), EmailBranding::default());
        let users = InMemoryUsers {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        };
        (
            BackgroundEngagementNotifier::new(Arc::new(users), Arc::new(emails)),
            sender,
        )
    }

    fn like_event(owner: &User, liker: &User) -> PostLikedEvent {
        PostLikedEvent {
            post_id: Uuid::new_v4(),
            post_title: "Hello".to_string(),
            post_owner: owner.id,
            liker: liker.id,
        }
    }

    #[tokio::test]
    async fn test_like_sends_to_opted_in_owner() {
        let owner = test_fixtures::user("owner@example.com", true);
        let liker = test_fixtures::user("liker@example.com", true);
        let (notifier, sender) = notifier_with(vec![owner.clone(), liker.clone()]);

        let outcome = notifier.deliver_like(&like_event(&owner, &liker)).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Sent);
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].subject, format!("{} liked your post: Hello", liker.name));
    }

    #[tokio::test]
    async fn test_skips_when_owner_opted_out() {
        let mut owner = test_fixtures::user("owner@example.com", true);
        owner.email_notifications = false;
        let liker = test_fixtures::user("liker@example.com", true);
        let (notifier, sender) = notifier_with(vec![owner.clone(), liker.clone()]);

        let outcome = notifier.deliver_like(&like_event(&owner, &liker)).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Skipped);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_skips_when_owner_unverified() {
        let owner = test_fixtures::user("owner@example.com", false);
        let commenter = test_fixtures::user("c@example.com", true);
        let (notifier, sender) = notifier_with(vec![owner.clone(), commenter.clone()]);
        let event = PostCommentedEvent {
            post_id: Uuid::new_v4(),
            post_title: "Hello".to_string(),
            post_owner: owner.id,
            commenter: commenter.id,
            comment: "Nice".to_string(),
        };

        let outcome = notifier.deliver_comment(&event).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Skipped);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_skips_own_activity() {
        let owner = test_fixtures::user("owner@example.com", true);
        let (notifier, sender) = notifier_with(vec![owner.clone()]);
        let event = PostCommentedEvent {
            post_id: Uuid::new_v4(),
            post_title: "Hello".to_string(),
            post_owner: owner.id,
            commenter: owner.id,
            comment: "Replying to myself".to_string(),
        };

        let outcome = notifier.deliver_comment(&event).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Skipped);
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_reported_to_task() {
        let owner = test_fixtures::user("owner@example.com", true);
        let liker = test_fixtures::user("liker@example.com", true);
        let users = InMemoryUsers {
            users: [(owner.id, owner.clone()), (liker.id, liker.clone())]
                .into_iter()
                .collect(),
        };
        let emails = UserEmailService::new(
            Arc::new(RecordingEmailSender::failing()),
            EmailBranding::default(),
        );
        let notifier = BackgroundEngagementNotifier::new(Arc::new(users), Arc::new(emails));

        let result = notifier.deliver_like(&like_event(&owner, &liker)).await;

        assert!(matches!(result, Err(NotificationError::Send(_))));
    }
}

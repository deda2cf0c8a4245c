pub mod email_sender;
pub mod engagement_notifier;
pub mod user_email_notifier;

pub use email_sender::{EmailSendError, EmailSender};
pub use engagement_notifier::{EngagementNotifier, PostCommentedEvent, PostLikedEvent};
pub use user_email_notifier::{EmailRecipient, UserEmailNotificationError, UserEmailNotifier};

mod background_engagement_notifier;
mod email_service;
pub mod templates;

pub use background_engagement_notifier::BackgroundEngagementNotifier;
pub use email_service::{EmailBranding, UserEmailService};

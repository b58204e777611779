use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::events::EventHandler;

use super::entities::{EmailNotification, Person};
use super::ports::EmailNotificationRepository;

/// Raised after a forgot-password command committed a temporary password.
///
/// Carries the person as updated, temporary password included, so post-commit
/// handlers need no further lookups.
#[derive(Debug, Clone)]
pub struct PasswordResetRequested {
  pub person: Person,
  pub occurred_at: DateTime<Utc>,
}

impl PasswordResetRequested {
  pub fn new(person: Person) -> Self {
    Self {
      person,
      occurred_at: Utc::now(),
    }
  }
}

/// Queues the password-reset e-mail when a reset was requested.
///
/// The temporary password travels in the message body in plain text; the
/// message tells the recipient to replace it at the next sign-in. Replacing
/// this delivery policy with a reset link only touches this handler.
pub struct PasswordResetEmailHandler {
  notifications: Arc<dyn EmailNotificationRepository>,
  sender: String,
}

impl PasswordResetEmailHandler {
  pub fn new(notifications: Arc<dyn EmailNotificationRepository>, sender: String) -> Self {
    Self {
      notifications,
      sender,
    }
  }
}

#[async_trait]
impl EventHandler<PasswordResetRequested> for PasswordResetEmailHandler {
  async fn handle(&self, event: &PasswordResetRequested) {
    let body = format!(
      "A new temporary password was issued for your account: {}\n\n\
       Use it to sign in, then change your password right away.",
      event.person.password.as_str()
    );

    let notification = EmailNotification::new(
      self.sender.clone(),
      event.person.email.as_str().to_string(),
      "Your temporary password".to_string(),
      body,
    );

    // Post-commit: a delivery problem must not fail the command.
    if let Err(e) = self.notifications.add(notification).await {
      tracing::error!(
        "Failed to queue password reset email for person {}: {}",
        event.person.id,
        e
      );
    }
  }
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::{
  entities::EmailNotification, errors::IdentityError, ports::EmailNotificationRepository,
};

/// In-memory implementation of the EmailNotificationRepository trait.
///
/// Queues outbound e-mails in insertion order; a delivery worker would drain
/// this in a real deployment.
#[derive(Default)]
pub struct InMemoryEmailNotificationRepository {
  queue: RwLock<Vec<EmailNotification>>,
}

impl InMemoryEmailNotificationRepository {
  /// Creates an empty queue
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of the queued notifications in insertion order
  pub async fn queued(&self) -> Vec<EmailNotification> {
    self.queue.read().await.clone()
  }
}

#[async_trait]
impl EmailNotificationRepository for InMemoryEmailNotificationRepository {
  async fn add(&self, notification: EmailNotification) -> Result<EmailNotification, IdentityError> {
    self.queue.write().await.push(notification.clone());
    Ok(notification)
  }
}

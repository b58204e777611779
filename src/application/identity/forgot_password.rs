use std::sync::Arc;

use crate::domain::events::EventDispatcher;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::events::PasswordResetRequested;
use crate::domain::identity::messages;
use crate::domain::identity::ports::{PersonRepository, UnitOfWork};
use crate::domain::identity::value_objects::{Email, Password};
use crate::domain::notifications::{NotificationCollector, ValidationTier};

/// Command for requesting a temporary password
#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
  pub email: String,
}

/// Result of a forgot-password command; `serial_key` is empty when the
/// command failed or the address is unknown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordResult {
  pub serial_key: String,
}

impl ForgotPasswordResult {
  /// Failure sentinel
  pub fn empty() -> Self {
    Self::default()
  }
}

/// Handler for the forgot-password use case.
///
/// Assigns a short temporary password and raises `PasswordResetRequested`
/// once the unit of work committed. An unknown address answers with the same
/// sentinel as a failure, so the response never reveals whether an account
/// exists.
pub struct ForgotPasswordHandler {
  persons: Arc<dyn PersonRepository>,
  unit_of_work: Arc<dyn UnitOfWork>,
  events: Arc<EventDispatcher>,
}

impl ForgotPasswordHandler {
  pub fn new(
    persons: Arc<dyn PersonRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    events: Arc<EventDispatcher>,
  ) -> Self {
    Self {
      persons,
      unit_of_work,
      events,
    }
  }

  pub async fn handle(
    &self,
    command: ForgotPasswordCommand,
    notifications: &mut NotificationCollector,
  ) -> Result<ForgotPasswordResult, IdentityError> {
    let email = Email::new(&command.email).ok();

    let local_ok = ValidationTier::new()
      .check(email.is_some(), messages::EMAIL_INVALID)
      .finish(notifications);
    if !local_ok {
      return Ok(ForgotPasswordResult::empty());
    }
    let Some(email) = email else {
      return Ok(ForgotPasswordResult::empty());
    };

    // Silent sentinel for unknown addresses: no notification, no event.
    let Some(mut person) = self.persons.find_by_email(&email).await? else {
      return Ok(ForgotPasswordResult::empty());
    };

    person.set_password(Password::temporary());
    let person = self.persons.update(person).await?;

    if !self.unit_of_work.commit().await? {
      notifications.add(messages::COMMIT_FAILED);
      return Ok(ForgotPasswordResult::empty());
    }

    self
      .events
      .raise(PasswordResetRequested::new(person.clone()))
      .await;

    Ok(ForgotPasswordResult {
      serial_key: person.serial_key.as_str().to_string(),
    })
  }
}

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::identity::entities::Person;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::messages;
use crate::domain::identity::ports::{PersonRepository, UnitOfWork};
use crate::domain::identity::value_objects::{Email, Password};
use crate::domain::notifications::{NotificationCollector, ValidationTier};

/// Command for registering a new person
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub name: String,
  pub document_number: String,
  pub email: String,
  pub password: String,
}

/// Result of a register command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserResult {
  /// Id of the created person; `Uuid::nil()` when the command failed
  pub person_id: Uuid,
}

impl RegisterUserResult {
  /// Failure sentinel
  pub fn empty() -> Self {
    Self {
      person_id: Uuid::nil(),
    }
  }
}

/// Handler for the register use case
pub struct RegisterUserHandler {
  persons: Arc<dyn PersonRepository>,
  unit_of_work: Arc<dyn UnitOfWork>,
}

impl RegisterUserHandler {
  pub fn new(persons: Arc<dyn PersonRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
    Self {
      persons,
      unit_of_work,
    }
  }

  /// Registers a new active person with a generated serial key.
  ///
  /// Local tier: e-mail syntax, non-empty password. Repository tier: e-mail
  /// not already registered. All failures land in `notifications` and the
  /// sentinel result comes back; repository checks never run against input
  /// the local tier rejected.
  pub async fn handle(
    &self,
    command: RegisterUserCommand,
    notifications: &mut NotificationCollector,
  ) -> Result<RegisterUserResult, IdentityError> {
    let email = Email::new(&command.email).ok();

    let local_ok = ValidationTier::new()
      .check(email.is_some(), messages::EMAIL_INVALID)
      .check(
        !command.password.trim().is_empty(),
        messages::REGISTER_PASSWORD_REQUIRED,
      )
      .finish(notifications);
    if !local_ok {
      return Ok(RegisterUserResult::empty());
    }
    let Some(email) = email else {
      return Ok(RegisterUserResult::empty());
    };

    let existing = self.persons.find_by_email(&email).await?;
    let repository_ok = ValidationTier::new()
      .check(existing.is_none(), messages::REGISTER_EMAIL_ALREADY_TAKEN)
      .finish(notifications);
    if !repository_ok {
      return Ok(RegisterUserResult::empty());
    }

    let person = Person::new(
      command.name,
      command.document_number,
      email,
      Password::new(command.password),
    );
    let person = self.persons.add(person).await?;

    if !self.unit_of_work.commit().await? {
      notifications.add(messages::COMMIT_FAILED);
      return Ok(RegisterUserResult::empty());
    }

    Ok(RegisterUserResult {
      person_id: person.id,
    })
  }
}

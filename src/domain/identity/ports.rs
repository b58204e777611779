use async_trait::async_trait;

use super::entities::{Device, EmailNotification, Person, Token};
use super::errors::IdentityError;
use super::value_objects::Email;

/// Repository trait for person persistence operations.
///
/// Implementations exchange owned aggregates; callers must persist every
/// mutation explicitly through `update`.
#[async_trait]
pub trait PersonRepository: Send + Sync {
  /// Stores a new person and returns it as persisted
  async fn add(&self, person: Person) -> Result<Person, IdentityError>;

  /// Updates an existing person
  async fn update(&self, person: Person) -> Result<Person, IdentityError>;

  /// Finds a person by email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<Person>, IdentityError>;

  /// Finds a person by their current serial key
  async fn find_by_serial_key(&self, serial_key: &str) -> Result<Option<Person>, IdentityError>;

  /// Finds a person whose username and credential both match
  async fn find_by_username_and_password(
    &self,
    username: &str,
    password: &str,
  ) -> Result<Option<Person>, IdentityError>;
}

/// Repository trait for device persistence operations
#[async_trait]
pub trait DeviceRepository: Send + Sync {
  /// Stores a new device and returns it as persisted
  async fn add(&self, device: Device) -> Result<Device, IdentityError>;

  /// Updates an existing device
  async fn update(&self, device: Device) -> Result<Device, IdentityError>;

  /// Finds the person's current device, if any
  async fn find_by_person(&self, person: &Person) -> Result<Option<Device>, IdentityError>;

  /// Finds a device by its client-supplied installation fingerprint
  async fn find_by_identification(
    &self,
    identification: &str,
  ) -> Result<Option<Device>, IdentityError>;
}

/// Repository trait for token persistence operations
#[async_trait]
pub trait TokenRepository: Send + Sync {
  /// Stores a new token and returns it as persisted
  async fn add(&self, token: Token) -> Result<Token, IdentityError>;

  /// Updates an existing token
  async fn update(&self, token: Token) -> Result<Token, IdentityError>;
}

/// Repository trait for the outbound e-mail queue
#[async_trait]
pub trait EmailNotificationRepository: Send + Sync {
  /// Enqueues an outbound e-mail
  async fn add(&self, notification: EmailNotification) -> Result<EmailNotification, IdentityError>;
}

/// Commit boundary for a command's repository writes.
///
/// `Ok(false)` is a clean commit failure: the handler reports it through a
/// notification and the command did not happen. `Err` is an infrastructure
/// failure and propagates.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
  async fn commit(&self) -> Result<bool, IdentityError>;
}

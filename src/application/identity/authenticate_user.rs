use std::sync::Arc;

use crate::domain::identity::entities::{Device, Person, Token};
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::messages;
use crate::domain::identity::ports::{
  DeviceRepository, PersonRepository, TokenRepository, UnitOfWork,
};
use crate::domain::identity::value_objects::DeviceOs;
use crate::domain::notifications::{NotificationCollector, ValidationTier};

/// Command for authenticating a person
#[derive(Debug, Clone)]
pub struct AuthenticateUserCommand {
  pub user: String,
  pub password: String,
  /// Client-supplied installation fingerprint
  pub identification: String,
  /// Wire value of the client operating system
  pub device_os: i32,
  pub device_model: String,
  pub version_os: String,
}

/// Result of an authenticate command; every field holds its default sentinel
/// when the command failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticateUserResult {
  pub name: String,
  pub serial_key: String,
  pub document: String,
  pub email: String,
  pub admin: bool,
  pub visitor: bool,
  pub resident: bool,
}

impl AuthenticateUserResult {
  /// Failure sentinel
  pub fn empty() -> Self {
    Self::default()
  }
}

/// Handler for the authenticate use case.
///
/// A successful authentication always rotates the person's serial key, then
/// reconciles the person's single current device and single current token:
/// superseded records are disabled/deactivated and kept, never deleted.
pub struct AuthenticateUserHandler {
  persons: Arc<dyn PersonRepository>,
  devices: Arc<dyn DeviceRepository>,
  tokens: Arc<dyn TokenRepository>,
  unit_of_work: Arc<dyn UnitOfWork>,
}

impl AuthenticateUserHandler {
  pub fn new(
    persons: Arc<dyn PersonRepository>,
    devices: Arc<dyn DeviceRepository>,
    tokens: Arc<dyn TokenRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
  ) -> Self {
    Self {
      persons,
      devices,
      tokens,
      unit_of_work,
    }
  }

  pub async fn handle(
    &self,
    command: AuthenticateUserCommand,
    notifications: &mut NotificationCollector,
  ) -> Result<AuthenticateUserResult, IdentityError> {
    let local_ok = ValidationTier::new()
      .check(
        !command.user.trim().is_empty(),
        messages::AUTHENTICATE_USER_REQUIRED,
      )
      .check(
        !command.password.trim().is_empty(),
        messages::AUTHENTICATE_PASSWORD_REQUIRED,
      )
      .finish(notifications);
    if !local_ok {
      return Ok(AuthenticateUserResult::empty());
    }

    // Credential lookup and the dependent active check, reported in order.
    let found = self
      .persons
      .find_by_username_and_password(&command.user, &command.password)
      .await?;
    let mut person = match found {
      None => {
        notifications.add(messages::AUTHENTICATE_LOGIN_FAILED);
        return Ok(AuthenticateUserResult::empty());
      }
      Some(person) if !person.is_active() => {
        notifications.add(messages::AUTHENTICATE_USER_INACTIVE);
        return Ok(AuthenticateUserResult::empty());
      }
      Some(person) => person,
    };

    // The serial key rotates on every successful authentication, whether or
    // not any device or token record changes below.
    person.rotate_serial_key();

    let device_os = DeviceOs::from_value(command.device_os);
    self
      .reconcile_device(&person, device_os, &command.identification)
      .await?;

    if let Some(mut superseded) = person.take_current_token() {
      superseded.deactivate();
      self.tokens.update(superseded).await?;
    }
    let token = self.tokens.add(Token::new(device_os)).await?;
    person.set_current_token(token);
    let person = self.persons.update(person).await?;

    if !self.unit_of_work.commit().await? {
      notifications.add(messages::COMMIT_FAILED);
      return Ok(AuthenticateUserResult::empty());
    }

    Ok(AuthenticateUserResult {
      name: person.name.clone(),
      serial_key: person.serial_key.as_str().to_string(),
      document: person.document_number.clone(),
      email: person.email.as_str().to_string(),
      admin: person.admin,
      visitor: person.visitor,
      resident: person.resident,
    })
  }

  /// Reconciles the person's single current device against the fingerprint
  /// the client authenticated with.
  ///
  /// No current device: register one. Same fingerprint: leave everything
  /// untouched. Different fingerprint: soft-retire the old device (disabled
  /// and deactivated, two independent flags) and register the new one.
  async fn reconcile_device(
    &self,
    person: &Person,
    device_os: DeviceOs,
    identification: &str,
  ) -> Result<(), IdentityError> {
    match self.devices.find_by_person(person).await? {
      None => {
        self
          .devices
          .add(Device::new_for_person(
            person,
            device_os,
            identification.to_string(),
          ))
          .await?;
      }
      Some(current) if current.identification == identification => {}
      Some(mut superseded) => {
        tracing::debug!(
          "Superseding device {} for person {}",
          superseded.id,
          person.id
        );
        superseded.disable();
        superseded.deactivate();
        self.devices.update(superseded).await?;
        self
          .devices
          .add(Device::new_for_person(
            person,
            device_os,
            identification.to_string(),
          ))
          .await?;
      }
    }
    Ok(())
  }
}

use std::sync::Arc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::messages;
use crate::domain::identity::ports::{DeviceRepository, PersonRepository, UnitOfWork};
use crate::domain::identity::value_objects::Password;
use crate::domain::notifications::{NotificationCollector, ValidationTier};

/// Command for changing a person's password from a known device
#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
  /// Client-supplied installation fingerprint
  pub identification: String,
  /// The caller's current serial key
  pub serial_key: String,
  pub old_password: String,
  pub new_password: String,
}

/// Result of a change-password command; `serial_key` is empty when the
/// command failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordResult {
  /// The serial key reissued together with the new password
  pub serial_key: String,
}

impl ChangePasswordResult {
  /// Failure sentinel
  pub fn empty() -> Self {
    Self::default()
  }
}

/// Handler for the change-password use case.
///
/// Three guarded stages: command shape, then caller resolution (person by
/// serial key, device by fingerprint, device owned by that person), then
/// re-authentication with the old password. Only then is the new password
/// assigned and the serial key rotated.
pub struct ChangePasswordHandler {
  persons: Arc<dyn PersonRepository>,
  devices: Arc<dyn DeviceRepository>,
  unit_of_work: Arc<dyn UnitOfWork>,
}

impl ChangePasswordHandler {
  pub fn new(
    persons: Arc<dyn PersonRepository>,
    devices: Arc<dyn DeviceRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
  ) -> Self {
    Self {
      persons,
      devices,
      unit_of_work,
    }
  }

  pub async fn handle(
    &self,
    command: ChangePasswordCommand,
    notifications: &mut NotificationCollector,
  ) -> Result<ChangePasswordResult, IdentityError> {
    let local_ok = ValidationTier::new()
      .check(
        !command.identification.trim().is_empty(),
        messages::CHANGE_PASSWORD_IDENTIFICATION_REQUIRED,
      )
      .check(
        !command.serial_key.trim().is_empty(),
        messages::CHANGE_PASSWORD_SERIAL_KEY_REQUIRED,
      )
      .check(
        !command.new_password.trim().is_empty(),
        messages::CHANGE_PASSWORD_NEW_PASSWORD_REQUIRED,
      )
      .finish(notifications);
    if !local_ok {
      return Ok(ChangePasswordResult::empty());
    }

    // Resolve the caller; ownership of the device is checked against the
    // person the serial key resolved to.
    let found_person = self.persons.find_by_serial_key(&command.serial_key).await?;
    let found_device = self
      .devices
      .find_by_identification(&command.identification)
      .await?;
    let person = match (found_person, found_device) {
      (None, _) => {
        notifications.add(messages::CHANGE_PASSWORD_PERSON_NOT_FOUND);
        return Ok(ChangePasswordResult::empty());
      }
      (Some(_), None) => {
        notifications.add(messages::CHANGE_PASSWORD_DEVICE_NOT_FOUND);
        return Ok(ChangePasswordResult::empty());
      }
      (Some(person), Some(device)) if device.person_id != person.id => {
        notifications.add(messages::CHANGE_PASSWORD_DEVICE_NOT_OWNED);
        return Ok(ChangePasswordResult::empty());
      }
      (Some(person), Some(_)) => person,
    };

    // Re-authenticate the resolved person with the old password.
    let authorized = self
      .persons
      .find_by_username_and_password(person.email.as_str(), &command.old_password)
      .await?;
    let mut person = match authorized {
      None => {
        notifications.add(messages::AUTHENTICATE_LOGIN_FAILED);
        return Ok(ChangePasswordResult::empty());
      }
      Some(person) if !person.is_active() => {
        notifications.add(messages::AUTHENTICATE_USER_INACTIVE);
        return Ok(ChangePasswordResult::empty());
      }
      Some(person) => person,
    };

    person.set_password(Password::new(command.new_password));
    person.rotate_serial_key();
    let person = self.persons.update(person).await?;

    if !self.unit_of_work.commit().await? {
      notifications.add(messages::COMMIT_FAILED);
      return Ok(ChangePasswordResult::empty());
    }

    Ok(ChangePasswordResult {
      serial_key: person.serial_key.as_str().to_string(),
    })
  }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{generate_session_value, DeviceOs, Email, Password, SerialKey};

/// Account status of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonStatus {
  Active,
  Inactive,
}

/// Enabled/disabled status of a device, independent of its active flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
  Enabled,
  Disabled,
}

/// Person aggregate: a registered user of the building's services.
///
/// Equality is by id only; repositories exchange owned copies, never shared
/// references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  /// Unique identifier for the person
  pub id: Uuid,
  /// Display name
  pub name: String,
  /// National document number
  pub document_number: String,
  /// Contact phone number
  pub phone_number: String,
  /// Email address (unique across all persons)
  pub email: Email,
  /// Opaque credential blob
  pub password: Password,
  /// Rotating session nonce, reissued on every successful authentication
  pub serial_key: SerialKey,
  /// Administrator flag
  pub admin: bool,
  /// Visitor flag
  pub visitor: bool,
  /// Resident flag
  pub resident: bool,
  /// Account status
  pub status: PersonStatus,
  /// The single token this person currently holds, if any
  pub current_token: Option<Token>,
  /// Timestamp when the person was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the person was last updated
  pub updated_at: DateTime<Utc>,
}

impl Person {
  /// Creates a new active person with a freshly generated serial key
  pub fn new(name: String, document_number: String, email: Email, password: Password) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      document_number,
      phone_number: String::new(),
      email,
      password,
      serial_key: SerialKey::generate(),
      admin: false,
      visitor: false,
      resident: false,
      status: PersonStatus::Active,
      current_token: None,
      created_at: now,
      updated_at: now,
    }
  }

  /// Reissues the serial key from the CSPRNG
  pub fn rotate_serial_key(&mut self) {
    self.serial_key = SerialKey::generate();
    self.updated_at = Utc::now();
  }

  /// Replaces the credential blob
  pub fn set_password(&mut self, password: Password) {
    self.password = password;
    self.updated_at = Utc::now();
  }

  /// Attaches a token as this person's current one
  pub fn set_current_token(&mut self, token: Token) {
    self.current_token = Some(token);
    self.updated_at = Utc::now();
  }

  /// Detaches and returns the current token, if any
  pub fn take_current_token(&mut self) -> Option<Token> {
    self.current_token.take()
  }

  /// Marks the account active
  pub fn activate(&mut self) {
    self.status = PersonStatus::Active;
    self.updated_at = Utc::now();
  }

  /// Marks the account inactive
  pub fn deactivate(&mut self) {
    self.status = PersonStatus::Inactive;
    self.updated_at = Utc::now();
  }

  /// Checks whether the account is active
  pub fn is_active(&self) -> bool {
    self.status == PersonStatus::Active
  }
}

impl PartialEq for Person {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Person {}

/// Device aggregate: one client installation a person signs in from.
///
/// Holds a non-owning back-reference to the person by id. Superseded devices
/// are disabled and deactivated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
  /// Unique identifier for the device
  pub id: Uuid,
  /// Free-form description
  pub description: String,
  /// Token the client presented for this device
  pub device_token: String,
  /// Push notification token
  pub push_token: String,
  /// SIM card identifier
  pub sim_card_number: String,
  /// Operating system reported by the client
  pub device_os: DeviceOs,
  /// Client-supplied installation fingerprint
  pub identification: String,
  /// Active flag, independent of the enabled/disabled status
  pub active: bool,
  /// Enabled/disabled status
  pub status: DeviceStatus,
  /// Owning person, by id
  pub person_id: Uuid,
  /// Timestamp when the device was first seen
  pub created_at: DateTime<Utc>,
}

impl Device {
  /// Creates an enabled, active device bound to a person.
  ///
  /// The client's identification doubles as the device token on creation.
  pub fn new_for_person(person: &Person, device_os: DeviceOs, identification: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      description: String::new(),
      device_token: identification.clone(),
      push_token: String::new(),
      sim_card_number: String::new(),
      device_os,
      identification,
      active: true,
      status: DeviceStatus::Enabled,
      person_id: person.id,
      created_at: Utc::now(),
    }
  }

  /// Sets the status flag to disabled
  pub fn disable(&mut self) {
    self.status = DeviceStatus::Disabled;
  }

  /// Clears the active flag
  pub fn deactivate(&mut self) {
    self.active = false;
  }

  /// Checks the enabled/disabled status
  pub fn is_enabled(&self) -> bool {
    self.status == DeviceStatus::Enabled
  }

  /// Checks the active flag
  pub fn is_active(&self) -> bool {
    self.active
  }
}

impl PartialEq for Device {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Device {}

/// Token aggregate: one issued session credential.
///
/// Superseded tokens are deactivated and kept, preserving an append-only
/// trail of issued sessions. A token is never reactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
  /// Unique identifier for the token
  pub id: Uuid,
  /// Opaque session value handed to the client
  pub session_value: String,
  /// Operating system the token was issued for
  pub device_os: DeviceOs,
  /// Active flag; cleared when the token is superseded
  pub active: bool,
  /// Timestamp when the token was issued
  pub issued_at: DateTime<Utc>,
}

impl Token {
  /// Issues an active token with a fresh random session value
  pub fn new(device_os: DeviceOs) -> Self {
    Self {
      id: Uuid::new_v4(),
      session_value: generate_session_value(),
      device_os,
      active: true,
      issued_at: Utc::now(),
    }
  }

  /// Clears the active flag
  pub fn deactivate(&mut self) {
    self.active = false;
  }

  /// Checks the active flag
  pub fn is_active(&self) -> bool {
    self.active
  }
}

impl PartialEq for Token {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Token {}

/// Outbound e-mail queued by a domain event handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotification {
  /// Unique identifier for the notification
  pub id: Uuid,
  /// Sender address
  pub sender: String,
  /// Recipient address
  pub recipient: String,
  /// Subject line
  pub subject: String,
  /// Message body
  pub body: String,
  /// Timestamp when the notification was queued
  pub created_at: DateTime<Utc>,
}

impl EmailNotification {
  /// Queues a new outbound e-mail
  pub fn new(sender: String, recipient: String, subject: String, body: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      sender,
      recipient,
      subject,
      body,
      created_at: Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn person() -> Person {
    Person::new(
      "Test Resident".to_string(),
      "12345678900".to_string(),
      Email::new("resident@building.com").unwrap(),
      Password::new("1234"),
    )
  }

  #[test]
  fn test_person_creation_defaults() {
    let person = person();
    assert!(person.is_active());
    assert!(!person.admin);
    assert!(!person.visitor);
    assert!(!person.resident);
    assert!(person.current_token.is_none());
    assert!(!person.serial_key.as_str().is_empty());
  }

  #[test]
  fn test_person_rotate_serial_key_changes_value() {
    let mut person = person();
    let before = person.serial_key.clone();
    person.rotate_serial_key();
    assert_ne!(person.serial_key, before);
  }

  #[test]
  fn test_person_equality_is_by_id() {
    let mut a = person();
    let b = a.clone();
    a.rotate_serial_key();
    a.deactivate();
    assert_eq!(a, b);
    assert_ne!(a, person());
  }

  #[test]
  fn test_person_token_attachment() {
    let mut person = person();
    let token = Token::new(DeviceOs::Android);
    let token_id = token.id;

    person.set_current_token(token);
    assert_eq!(person.current_token.as_ref().map(|t| t.id), Some(token_id));

    let taken = person.take_current_token();
    assert_eq!(taken.map(|t| t.id), Some(token_id));
    assert!(person.current_token.is_none());
  }

  #[test]
  fn test_device_creation_binds_person_and_identification() {
    let person = person();
    let device = Device::new_for_person(&person, DeviceOs::Ios, "fingerprint-1".to_string());

    assert_eq!(device.person_id, person.id);
    assert_eq!(device.identification, "fingerprint-1");
    assert_eq!(device.device_token, "fingerprint-1");
    assert!(device.is_enabled());
    assert!(device.is_active());
  }

  #[test]
  fn test_device_soft_retirement_clears_both_flags() {
    let person = person();
    let mut device = Device::new_for_person(&person, DeviceOs::Ios, "fingerprint-1".to_string());

    device.disable();
    device.deactivate();

    assert!(!device.is_enabled());
    assert!(!device.is_active());
  }

  #[test]
  fn test_token_deactivation() {
    let mut token = Token::new(DeviceOs::Ios);
    assert!(token.is_active());
    assert!(!token.session_value.is_empty());

    token.deactivate();
    assert!(!token.is_active());
  }

  #[test]
  fn test_person_survives_serialization() {
    let mut person = person();
    person.set_current_token(Token::new(DeviceOs::Android));

    let json = serde_json::to_string(&person).unwrap();
    let restored: Person = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, person);
    assert_eq!(restored.serial_key, person.serial_key);
    assert_eq!(
      restored.current_token.map(|t| t.id),
      person.current_token.map(|t| t.id)
    );
  }

  #[test]
  fn test_tokens_have_unique_session_values() {
    let a = Token::new(DeviceOs::Ios);
    let b = Token::new(DeviceOs::Ios);
    assert_ne!(a.session_value, b.session_value);
    assert_ne!(a, b);
  }
}

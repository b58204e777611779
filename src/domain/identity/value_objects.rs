use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValueObjectError;

/// Number of random bytes behind a serial key (64 hex characters).
const SERIAL_KEY_BYTES: usize = 32;

/// Number of random bytes behind a token session value (64 hex characters).
const SESSION_VALUE_BYTES: usize = 32;

/// Length of a generated temporary password.
///
/// Deliberately short: temporary passwords travel by e-mail and are meant
/// to be replaced at the next sign-in, not to live as long-term credentials.
const TEMPORARY_PASSWORD_LEN: usize = 7;

/// Fills a buffer from the operating system CSPRNG and hex-encodes it.
pub(crate) fn random_hex(byte_len: usize) -> String {
  let mut bytes = vec![0u8; byte_len];
  rand::rngs::OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after syntactic validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into();

    if !email.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email));
    }

    // Normalize to lowercase
    Ok(Self(email.to_lowercase()))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Opaque Credential Blob)
// ============================================================================

/// Opaque credential blob carried by a person.
///
/// The core compares it for equality and never interprets it; hashing and
/// storage mechanics belong to the persistence layer behind the ports.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  /// Wraps a raw credential supplied by a command
  pub fn new(password: impl Into<String>) -> Self {
    Self(password.into())
  }

  /// Generates a short temporary password for the forgot-password flow.
  ///
  /// A fixed-length slice of a random token, meant to be replaced at the
  /// next sign-in.
  pub fn temporary() -> Self {
    let mut token = random_hex(SERIAL_KEY_BYTES);
    token.truncate(TEMPORARY_PASSWORD_LEN);
    Self(token)
  }

  /// Returns true when the blob matches a raw credential
  pub fn matches(&self, raw: &str) -> bool {
    self.0 == raw
  }

  /// Returns true when the blob carries no characters
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the blob as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Never expose the credential through Debug or Display
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// SerialKey Value Object
// ============================================================================

/// Rotating per-person session nonce, reissued on every successful
/// authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialKey(String);

impl SerialKey {
  /// Issues a fresh serial key from the operating system CSPRNG
  pub fn generate() -> Self {
    Self(random_hex(SERIAL_KEY_BYTES))
  }

  /// Returns the serial key as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for SerialKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for SerialKey {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// Issues an opaque session value for a newly created token
pub(crate) fn generate_session_value() -> String {
  random_hex(SESSION_VALUE_BYTES)
}

// ============================================================================
// DeviceOs Enum
// ============================================================================

/// Operating system reported by the authenticating client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceOs {
  Unknown,
  Ios,
  Android,
}

impl DeviceOs {
  /// Maps the wire value carried by commands; unrecognized values fall back
  /// to `Unknown` rather than failing the command
  pub fn from_value(value: i32) -> Self {
    match value {
      1 => DeviceOs::Ios,
      2 => DeviceOs::Android,
      _ => DeviceOs::Unknown,
    }
  }

  /// Returns the wire value for this operating system
  pub fn value(&self) -> i32 {
    match self {
      DeviceOs::Unknown => 0,
      DeviceOs::Ios => 1,
      DeviceOs::Android => 2,
    }
  }
}

pub mod entities;
pub mod errors;
pub mod events;
pub mod messages;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Device, DeviceStatus, EmailNotification, Person, PersonStatus, Token};
pub use errors::{IdentityError, RepositoryError, ValueObjectError};
pub use events::{PasswordResetEmailHandler, PasswordResetRequested};
pub use value_objects::{DeviceOs, Email, Password, SerialKey};

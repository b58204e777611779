//! Business-rule failure messages pushed into the notification collector

pub const EMAIL_INVALID: &str = "Email address is not valid";

pub const REGISTER_PASSWORD_REQUIRED: &str = "Password is required for registration";
pub const REGISTER_EMAIL_ALREADY_TAKEN: &str = "Email address is already registered";

pub const AUTHENTICATE_USER_REQUIRED: &str = "User is required";
pub const AUTHENTICATE_PASSWORD_REQUIRED: &str = "Password is required";
pub const AUTHENTICATE_LOGIN_FAILED: &str = "User or password is invalid";
pub const AUTHENTICATE_USER_INACTIVE: &str = "User is inactive";

pub const CHANGE_PASSWORD_IDENTIFICATION_REQUIRED: &str = "Device identification is required";
pub const CHANGE_PASSWORD_SERIAL_KEY_REQUIRED: &str = "Serial key is required";
pub const CHANGE_PASSWORD_NEW_PASSWORD_REQUIRED: &str = "New password is required";
pub const CHANGE_PASSWORD_PERSON_NOT_FOUND: &str = "Serial key does not match any user";
pub const CHANGE_PASSWORD_DEVICE_NOT_FOUND: &str = "Device is not registered";
pub const CHANGE_PASSWORD_DEVICE_NOT_OWNED: &str = "Device does not belong to this user";

pub const COMMIT_FAILED: &str = "An error occurred while saving the data";

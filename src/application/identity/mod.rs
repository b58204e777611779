//! Identity use cases
//!
//! Each file holds one command, its result and its handler. Every handler
//! takes a caller-scoped `NotificationCollector` and answers with a sentinel
//! result when any validation tier or the commit fails.

mod authenticate_user;
mod change_password;
mod forgot_password;
mod register_user;

#[cfg(test)]
mod support;

pub use authenticate_user::{
  AuthenticateUserCommand, AuthenticateUserHandler, AuthenticateUserResult,
};
pub use change_password::{ChangePasswordCommand, ChangePasswordHandler, ChangePasswordResult};
pub use forgot_password::{ForgotPasswordCommand, ForgotPasswordHandler, ForgotPasswordResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};

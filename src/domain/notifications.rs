//! Business-rule failure reporting
//!
//! Handlers never raise errors for rule violations. Each command runs with
//! its own collector; the caller inspects it after `handle` returns. The
//! collector is plain owned state, so concurrent commands never share it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One business-rule violation produced while handling a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainNotification {
  message: String,
}

impl DomainNotification {
  /// Creates a notification carrying a failure message
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  /// Returns the failure message
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for DomainNotification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

/// Per-command sink of business-rule violations
#[derive(Debug, Default)]
pub struct NotificationCollector {
  notifications: Vec<DomainNotification>,
}

impl NotificationCollector {
  /// Creates an empty collector
  pub fn new() -> Self {
    Self::default()
  }

  /// Records a failure message
  pub fn add(&mut self, message: impl Into<String>) {
    self.notifications.push(DomainNotification::new(message));
  }

  /// Checks whether any failure was recorded
  pub fn has_notifications(&self) -> bool {
    !self.notifications.is_empty()
  }

  /// Number of recorded failures
  pub fn len(&self) -> usize {
    self.notifications.len()
  }

  /// Checks whether the collector is empty
  pub fn is_empty(&self) -> bool {
    self.notifications.is_empty()
  }

  /// Iterates over the recorded failures in insertion order
  pub fn iter(&self) -> impl Iterator<Item = &DomainNotification> {
    self.notifications.iter()
  }

  /// Checks whether a specific failure message was recorded
  pub fn contains(&self, message: &str) -> bool {
    self.notifications.iter().any(|n| n.message == message)
  }
}

/// One tier of independent validation checks.
///
/// Every check in a tier is evaluated and every failure reported before the
/// tier's aggregate verdict is derived, so a caller with several simultaneous
/// problems learns about all of them in one round trip. Handlers fail fast
/// only between tiers, never inside one.
#[derive(Debug, Default)]
pub struct ValidationTier {
  checks: Vec<(bool, &'static str)>,
}

impl ValidationTier {
  /// Starts an empty tier
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one predicate outcome with its failure message
  pub fn check(mut self, passed: bool, message: &'static str) -> Self {
    self.checks.push((passed, message));
    self
  }

  /// Pushes every failure into the collector and returns the tier verdict
  pub fn finish(self, collector: &mut NotificationCollector) -> bool {
    let mut passed = true;
    for (ok, message) in self.checks {
      if !ok {
        collector.add(message);
        passed = false;
      }
    }
    passed
  }
}

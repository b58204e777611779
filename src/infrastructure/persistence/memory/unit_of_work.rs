use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::identity::{errors::IdentityError, ports::UnitOfWork};

/// In-memory implementation of the UnitOfWork trait.
///
/// The in-memory repositories apply writes immediately, so committing is a
/// no-op that succeeds. A toggle simulates a clean commit failure so callers
/// can exercise the "operation did not happen" path.
#[derive(Default)]
pub struct InMemoryUnitOfWork {
  fail: AtomicBool,
}

impl InMemoryUnitOfWork {
  /// Creates a unit of work whose commits succeed
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes subsequent commits report failure (or success again)
  pub fn set_failing(&self, fail: bool) {
    self.fail.store(fail, Ordering::SeqCst);
  }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
  async fn commit(&self) -> Result<bool, IdentityError> {
    let success = !self.fail.load(Ordering::SeqCst);
    if !success {
      tracing::warn!("Commit refused by configuration");
    }
    Ok(success)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_commit_succeeds_by_default_and_fails_on_demand() {
    let unit_of_work = InMemoryUnitOfWork::new();
    assert!(unit_of_work.commit().await.unwrap());

    unit_of_work.set_failing(true);
    assert!(!unit_of_work.commit().await.unwrap());

    unit_of_work.set_failing(false);
    assert!(unit_of_work.commit().await.unwrap());
  }
}

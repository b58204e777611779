use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::identity::{
  entities::{Device, Person},
  errors::{IdentityError, RepositoryError},
  ports::DeviceRepository,
};

/// In-memory implementation of the DeviceRepository trait
#[derive(Default)]
pub struct InMemoryDeviceRepository {
  rows: RwLock<HashMap<Uuid, Device>>,
}

impl InMemoryDeviceRepository {
  /// Creates an empty repository
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored devices, retired ones included
  pub async fn len(&self) -> usize {
    self.rows.read().await.len()
  }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
  async fn add(&self, device: Device) -> Result<Device, IdentityError> {
    let mut rows = self.rows.write().await;
    if rows.contains_key(&device.id) {
      return Err(RepositoryError::DuplicateKey(device.id.to_string()).into());
    }
    rows.insert(device.id, device.clone());
    Ok(device)
  }

  async fn update(&self, device: Device) -> Result<Device, IdentityError> {
    let mut rows = self.rows.write().await;
    if !rows.contains_key(&device.id) {
      return Err(RepositoryError::NotFound.into());
    }
    rows.insert(device.id, device.clone());
    Ok(device)
  }

  async fn find_by_person(&self, person: &Person) -> Result<Option<Device>, IdentityError> {
    let rows = self.rows.read().await;
    // The person's current device is the one still enabled and active.
    Ok(
      rows
        .values()
        .find(|d| d.person_id == person.id && d.is_enabled() && d.is_active())
        .cloned(),
    )
  }

  async fn find_by_identification(
    &self,
    identification: &str,
  ) -> Result<Option<Device>, IdentityError> {
    let rows = self.rows.read().await;
    Ok(
      rows
        .values()
        .find(|d| d.identification == identification)
        .cloned(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::identity::value_objects::{DeviceOs, Email, Password};

  fn person() -> Person {
    Person::new(
      "Test Resident".to_string(),
      "12345678900".to_string(),
      Email::new("resident@building.com").unwrap(),
      Password::new("1234"),
    )
  }

  #[tokio::test]
  async fn test_find_by_person_returns_only_the_live_device() {
    let repository = InMemoryDeviceRepository::new();
    let owner = person();

    let mut retired = Device::new_for_person(&owner, DeviceOs::Ios, "old".to_string());
    retired.disable();
    retired.deactivate();
    repository.add(retired).await.unwrap();

    let live = Device::new_for_person(&owner, DeviceOs::Ios, "new".to_string());
    let live = repository.add(live).await.unwrap();

    let found = repository.find_by_person(&owner).await.unwrap().unwrap();
    assert_eq!(found, live);
    assert_eq!(repository.len().await, 2);
  }

  #[tokio::test]
  async fn test_find_by_identification_matches_fingerprint() {
    let repository = InMemoryDeviceRepository::new();
    let owner = person();
    let device = Device::new_for_person(&owner, DeviceOs::Android, "fingerprint-1".to_string());
    repository.add(device.clone()).await.unwrap();

    assert_eq!(
      repository
        .find_by_identification("fingerprint-1")
        .await
        .unwrap(),
      Some(device)
    );
    assert!(
      repository
        .find_by_identification("fingerprint-2")
        .await
        .unwrap()
        .is_none()
    );
  }

  #[tokio::test]
  async fn test_update_requires_existing_row() {
    let repository = InMemoryDeviceRepository::new();
    let device = Device::new_for_person(&person(), DeviceOs::Ios, "x".to_string());
    assert!(repository.update(device).await.is_err());
  }
}

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::identity::{
  entities::Person,
  errors::{IdentityError, RepositoryError},
  ports::PersonRepository,
  value_objects::Email,
};

/// In-memory implementation of the PersonRepository trait.
///
/// Reference adapter: a map of owned aggregates behind an async lock. Lookups
/// hand out clones, the way a database row materializes a fresh value.
#[derive(Default)]
pub struct InMemoryPersonRepository {
  rows: RwLock<HashMap<Uuid, Person>>,
}

impl InMemoryPersonRepository {
  /// Creates an empty repository
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored persons
  pub async fn len(&self) -> usize {
    self.rows.read().await.len()
  }

  /// Checks whether the repository is empty
  pub async fn is_empty(&self) -> bool {
    self.rows.read().await.is_empty()
  }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
  async fn add(&self, person: Person) -> Result<Person, IdentityError> {
    let mut rows = self.rows.write().await;
    if rows.contains_key(&person.id) {
      return Err(RepositoryError::DuplicateKey(person.id.to_string()).into());
    }
    rows.insert(person.id, person.clone());
    Ok(person)
  }

  async fn update(&self, person: Person) -> Result<Person, IdentityError> {
    let mut rows = self.rows.write().await;
    if !rows.contains_key(&person.id) {
      return Err(RepositoryError::NotFound.into());
    }
    rows.insert(person.id, person.clone());
    Ok(person)
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<Person>, IdentityError> {
    let rows = self.rows.read().await;
    Ok(rows.values().find(|p| &p.email == email).cloned())
  }

  async fn find_by_serial_key(&self, serial_key: &str) -> Result<Option<Person>, IdentityError> {
    let rows = self.rows.read().await;
    Ok(
      rows
        .values()
        .find(|p| p.serial_key.as_str() == serial_key)
        .cloned(),
    )
  }

  async fn find_by_username_and_password(
    &self,
    username: &str,
    password: &str,
  ) -> Result<Option<Person>, IdentityError> {
    let rows = self.rows.read().await;
    Ok(
      rows
        .values()
        .find(|p| p.email.as_str() == username && p.password.matches(password))
        .cloned(),
    )
  }
}

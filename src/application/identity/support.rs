//! Recording mock adapters shared by the handler unit tests.
//!
//! Each mock returns scripted values regardless of arguments and counts the
//! calls it receives, so tests can assert which repositories a handler
//! touched and how often.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::identity::entities::{Device, Person, Token};
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::ports::{
  DeviceRepository, PersonRepository, TokenRepository, UnitOfWork,
};
use crate::domain::identity::value_objects::{Email, Password};

/// Builds a valid, active person for test arrangements
pub fn person() -> Person {
  Person::new(
    "Test Resident".to_string(),
    "12345678900".to_string(),
    Email::new("login@domain.com").unwrap(),
    Password::new("1234"),
  )
}

#[derive(Default)]
pub struct MockPersonRepository {
  pub by_email: Mutex<Option<Person>>,
  pub by_serial_key: Mutex<Option<Person>>,
  pub by_credentials: Mutex<Option<Person>>,
  pub added: Mutex<Vec<Person>>,
  pub updated: Mutex<Vec<Person>>,
  pub find_by_email_calls: AtomicUsize,
  pub find_by_serial_key_calls: AtomicUsize,
  pub find_by_credentials_calls: AtomicUsize,
}

impl MockPersonRepository {
  pub fn returning_by_email(person: Person) -> Self {
    let repository = Self::default();
    *repository.by_email.lock().unwrap() = Some(person);
    repository
  }

  pub fn returning_by_serial_key(person: Person) -> Self {
    let repository = Self::default();
    *repository.by_serial_key.lock().unwrap() = Some(person);
    repository
  }

  pub fn returning_by_credentials(person: Person) -> Self {
    let repository = Self::default();
    *repository.by_credentials.lock().unwrap() = Some(person);
    repository
  }

  pub fn set_by_credentials(&self, person: Option<Person>) {
    *self.by_credentials.lock().unwrap() = person;
  }

  pub fn last_updated(&self) -> Option<Person> {
    self.updated.lock().unwrap().last().cloned()
  }
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
  async fn add(&self, person: Person) -> Result<Person, IdentityError> {
    self.added.lock().unwrap().push(person.clone());
    Ok(person)
  }

  async fn update(&self, person: Person) -> Result<Person, IdentityError> {
    self.updated.lock().unwrap().push(person.clone());
    Ok(person)
  }

  async fn find_by_email(&self, _email: &Email) -> Result<Option<Person>, IdentityError> {
    self.find_by_email_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.by_email.lock().unwrap().clone())
  }

  async fn find_by_serial_key(&self, _serial_key: &str) -> Result<Option<Person>, IdentityError> {
    self.find_by_serial_key_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.by_serial_key.lock().unwrap().clone())
  }

  async fn find_by_username_and_password(
    &self,
    _username: &str,
    _password: &str,
  ) -> Result<Option<Person>, IdentityError> {
    self.find_by_credentials_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.by_credentials.lock().unwrap().clone())
  }
}

#[derive(Default)]
pub struct MockDeviceRepository {
  pub by_person: Mutex<Option<Device>>,
  pub by_identification: Mutex<Option<Device>>,
  pub added: Mutex<Vec<Device>>,
  pub updated: Mutex<Vec<Device>>,
  pub find_by_person_calls: AtomicUsize,
  pub find_by_identification_calls: AtomicUsize,
}

impl MockDeviceRepository {
  pub fn returning_by_person(device: Device) -> Self {
    let repository = Self::default();
    *repository.by_person.lock().unwrap() = Some(device);
    repository
  }

  pub fn returning_by_identification(device: Device) -> Self {
    let repository = Self::default();
    *repository.by_identification.lock().unwrap() = Some(device);
    repository
  }
}

#[async_trait]
impl DeviceRepository for MockDeviceRepository {
  async fn add(&self, device: Device) -> Result<Device, IdentityError> {
    self.added.lock().unwrap().push(device.clone());
    Ok(device)
  }

  async fn update(&self, device: Device) -> Result<Device, IdentityError> {
    self.updated.lock().unwrap().push(device.clone());
    Ok(device)
  }

  async fn find_by_person(&self, _person: &Person) -> Result<Option<Device>, IdentityError> {
    self.find_by_person_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.by_person.lock().unwrap().clone())
  }

  async fn find_by_identification(
    &self,
    _identification: &str,
  ) -> Result<Option<Device>, IdentityError> {
    self.find_by_identification_calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.by_identification.lock().unwrap().clone())
  }
}

#[derive(Default)]
pub struct MockTokenRepository {
  pub added: Mutex<Vec<Token>>,
  pub updated: Mutex<Vec<Token>>,
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
  async fn add(&self, token: Token) -> Result<Token, IdentityError> {
    self.added.lock().unwrap().push(token.clone());
    Ok(token)
  }

  async fn update(&self, token: Token) -> Result<Token, IdentityError> {
    self.updated.lock().unwrap().push(token.clone());
    Ok(token)
  }
}

pub struct MockUnitOfWork {
  pub succeed: AtomicBool,
  pub commits: AtomicUsize,
}

impl Default for MockUnitOfWork {
  fn default() -> Self {
    Self {
      succeed: AtomicBool::new(true),
      commits: AtomicUsize::new(0),
    }
  }
}

impl MockUnitOfWork {
  pub fn failing() -> Self {
    Self {
      succeed: AtomicBool::new(false),
      commits: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl UnitOfWork for MockUnitOfWork {
  async fn commit(&self) -> Result<bool, IdentityError> {
    self.commits.fetch_add(1, Ordering::SeqCst);
    Ok(self.succeed.load(Ordering::SeqCst))
  }
}

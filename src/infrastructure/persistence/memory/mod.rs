//! In-memory reference adapters for the identity ports

mod device_repository;
mod email_notification_repository;
mod person_repository;
mod token_repository;
mod unit_of_work;

pub use device_repository::InMemoryDeviceRepository;
pub use email_notification_repository::InMemoryEmailNotificationRepository;
pub use person_repository::InMemoryPersonRepository;
pub use token_repository::InMemoryTokenRepository;
pub use unit_of_work::InMemoryUnitOfWork;

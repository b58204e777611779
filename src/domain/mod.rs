pub mod events;
pub mod identity;
pub mod notifications;

// Re-export identity module for easier access
pub use identity::*;

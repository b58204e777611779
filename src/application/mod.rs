//! Application layer
//!
//! One command handler per identity use case. Handlers orchestrate the
//! validation tiers, entity mutation, repository calls, the unit-of-work
//! commit and post-commit event emission; business-rule failures come back
//! as sentinel results plus collected notifications, never as errors.

pub mod identity;

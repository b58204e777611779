//! condokey — resident identity core
//!
//! Registration, authentication, password recovery and password change,
//! shaped as discrete commands executed against repository ports. Business
//! rule violations never raise errors: each handler collects them in a
//! per-command notification sink and answers with a sentinel-valued result,
//! and state changes become visible (and domain events fire) only after the
//! unit of work committed.
//!
//! Layering: `domain` holds the aggregates, value objects, ports, the
//! notification pipeline and the event dispatcher; `application` holds one
//! command handler per use case; `infrastructure` holds the in-memory
//! reference adapters.

pub mod application;
pub mod domain;
pub mod infrastructure;

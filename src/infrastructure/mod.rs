//! Infrastructure layer
//!
//! Adapters implementing the domain ports. Database-backed repositories, the
//! HTTP transport and real e-mail delivery live outside this crate; the
//! in-memory adapters here are the reference implementations the integration
//! tests run against.

pub mod persistence;

//! In-memory stand-ins for the remote API.
//!
//! Used by the integration tests.

pub mod stubs;

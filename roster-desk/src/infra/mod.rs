//! Infrastructure: HTTP access to the users API, service seams, constants,
//! and an in-memory stand-in used by the tests.

pub mod api_client;
pub mod constants;
pub mod services;
pub mod testing;

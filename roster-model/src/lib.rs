//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod form;
pub mod ids;
pub mod prelude;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use form::FormMode;
pub use ids::UserId;
pub use user::{DraftField, User, UserDraft};

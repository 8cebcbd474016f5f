//! UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in roster-desk or other presentation layers.

pub use super::form::FormMode;
pub use super::ids::UserId;
pub use super::user::{DraftField, User, UserDraft};

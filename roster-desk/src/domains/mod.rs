//! UI-facing domains.

pub mod ui;
pub mod users;

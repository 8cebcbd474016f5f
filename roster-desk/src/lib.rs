//! Roster desktop client library
//!
//! A single window with a create/edit form and a table of users, mirroring a
//! remote users REST API. The executable in `src/main.rs` wires the
//! configuration and runs the iced application built here.
//!
//! Notes
//! - The library is exposed mainly to enable testing; most consumers should
//!   use the `roster-desk` binary.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;

//! Users domain
//!
//! Holds the local mirror of the remote users list together with the form
//! and delete-confirmation state, and turns form actions into API calls.

pub mod messages;
pub mod store;
pub mod update;

pub use messages::Message as UsersMessage;
pub use store::{DeletePrompt, UserStore};
pub use update::update_users;

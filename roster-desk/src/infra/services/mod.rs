//! Service abstractions the domains talk to

pub mod user_directory;

pub use user_directory::{
    DirectoryError, DirectoryOperation, UserDirectoryApiAdapter,
    UserDirectoryService,
};

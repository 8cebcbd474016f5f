pub mod user_directory;

pub use user_directory::TestUserDirectory;

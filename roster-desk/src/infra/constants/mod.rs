//! Constants module for centralized configuration values

pub mod routes;

pub mod notification {
    use std::time::Duration;

    /// How long a notification stays up before hiding itself.
    pub const AUTO_HIDE: Duration = Duration::from_millis(3000);
}

pub mod env {
    pub const API_URL: &str = "ROSTER_API_URL";
    pub const API_KEY: &str = "ROSTER_API_KEY";
}

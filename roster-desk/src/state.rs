//! Root application state.
//!
//! `State` is the single store everything is rendered from. Views borrow it
//! immutably; `update` is the only place that mutates it, and only through
//! the operations on [`UserStore`] and [`Notification`].

use std::sync::Arc;

use crate::app::AppConfig;
use crate::domains::ui::Notification;
use crate::domains::users::UserStore;
use crate::infra::services::UserDirectoryService;

pub struct State {
    pub config: AppConfig,
    pub store: UserStore,
    pub notification: Notification,
    directory: Arc<dyn UserDirectoryService>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("notification", &self.notification)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(
        config: AppConfig,
        directory: Arc<dyn UserDirectoryService>,
    ) -> Self {
        Self {
            config,
            store: UserStore::new(),
            notification: Notification::default(),
            directory,
        }
    }

    /// Handle to the users API, cloned into request tasks.
    pub fn directory(&self) -> Arc<dyn UserDirectoryService> {
        Arc::clone(&self.directory)
    }
}

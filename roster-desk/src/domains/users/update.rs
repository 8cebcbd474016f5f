use iced::Task;
use log::{debug, error, info, warn};

use crate::{
    common::messages::DomainMessage,
    domains::{
        ui::feedback_ui::{Severity, notify},
        users::messages::Message,
    },
    state::State,
};

/// Handle users domain messages
pub fn update_users(
    state: &mut State,
    message: Message,
) -> Task<DomainMessage> {
    debug!("Users update: {}", message.name());

    match message {
        // Initial fetch
        Message::LoadUsers => {
            info!("Loading users from server");
            let service = state.directory();
            Task::perform(
                async move {
                    service.list_users().await.map_err(|e| e.to_string())
                },
                |result| DomainMessage::Users(Message::UsersLoaded(result)),
            )
        }

        Message::UsersLoaded(result) => match result {
            Ok(users) => {
                info!("Successfully loaded {} users", users.len());
                state.store.set_users(users);
                Task::none()
            }
            Err(err) => {
                error!("Error fetching users: {}", err);
                notify(state, "Failed to load users.", Severity::Error)
            }
        },

        // Form
        Message::FieldChanged(field, value) => {
            state.store.edit_field(field, value);
            Task::none()
        }

        Message::SubmitForm => {
            let service = state.directory();
            match state.store.submission() {
                (None, draft) => {
                    info!("Submitting new user");
                    Task::perform(
                        async move {
                            service
                                .create_user(draft)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        |result| {
                            DomainMessage::Users(Message::UserCreated(result))
                        },
                    )
                }
                (Some(id), draft) => {
                    info!("Submitting update for user {}", id);
                    let target = id.clone();
                    Task::perform(
                        async move {
                            service
                                .update_user(target, draft)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        move |result| {
                            DomainMessage::Users(Message::UserUpdated {
                                id: id.clone(),
                                result,
                            })
                        },
                    )
                }
            }
        }

        // User creation
        Message::UserCreated(result) => match result {
            Ok(user) => {
                info!("User created successfully: {}", user.id);
                state.store.append_user(user);
                state.store.reset_create_draft();
                notify(state, "User created successfully!", Severity::Success)
            }
            Err(err) => {
                error!("Error adding user: {}", err);
                notify(state, "Failed to create user.", Severity::Error)
            }
        },

        // User updates
        Message::BeginEdit(user) => {
            debug!("Editing user {}", user.id);
            state.store.begin_edit(&user);
            Task::none()
        }

        Message::CancelEdit => {
            state.store.clear_edit();
            Task::none()
        }

        Message::UserUpdated { id, result } => match result {
            Ok(updated) => {
                info!("User updated successfully: {}", id);
                if state.store.replace_user(&id, updated) == 0 {
                    warn!("Updated user {} is no longer in the list", id);
                }
                state.store.clear_edit();
                notify(state, "User updated successfully!", Severity::Success)
            }
            Err(err) => {
                error!("Error updating user {}: {}", id, err);
                notify(state, "Failed to update user.", Severity::Error)
            }
        },

        // User deletion
        Message::RequestDelete(id) => {
            debug!("Requesting delete confirmation for user {}", id);
            state.store.request_delete(id);
            Task::none()
        }

        Message::CancelDelete => {
            state.store.cancel_delete();
            Task::none()
        }

        Message::ConfirmDelete => {
            let Some(id) = state.store.confirm_delete() else {
                debug!("No delete pending confirmation");
                return Task::none();
            };
            info!("Deleting user {}", id);
            let service = state.directory();
            let target = id.clone();
            Task::perform(
                async move {
                    service
                        .delete_user(target)
                        .await
                        .map_err(|e| e.to_string())
                },
                move |result| {
                    DomainMessage::Users(Message::UserDeleted {
                        id: id.clone(),
                        result,
                    })
                },
            )
        }

        Message::UserDeleted { id, result } => {
            state.store.settle_delete();
            match result {
                Ok(()) => {
                    let removed = state.store.remove_user(&id);
                    info!("User {} deleted ({} row(s) removed)", id, removed);
                    notify(
                        state,
                        "User deleted successfully!",
                        Severity::Success,
                    )
                }
                Err(err) => {
                    error!("Error deleting user {}: {}", id, err);
                    notify(state, "Failed to delete user.", Severity::Error)
                }
            }
        }
    }
}

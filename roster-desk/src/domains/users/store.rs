//! The users half of the state store: the list mirror, the form, and the
//! delete confirmation.
//!
//! All mutation goes through the methods here; `update` is the only caller.

use roster_model::{DraftField, FormMode, User, UserDraft, UserId};

/// Lifecycle of the delete confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletePrompt {
    #[default]
    Closed,
    /// Dialog open, waiting for the user to confirm or cancel.
    Confirming(UserId),
    /// Confirmed; the delete request is in flight.
    Deleting(UserId),
}

impl DeletePrompt {
    pub fn is_open(&self) -> bool {
        !matches!(self, DeletePrompt::Closed)
    }

    pub fn target(&self) -> Option<&UserId> {
        match self {
            DeletePrompt::Closed => None,
            DeletePrompt::Confirming(id) | DeletePrompt::Deleting(id) => {
                Some(id)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<User>,
    form: FormMode,
    delete_prompt: DeletePrompt,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &FormMode {
        &self.form
    }

    pub fn delete_prompt(&self) -> &DeletePrompt {
        &self.delete_prompt
    }

    /// Replace the whole list (initial fetch).
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Add one user at the end (after create).
    pub fn append_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Swap the entries matching `id` for `updated`. Returns how many rows
    /// changed; zero leaves the list untouched.
    pub fn replace_user(&mut self, id: &UserId, updated: User) -> usize {
        let mut replaced = 0;
        for user in self.users.iter_mut().filter(|user| &user.id == id) {
            *user = updated.clone();
            replaced += 1;
        }
        replaced
    }

    /// Drop every entry matching `id`. Returns how many were removed.
    pub fn remove_user(&mut self, id: &UserId) -> usize {
        let before = self.users.len();
        self.users.retain(|user| &user.id != id);
        before - self.users.len()
    }

    pub fn begin_edit(&mut self, user: &User) {
        self.form.begin_edit(user);
    }

    pub fn clear_edit(&mut self) {
        self.form.clear_edit();
    }

    /// Type into whichever draft the form is bound to.
    pub fn edit_field(&mut self, field: DraftField, value: String) {
        self.form.active_draft_mut().set(field, value);
    }

    pub fn reset_create_draft(&mut self) {
        self.form.reset_create_draft();
    }

    /// Snapshot of what a submit would send right now.
    pub fn submission(&self) -> (Option<UserId>, UserDraft) {
        (
            self.form.editing_id().cloned(),
            self.form.active_draft().clone(),
        )
    }

    pub fn request_delete(&mut self, id: UserId) {
        self.delete_prompt = DeletePrompt::Confirming(id);
    }

    /// Close the dialog without deleting. Ignored while a delete is in
    /// flight.
    pub fn cancel_delete(&mut self) {
        if let DeletePrompt::Confirming(_) = self.delete_prompt {
            self.delete_prompt = DeletePrompt::Closed;
        }
    }

    /// Confirm the pending target. Yields the id to delete exactly once.
    pub fn confirm_delete(&mut self) -> Option<UserId> {
        match std::mem::take(&mut self.delete_prompt) {
            DeletePrompt::Confirming(id) => {
                self.delete_prompt = DeletePrompt::Deleting(id.clone());
                Some(id)
            }
            other => {
                self.delete_prompt = other;
                None
            }
        }
    }

    /// Close the dialog once the delete request has resolved.
    pub fn settle_delete(&mut self) {
        self.delete_prompt = DeletePrompt::Closed;
    }
}

//! Create/edit discriminator for the user form.

use crate::ids::UserId;
use crate::user::{User, UserDraft};

/// Which draft the form is bound to.
///
/// `Edit` keeps the create draft aside in `pending_create` so leaving edit
/// mode hands back whatever had been typed into the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create(UserDraft),
    Edit {
        id: UserId,
        draft: UserDraft,
        pending_create: UserDraft,
    },
}

impl Default for FormMode {
    fn default() -> Self {
        FormMode::Create(UserDraft::default())
    }
}

impl FormMode {
    /// Switch to editing `user`, pre-filled with its fields.
    ///
    /// Re-targeting an edit that is already active keeps the parked create
    /// draft.
    pub fn begin_edit(&mut self, user: &User) {
        let pending_create = match std::mem::take(self) {
            FormMode::Create(draft) => draft,
            FormMode::Edit { pending_create, .. } => pending_create,
        };
        *self = FormMode::Edit {
            id: user.id.clone(),
            draft: user.draft(),
            pending_create,
        };
    }

    /// Return to create mode. No-op when not editing.
    pub fn clear_edit(&mut self) {
        if let FormMode::Edit { pending_create, .. } = self {
            let restored = std::mem::take(pending_create);
            *self = FormMode::Create(restored);
        }
    }

    /// Empty the create draft, wherever it currently lives.
    pub fn reset_create_draft(&mut self) {
        match self {
            FormMode::Create(draft) => *draft = UserDraft::default(),
            FormMode::Edit { pending_create, .. } => {
                *pending_create = UserDraft::default()
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn editing_id(&self) -> Option<&UserId> {
        match self {
            FormMode::Create(_) => None,
            FormMode::Edit { id, .. } => Some(id),
        }
    }

    /// The draft the inputs are bound to.
    pub fn active_draft(&self) -> &UserDraft {
        match self {
            FormMode::Create(draft) | FormMode::Edit { draft, .. } => draft,
        }
    }

    pub fn active_draft_mut(&mut self) -> &mut UserDraft {
        match self {
            FormMode::Create(draft) | FormMode::Edit { draft, .. } => draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bo() -> User {
        User::from_draft(UserId::from(7), UserDraft::new("Bo", "Lee", "bo@x.com"))
    }

    #[test]
    fn starts_in_create_mode_with_empty_draft() {
        let mode = FormMode::default();
        assert!(!mode.is_editing());
        assert!(mode.active_draft().is_empty());
    }

    #[test]
    fn begin_edit_prefills_and_parks_create_draft() {
        let mut mode = FormMode::Create(UserDraft::new("Ann", "", ""));
        mode.begin_edit(&bo());

        assert_eq!(mode.editing_id(), Some(&UserId::from(7)));
        assert_eq!(mode.active_draft(), &UserDraft::new("Bo", "Lee", "bo@x.com"));

        mode.clear_edit();
        assert_eq!(mode, FormMode::Create(UserDraft::new("Ann", "", "")));
    }

    #[test]
    fn clear_edit_is_idempotent_in_create_mode() {
        let mut mode = FormMode::Create(UserDraft::new("Ann", "Lee", ""));
        let before = mode.clone();
        mode.clear_edit();
        mode.clear_edit();
        assert_eq!(mode, before);
    }

    #[test]
    fn retargeting_edit_keeps_parked_draft() {
        let other = User::from_draft(UserId::from(8), UserDraft::new("Cy", "", ""));
        let mut mode = FormMode::Create(UserDraft::new("Ann", "", ""));
        mode.begin_edit(&bo());
        mode.begin_edit(&other);

        assert_eq!(mode.editing_id(), Some(&UserId::from(8)));
        mode.clear_edit();
        assert_eq!(mode.active_draft().first_name, "Ann");
    }

    #[test]
    fn reset_create_draft_reaches_parked_draft() {
        let mut mode = FormMode::Create(UserDraft::new("Ann", "", ""));
        mode.begin_edit(&bo());
        mode.reset_create_draft();

        assert_eq!(mode.active_draft().first_name, "Bo");
        mode.clear_edit();
        assert!(mode.active_draft().is_empty());
    }
}

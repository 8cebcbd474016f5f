use roster_model::{DraftField, User, UserId};

#[derive(Clone, Debug)]
pub enum Message {
    // Initial fetch
    LoadUsers,
    UsersLoaded(Result<Vec<User>, String>),

    // Form
    FieldChanged(DraftField, String),
    SubmitForm,

    // User creation
    UserCreated(Result<User, String>),

    // User updates
    BeginEdit(User),
    CancelEdit,
    UserUpdated {
        id: UserId,
        result: Result<User, String>,
    },

    // User deletion
    RequestDelete(UserId),
    CancelDelete,
    ConfirmDelete,
    UserDeleted {
        id: UserId,
        result: Result<(), String>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            // Initial fetch
            Self::LoadUsers => "Users::LoadUsers",
            Self::UsersLoaded(_) => "Users::UsersLoaded",

            // Form
            Self::FieldChanged(_, _) => "Users::FieldChanged",
            Self::SubmitForm => "Users::SubmitForm",

            // User creation
            Self::UserCreated(_) => "Users::UserCreated",

            // User updates
            Self::BeginEdit(_) => "Users::BeginEdit",
            Self::CancelEdit => "Users::CancelEdit",
            Self::UserUpdated { .. } => "Users::UserUpdated",

            // User deletion
            Self::RequestDelete(_) => "Users::RequestDelete",
            Self::CancelDelete => "Users::CancelDelete",
            Self::ConfirmDelete => "Users::ConfirmDelete",
            Self::UserDeleted { .. } => "Users::UserDeleted",
        }
    }
}

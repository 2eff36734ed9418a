use crate::model::user::UserDto;

/// Logged-in user shared through context by [`crate::client::App`].
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the initial `/api/auth/user` request has completed.
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }
}

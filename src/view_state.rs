use crate::user::User;

/// The observable mode of a [`UserFetchWidget`](crate::widget::UserFetchWidget)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(Vec<User>),
}

impl ViewState {

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The users on display, empty unless loaded
    pub fn users(&self) -> &[User] {
        match self {
            ViewState::Loaded(users) => users,
            _ => &[],
        }
    }

}

use std::sync::Arc;
use crate::error::FetchError;
use crate::render::RenderTarget;
use crate::user::{fallback_users, User};
use crate::view_state::ViewState;
use crate::UsersClient;

/// Loads users from a [`UsersClient`] and draws them as cards onto a [`RenderTarget`]
///
/// ```no_run
/// use user_fetch_widget::{ClientOptions, HtmlPage, UserFetchWidget, UsersClient};
///
/// # async fn run() -> anyhow::Result<()> {
/// let client = UsersClient::new(ClientOptions::default())?;
/// let mut widget = UserFetchWidget::new(client, HtmlPage::new());
/// widget.on_trigger().await;
/// println!("{}", widget.target().to_html());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UserFetchWidget<T: RenderTarget> {
    client: UsersClient,
    target: T,
    fallback: Arc<[User]>,
    state: ViewState,
}

impl<T: RenderTarget> UserFetchWidget<T> {

    /// Creates an idle widget, that falls back to [`FALLBACK_USERS`](crate::user::FALLBACK_USERS)
    pub fn new(client: UsersClient, target: T) -> Self {
        Self {
            client,
            target,
            fallback: fallback_users(),
            state: ViewState::Idle,
        }
    }

    /// Replaces the users shown when fetching fails
    pub fn with_fallback(mut self, fallback: impl Into<Arc<[User]>>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Handles one trigger: shows the loading indicator, fetches and renders. \
    /// Never fails, anything that goes wrong ends up in the error region and in [`ViewState::Error`].
    ///
    /// Takes `&mut self`, so a second trigger can not start while one is still pending.
    pub async fn on_trigger(&mut self) {
        if let Err(err) = self.load().await {
            log::error!("Unexpected failure while loading users: {err:#}");
            let message = FetchError::Unexpected(err).banner();
            if let Err(err) = self.target.set_loading(false) {
                log::error!("Could not hide loading indicator: {err:#}");
            }
            if let Err(err) = self.target.show_error(&message) {
                log::error!("Could not show error message: {err:#}");
            }
            self.state = ViewState::Error(message);
        }
    }

    async fn load(&mut self) -> anyhow::Result<()> {
        self.state = ViewState::Loading;
        self.target.clear_cards()?;
        self.target.clear_error()?;
        self.target.set_loading(true)?;
        let users = self.fetch_users().await?;
        self.render(users)
    }

    /// Fetches the users. \
    /// Network, status and parse failures are not returned: they are logged, shown as an error message
    /// and answered with the fallback users. An `Err` only comes from the render target.
    pub async fn fetch_users(&mut self) -> anyhow::Result<Vec<User>> {
        match self.client.fetch().await {
            Ok(users) => {
                log::debug!("Fetched {} users from {}", users.len(), self.client.endpoint);
                Ok(users)
            }
            Err(err) => {
                log::warn!("Error fetching users from {}: {err}", self.client.endpoint);
                let message = err.banner();
                self.target.show_error(&message)?;
                self.state = ViewState::Error(message);
                Ok(self.fallback.to_vec())
            }
        }
    }

    /// Draws one card per user, in order. \
    /// An empty list is shown as "No users found." instead.
    /// An error message from the preceding fetch stays visible.
    pub fn render(&mut self, users: Vec<User>) -> anyhow::Result<()> {
        self.target.set_loading(false)?;
        self.target.clear_cards()?;
        if users.is_empty() {
            let message = FetchError::EmptyResult.banner();
            self.target.show_error(&message)?;
            self.state = ViewState::Error(message);
            return Ok(());
        }
        for user in &users {
            self.target.push_card(user)?;
        }
        self.state = ViewState::Loaded(users);
        Ok(())
    }

}

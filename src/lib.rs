pub mod error;
pub mod render;
pub mod user;
pub mod view_state;
pub mod widget;

use std::time::Duration;
use anyhow::Context;
use reqwest::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

pub use error::FetchError;
pub use render::{HtmlPage, RenderTarget};
pub use user::{fallback_users, Address, User};
pub use view_state::ViewState;
pub use widget::UserFetchWidget;

pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Options for building a [`UsersClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Where the users are fetched from
    pub endpoint: Url,
    pub timeout: Duration,
    /// Refuse plain http endpoints
    pub https_only: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(USERS_URL).expect("USERS_URL is a valid url"),
            timeout: DEFAULT_TIMEOUT,
            https_only: true,
        }
    }
}

impl ClientOptions {

    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn https_only(mut self, https_only: bool) -> Self {
        self.https_only = https_only;
        self
    }

}

/// A wrapped reqwest [`Client`], bound to a single users endpoint
#[derive(Debug, Clone)]
pub struct UsersClient {
    pub client: Client,
    pub endpoint: Url,
}

impl UsersClient {

    fn make_client(options: &ClientOptions) -> anyhow::Result<Client> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("User-Agent", HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))));
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));
        ClientBuilder::new()
            .https_only(options.https_only)
            .timeout(options.timeout)
            .default_headers(default_headers)
            .gzip(true)
            .build()
            .context("Could not build reqwest client")
    }

    /// Builds a client for the endpoint in `options`
    pub fn new(options: ClientOptions) -> anyhow::Result<Self> {
        Ok(Self {
            client: Self::make_client(&options)?,
            endpoint: options.endpoint,
        })
    }

    /// Fetches the users from the endpoint. \
    /// Any non-success status code is an error, as is a body that is not a JSON list of [`User`]s.
    /// Nothing is retried.
    pub async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        #[cfg(feature = "verbose")]
        {
            println!("get: {}", self.endpoint.as_str());
        }
        let response = self.client.get(self.endpoint.clone())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

}

use std::time::Duration;
use anyhow::Context;
use url::Url;
use user_fetch_widget::{ClientOptions, HtmlPage, UserFetchWidget, UsersClient};

// Reads endpoint and timeout overrides from the environment
fn options_from_env() -> anyhow::Result<ClientOptions> {
    let mut options = ClientOptions::default();
    if let Ok(endpoint) = std::env::var("USER_FETCH_ENDPOINT") {
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("Invalid USER_FETCH_ENDPOINT: {endpoint}"))?;
        options = options.https_only(endpoint.scheme() == "https").endpoint(endpoint);
    }
    if let Ok(timeout) = std::env::var("USER_FETCH_TIMEOUT_SECS") {
        let secs: u64 = timeout.parse()
            .with_context(|| format!("Invalid USER_FETCH_TIMEOUT_SECS: {timeout}"))?;
        options = options.timeout(Duration::from_secs(secs));
    }
    Ok(options)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let client = UsersClient::new(options_from_env()?)?;
    let mut widget = UserFetchWidget::new(client, HtmlPage::new());
    widget.on_trigger().await;
    print!("{}", widget.target().to_html());
    Ok(())
}

use thiserror::Error;

/// Everything that can go wrong between a trigger and the rendered cards
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete (connect, timeout, reading the body)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The body was not a JSON list of users
    #[error("Invalid user data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No users found.")]
    EmptyResult,

    /// Anything else, that escaped while loading users. Mostly a broken [`RenderTarget`](crate::render::RenderTarget)
    #[error("An unexpected error occurred. Please try again.")]
    Unexpected(anyhow::Error),
}

impl FetchError {

    /// Whether the widget answers this error with the fallback dataset
    pub fn uses_fallback(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::HttpStatus(_) | FetchError::Parse(_))
    }

    /// The message shown in the error region
    pub fn banner(&self) -> String {
        if self.uses_fallback() {
            format!("Failed to fetch users: {self}")
        } else {
            self.to_string()
        }
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(FetchError::HttpStatus(500).banner(), "Failed to fetch users: HTTP error! status: 500");
        assert_eq!(FetchError::EmptyResult.banner(), "No users found.");
        assert_eq!(
            FetchError::Unexpected(anyhow::anyhow!("disk full")).banner(),
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn test_parse_error_uses_fallback() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.uses_fallback());
        assert!(err.banner().starts_with("Failed to fetch users: Invalid user data:"));
        assert!(!FetchError::EmptyResult.uses_fallback());
    }
}

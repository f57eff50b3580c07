use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Provider identifier cannot be empty")]
    MissingProvider,

    #[error("Unsupported git provider: {0}")]
    UnsupportedProvider(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{provider} API error: {status} body: {body}")]
    RemoteApi {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("No tags found for repo: {org}/{repo}")]
    NoTagsFound { org: String, repo: String },
}

impl CheckError {
    /// Returns true for errors caused by the caller's setup rather than the remote side
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CheckError::MissingProvider
                | CheckError::UnsupportedProvider(_)
                | CheckError::HttpClient(_)
        )
    }
}

//! GitHub tags API provider implementation

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::config::{CheckerConfig, DEFAULT_GITHUB_BASE_URL};
use crate::version::checker::ProviderKind;
use crate::version::error::CheckError;
use crate::version::provider::GitProvider;
use crate::version::providers::{build_client, fetch_latest_tag, non_blank_token};

/// Provider implementation for `GET /repos/{org}/{repo}/tags`
pub struct GitHubProvider {
    client: Client,
    base_url: String,
}

impl GitHubProvider {
    /// Creates a new GitHubProvider with a custom base URL
    pub fn new(base_url: &str, config: &CheckerConfig) -> Result<Self, CheckError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a GitHubProvider from the `providers.github` section of the config
    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        Self::new(&config.providers.github.base_url, config)
    }

    /// Creates a GitHubProvider for api.github.com with default timeouts
    pub fn with_defaults() -> Result<Self, CheckError> {
        Self::new(DEFAULT_GITHUB_BASE_URL, &CheckerConfig::default())
    }

    fn tags_url(&self, org: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/tags", self.base_url, org, repo)
    }
}

fn request_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    // A token that cannot be a header value is dropped like a blank one
    if let Some(value) = non_blank_token(token)
        .and_then(|t| HeaderValue::from_str(&format!("Bearer {}", t)).ok())
    {
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

#[async_trait::async_trait]
impl GitProvider for GitHubProvider {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::GitHub
    }

    async fn get_latest_tag(
        &self,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<String, CheckError> {
        let headers = request_headers(token);
        let authenticated = headers.contains_key(AUTHORIZATION);
        fetch_latest_tag(
            &self.client,
            ProviderKind::GitHub,
            &self.tags_url(org, repo),
            headers,
            authenticated,
            org,
            repo,
        )
        .await
    }
}

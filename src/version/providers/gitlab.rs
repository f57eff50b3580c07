//! GitLab repository tags API provider implementation

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use url::form_urlencoded;

use crate::config::{CheckerConfig, DEFAULT_GITLAB_BASE_URL};
use crate::version::checker::ProviderKind;
use crate::version::error::CheckError;
use crate::version::provider::GitProvider;
use crate::version::providers::{build_client, fetch_latest_tag, non_blank_token};

const PRIVATE_TOKEN: HeaderName = HeaderName::from_static("private-token");

/// Provider implementation for `GET /projects/{org%2Frepo}/repository/tags`
pub struct GitLabProvider {
    client: Client,
    base_url: String,
}

impl GitLabProvider {
    /// Creates a new GitLabProvider with a custom base URL (including `/api/v4`)
    pub fn new(base_url: &str, config: &CheckerConfig) -> Result<Self, CheckError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a GitLabProvider from the `providers.gitlab` section of the config
    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        Self::new(&config.providers.gitlab.base_url, config)
    }

    /// Creates a GitLabProvider for gitlab.com with default timeouts
    pub fn with_defaults() -> Result<Self, CheckError> {
        Self::new(DEFAULT_GITLAB_BASE_URL, &CheckerConfig::default())
    }

    fn tags_url(&self, org: &str, repo: &str) -> String {
        format!(
            "{}/projects/{}/repository/tags",
            self.base_url,
            project_id(org, repo)
        )
    }
}

/// GitLab addresses a project by its url-encoded full path (`group%2Fproject`)
fn project_id(org: &str, repo: &str) -> String {
    form_urlencoded::byte_serialize(format!("{}/{}", org, repo).as_bytes()).collect()
}

fn request_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(value) = non_blank_token(token).and_then(|t| HeaderValue::from_str(t).ok()) {
        headers.insert(PRIVATE_TOKEN, value);
    }
    headers
}

#[async_trait::async_trait]
impl GitProvider for GitLabProvider {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::GitLab
    }

    async fn get_latest_tag(
        &self,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<String, CheckError> {
        let headers = request_headers(token);
        let authenticated = headers.contains_key(&PRIVATE_TOKEN);
        fetch_latest_tag(
            &self.client,
            ProviderKind::GitLab,
            &self.tags_url(org, repo),
            headers,
            authenticated,
            org,
            repo,
        )
        .await
    }
}

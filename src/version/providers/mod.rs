//! Provider implementations for fetching tag lists

pub mod github;
pub mod gitlab;

pub use github::GitHubProvider;
pub use gitlab::GitLabProvider;

use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::version::checker::ProviderKind;
use crate::version::error::CheckError;
use crate::version::extract::extract_latest_tag;

/// Build the HTTP client shared by every request of one provider
pub(crate) fn build_client(config: &CheckerConfig) -> Result<Client, CheckError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .build()
        .map_err(CheckError::HttpClient)
}

/// Returns the trimmed token, or None when it is absent or blank
pub(crate) fn non_blank_token(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// Fetch a tag list and select the latest version-shaped tag.
///
/// `authenticated` only feeds the request log; the token itself is never logged.
pub(crate) async fn fetch_latest_tag(
    client: &Client,
    kind: ProviderKind,
    url: &str,
    headers: HeaderMap,
    authenticated: bool,
    org: &str,
    repo: &str,
) -> Result<String, CheckError> {
    debug!(
        "Fetching {} tags: {} (token attached: {})",
        kind.display_name(),
        url,
        authenticated
    );

    let response = client.get(url).headers(headers).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status.as_u16() >= 400 {
        debug!(
            "{} API returned status {}: {}",
            kind.display_name(),
            status,
            url
        );
        return Err(CheckError::RemoteApi {
            provider: kind.display_name(),
            status: status.as_u16(),
            body,
        });
    }

    let Some(latest) = extract_latest_tag(&body) else {
        debug!("No version tags found for {}/{}", org, repo);
        return Err(CheckError::NoTagsFound {
            org: org.to_string(),
            repo: repo.to_string(),
        });
    };

    debug!("Latest tag for {}/{}: {}", org, repo, latest);
    Ok(latest)
}

//! Provider resolution and the public version check entry points

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::config::CheckerConfig;
use crate::version::error::CheckError;
use crate::version::provider::GitProvider;
use crate::version::providers::{GitHubProvider, GitLabProvider};
use crate::version::tag::has_update;

/// Supported git hosting services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// github.com or GitHub Enterprise
    GitHub,
    /// gitlab.com or a self-hosted GitLab instance
    GitLab,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::GitHub, ProviderKind::GitLab];

    /// Returns the identifier used to select this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "github",
            ProviderKind::GitLab => "gitlab",
        }
    }

    /// Returns the human readable provider name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "GitHub",
            ProviderKind::GitLab => "GitLab",
        }
    }

    /// Resolve an optional identifier, treating a missing one as a configuration error
    pub fn resolve(id: Option<&str>) -> Result<Self, CheckError> {
        id.ok_or(CheckError::MissingProvider)?.parse()
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CheckError::UnsupportedProvider(s.to_string()))
    }
}

/// Outcome of comparing a local version with the latest remote tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    /// Version supplied by the caller, as given
    pub current: String,
    /// Latest remote tag, as published
    pub latest: String,
    /// Whether `latest` ranks above `current`
    pub newer: bool,
}

/// Entry point that dispatches version checks to the provider named by the caller.
///
/// Each provider is built once and keeps its own connection pool, so a single
/// checker can be shared across concurrent tasks.
pub struct VersionChecker {
    providers: HashMap<ProviderKind, Arc<dyn GitProvider>>,
}

impl VersionChecker {
    /// Create a checker with a provider for every supported service
    pub fn new(config: &CheckerConfig) -> Result<Self, CheckError> {
        Ok(Self::with_providers(vec![
            Arc::new(GitHubProvider::from_config(config)?) as Arc<dyn GitProvider>,
            Arc::new(GitLabProvider::from_config(config)?),
        ]))
    }

    /// Create a checker from explicit provider implementations
    pub fn with_providers(providers: Vec<Arc<dyn GitProvider>>) -> Self {
        Self {
            providers: providers
                .into_iter()
                .map(|provider| (provider.provider_kind(), provider))
                .collect(),
        }
    }

    /// Get the provider registered for `kind`
    pub fn provider(&self, kind: ProviderKind) -> Result<&Arc<dyn GitProvider>, CheckError> {
        self.providers
            .get(&kind)
            .ok_or_else(|| CheckError::UnsupportedProvider(kind.to_string()))
    }

    /// Resolve a provider identifier case-insensitively
    pub fn resolve(&self, provider_id: Option<&str>) -> Result<&Arc<dyn GitProvider>, CheckError> {
        self.provider(ProviderKind::resolve(provider_id)?)
    }

    /// Returns the latest version-shaped tag of `org/repo`, as published
    pub async fn latest_tag(
        &self,
        provider_id: Option<&str>,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<String, CheckError> {
        self.resolve(provider_id)?
            .get_latest_tag(org, repo, token)
            .await
    }

    /// Compare `current_version` with the latest remote tag
    pub async fn check(
        &self,
        provider_id: Option<&str>,
        current_version: &str,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<UpdateCheck, CheckError> {
        let latest = self.latest_tag(provider_id, org, repo, token).await?;
        let newer = has_update(current_version, &latest);

        debug!(
            "Version check for {}/{}: current={} latest={} newer={}",
            org, repo, current_version, latest, newer
        );

        Ok(UpdateCheck {
            current: current_version.to_string(),
            latest,
            newer,
        })
    }

    /// Returns true if a newer version than `current_version` exists remotely.
    ///
    /// The decision is left to the resolved provider's `compare_version`.
    pub async fn compare_version(
        &self,
        provider_id: Option<&str>,
        current_version: &str,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<bool, CheckError> {
        self.resolve(provider_id)?
            .compare_version(current_version, org, repo, token)
            .await
    }
}

use std::time::Duration;

use serde::Deserialize;

// =============================================================================
// Defaults
// =============================================================================

/// Connect timeout in milliseconds (10 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Whole-request timeout in milliseconds (20 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 20_000;

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Default base URL for the GitLab REST API
pub const DEFAULT_GITLAB_BASE_URL: &str = "https://gitlab.com/api/v4";

/// GitHub rejects requests without a User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub user_agent: String,
    pub providers: ProvidersConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl CheckerConfig {
    /// Parse a JSON configuration document, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Point every provider at the same base URL (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.providers.github.base_url = base_url.to_string();
        self.providers.gitlab.base_url = base_url.to_string();
        self
    }
}

/// Provider-specific configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub github: ProviderConfig,
    pub gitlab: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            github: ProviderConfig::new(DEFAULT_GITHUB_BASE_URL),
            gitlab: ProviderConfig::new(DEFAULT_GITLAB_BASE_URL),
        }
    }
}

/// Individual provider configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

//! Provider trait for looking up the latest tag of a hosted repository

use crate::version::checker::ProviderKind;
use crate::version::error::CheckError;
use crate::version::tag::has_update;

/// Trait for fetching tags from a git hosting service
#[async_trait::async_trait]
pub trait GitProvider: Send + Sync {
    /// Returns the provider this implementation talks to
    fn provider_kind(&self) -> ProviderKind;

    /// Fetches the tag list and returns the highest version-shaped tag
    ///
    /// # Arguments
    /// * `org` - Organization, group or owner (e.g., "mcengine")
    /// * `repo` - Repository name
    /// * `token` - Access token for private repositories, ignored when blank
    ///
    /// # Returns
    /// * `Ok(String)` - The winning tag exactly as published (e.g., "v2026.1.0")
    /// * `Err(CheckError)` - Transport failure, status >= 400, or no version tags
    async fn get_latest_tag(
        &self,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<String, CheckError>;

    /// Returns true if the remote repository has a tag newer than `current_version`
    async fn compare_version(
        &self,
        current_version: &str,
        org: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<bool, CheckError> {
        let latest = self.get_latest_tag(org, repo, token).await?;
        Ok(has_update(current_version, &latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Provider stub returning a fixed tag, so the provided `compare_version` runs
    struct FixedTagProvider {
        tag: &'static str,
    }

    #[async_trait::async_trait]
    impl GitProvider for FixedTagProvider {
        fn provider_kind(&self) -> ProviderKind {
            ProviderKind::GitHub
        }

        async fn get_latest_tag(
            &self,
            _org: &str,
            _repo: &str,
            _token: Option<&str>,
        ) -> Result<String, CheckError> {
            Ok(self.tag.to_string())
        }
    }

    #[rstest]
    #[case("2026.1.0-1", "v2026.1.0", true)]
    #[case("2026.1.0-1", "v2026.1.0-1", false)]
    #[case("v2026.1.0", "2026.1.0", false)]
    #[case("V2025.12.3", "2026.1.0-1", true)]
    #[case("2026.2.0", "v2026.1.0", false)]
    #[tokio::test]
    async fn compare_version_normalizes_both_sides(
        #[case] current: &str,
        #[case] latest: &'static str,
        #[case] expected: bool,
    ) {
        let provider = FixedTagProvider { tag: latest };

        let result = provider
            .compare_version(current, "mcengine", "mcutil", None)
            .await
            .unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn compare_version_propagates_fetch_errors() {
        struct FailingProvider;

        #[async_trait::async_trait]
        impl GitProvider for FailingProvider {
            fn provider_kind(&self) -> ProviderKind {
                ProviderKind::GitLab
            }

            async fn get_latest_tag(
                &self,
                org: &str,
                repo: &str,
                _token: Option<&str>,
            ) -> Result<String, CheckError> {
                Err(CheckError::NoTagsFound {
                    org: org.to_string(),
                    repo: repo.to_string(),
                })
            }
        }

        let result = FailingProvider
            .compare_version("2026.1.0", "group", "project", None)
            .await;

        assert!(matches!(result, Err(CheckError::NoTagsFound { .. })));
    }
}

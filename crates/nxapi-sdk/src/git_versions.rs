//! Git metadata: newest commits, releases, pull requests and artifacts.

use nxapi_models::{ArtifactInfo, CommitInfo, ModelError, PullInfo, ReleaseInfo};

use crate::client::NxApiClient;
use crate::error::SdkError;

/// Paging and filtering for [`NxApiClient::releases`].
///
/// Bounds are signed so that a negative value coming from user input is
/// reported as a validation error rather than silently wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseQuery {
    /// Include releases flagged as pre-releases.
    pub include_pre_releases: bool,
    /// Number of releases to skip.
    pub skip: Option<i64>,
    /// Maximum number of releases to return.
    pub take: Option<i64>,
}

impl NxApiClient {
    /// Head commit of `branch` (`GET /api/v1/git-versions/{user}/{repo}/branches/{branch}`).
    pub async fn newest_commit(
        &self,
        user: &str,
        repo: &str,
        branch: &str,
    ) -> Result<CommitInfo, SdkError> {
        let user = ModelError::require("user", user)?;
        let repo = ModelError::require("repo", repo)?;
        let branch = ModelError::require("branch", branch)?;
        let url = self.endpoint(&["api", "v1", "git-versions", user, repo, "branches", branch])?;
        self.http().get(url, None).await
    }

    /// Releases of `user/repo`, newest first.
    pub async fn releases(
        &self,
        user: &str,
        repo: &str,
        query: ReleaseQuery,
    ) -> Result<Vec<ReleaseInfo>, SdkError> {
        let user = ModelError::require("user", user)?;
        let repo = ModelError::require("repo", repo)?;
        let skip = ModelError::non_negative("skip", query.skip)?;
        let take = ModelError::non_negative("take", query.take)?;
        let url = self.endpoint_with_query(
            &["api", "v1", "git-versions", user, repo, "releases"],
            &[
                ("includePreReleases", Some(query.include_pre_releases.to_string())),
                ("skip", skip.map(|v| v.to_string())),
                ("take", take.map(|v| v.to_string())),
            ],
        )?;
        self.http().get(url, None).await
    }

    /// Open pull requests of `user/repo`.
    pub async fn pulls(&self, user: &str, repo: &str) -> Result<Vec<PullInfo>, SdkError> {
        let user = ModelError::require("user", user)?;
        let repo = ModelError::require("repo", repo)?;
        let url = self.endpoint(&["api", "v1", "git-versions", user, repo, "pulls"])?;
        self.http().get(url, None).await
    }

    /// Build artifact of pull request `pull`.
    pub async fn artifact(
        &self,
        user: &str,
        repo: &str,
        pull: &str,
    ) -> Result<ArtifactInfo, SdkError> {
        let user = ModelError::require("user", user)?;
        let repo = ModelError::require("repo", repo)?;
        let pull = ModelError::require("pull", pull)?;
        let url = self.endpoint(&["api", "v1", "git-versions", user, repo, "pulls", pull, "artifact"])?;
        self.http().get(url, None).await
    }
}

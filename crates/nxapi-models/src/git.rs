//! Git metadata served by the `git-versions` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Head commit of a branch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommitInfo {
    /// Full commit hash.
    pub sha: String,
    /// Abbreviated hash.
    pub short_sha: String,
    /// Commit time.
    pub timestamp: DateTime<Utc>,
}

/// A published release.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    /// Release title.
    pub name: String,
    /// Whether the release is flagged as a pre-release.
    #[serde(default)]
    pub is_pre_release: bool,
    /// Publication time.
    pub published_at: DateTime<Utc>,
    /// Release page.
    pub html_url: String,
    /// Release notes (markdown).
    pub body: String,
}

/// A label attached to a pull request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PullLabel {
    /// Label id.
    pub id: String,
    /// Label text.
    pub name: String,
    /// Hex colour without `#`.
    pub color: String,
}

/// An open pull request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PullInfo {
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Author login.
    pub author: String,
    /// Attached labels.
    #[serde(default)]
    pub labels: Vec<PullLabel>,
    /// Whether the pull request is a draft.
    pub is_draft: bool,
}

/// Build artifact of a pull request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactInfo {
    /// Download location.
    pub artifact_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn commit_timestamp_is_a_date() {
        let json = r#"{"sha":"0123456789abcdef","shortSha":"0123456","timestamp":"2024-05-04T10:00:00Z"}"#;
        let commit: CommitInfo = serde_json::from_str(json).unwrap();
        assert_eq!(
            commit.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 4, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn release_pre_release_defaults_false() {
        let json = r#"{"name":"v0.12.0","publishedAt":"2024-05-04T10:00:00.000Z","htmlUrl":"https://x","body":""}"#;
        let release: ReleaseInfo = serde_json::from_str(json).unwrap();
        assert!(!release.is_pre_release);
    }

    #[test]
    fn release_bad_date_is_rejected() {
        let json = r#"{"name":"v1","publishedAt":"not a date","htmlUrl":"https://x","body":""}"#;
        assert!(serde_json::from_str::<ReleaseInfo>(json).is_err());
    }

    #[test]
    fn pull_decodes_labels() {
        let json = r#"{"number":42,"title":"fix: things","author":"octocat",
            "labels":[{"id":"1","name":"QA","color":"ff0000"}],"isDraft":false}"#;
        let pull: PullInfo = serde_json::from_str(json).unwrap();
        assert_eq!(pull.labels.len(), 1);
        assert!(!pull.is_draft);
    }
}

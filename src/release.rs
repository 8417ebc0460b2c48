use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// A release as fetched from the release store. The body is the markdown
/// text subject to rewriting; releases created without notes have none.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub body: Option<String>,
}

/// Where release notes live. Injected into the run so tests can substitute
/// an in-memory store.
#[async_trait]
pub trait ReleaseStore: Send + Sync {
    async fn get_release(&self, release_id: u64) -> Result<Release>;
    async fn update_release(&self, release_id: u64, body: &str) -> Result<()>;
}

pub struct GitHubReleases {
    owner: String,
    repo: String,
    token: String,
    client: reqwest::Client,
}

impl GitHubReleases {
    pub fn new(owner: String, repo: String, token: String) -> Self {
        Self {
            owner,
            repo,
            token,
            client: reqwest::Client::new(),
        }
    }

    fn release_url(&self, release_id: u64) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/releases/{release_id}",
            self.owner, self.repo
        )
    }
}

#[async_trait]
impl ReleaseStore for GitHubReleases {
    async fn get_release(&self, release_id: u64) -> Result<Release> {
        let resp = self
            .client
            .get(self.release_url(release_id))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            // GitHub rejects requests without a User-Agent.
            .header("User-Agent", "ado-release-notes")
            .send()
            .await
            .context("Release fetch request failed")?;

        tracing::info!("Release response: {}", resp.status());

        if !resp.status().is_success() {
            anyhow::bail!("Release fetch returned {}", resp.status());
        }

        resp.json().await.context("Failed to parse release response")
    }

    async fn update_release(&self, release_id: u64, body: &str) -> Result<()> {
        let resp = self
            .client
            .patch(self.release_url(release_id))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "ado-release-notes")
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("Release update request failed")?;

        tracing::info!("Release update response: {}", resp.status());

        if !resp.status().is_success() {
            anyhow::bail!("Release update returned {}", resp.status());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_url_includes_owner_repo_and_id() {
        let store = GitHubReleases::new("octo".into(), "repo".into(), "token".into());
        assert_eq!(
            store.release_url(42),
            "https://api.github.com/repos/octo/repo/releases/42"
        );
    }

    #[test]
    fn release_body_is_optional() {
        let with_body: Release = serde_json::from_str(r#"{"id": 1, "body": "notes"}"#).unwrap();
        assert_eq!(with_body.body.as_deref(), Some("notes"));

        let without: Release = serde_json::from_str(r#"{"id": 1, "body": null}"#).unwrap();
        assert_eq!(without.body, None);
    }
}

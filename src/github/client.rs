//! GitHub REST client supplying the merged-PR corpus.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use super::remote::RepoId;
use crate::data::PrRecord;
use crate::error::{PrStyleError, Result};

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Timeout applied to every GitHub request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest page size the pulls listing accepts.
const MAX_PAGE_SIZE: usize = 100;

/// Source of merged pull request records.
pub trait PrSource: Send + Sync {
    /// Returns up to `count` merged PRs, most recently updated first.
    fn fetch_merged_prs<'a>(
        &'a self,
        repo: &'a RepoId,
        count: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PrRecord>>> + Send + 'a>>;

    /// Returns true if the repository is reachable with the configured credentials.
    fn verify_access<'a>(&'a self, repo: &'a RepoId)
        -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}

/// Pull request as returned by the listing endpoint.
#[derive(Deserialize)]
struct PullSummary {
    number: u64,
    title: String,
    body: Option<String>,
    merged_at: Option<DateTime<Utc>>,
    user: Option<User>,
    #[serde(default)]
    labels: Vec<Label>,
}

#[derive(Deserialize)]
struct User {
    login: String,
}

#[derive(Deserialize)]
struct Label {
    name: Option<String>,
}

/// Change statistics only present on the single-PR endpoint.
#[derive(Deserialize)]
struct PullDetails {
    additions: u64,
    deletions: u64,
    changed_files: u64,
}

/// GitHub REST API client.
pub struct GitHubClient {
    /// HTTP client for API requests.
    client: Client,
    /// Token sent as a bearer credential.
    token: String,
    /// API base URL without trailing slash.
    base_url: String,
}

impl GitHubClient {
    /// Creates a client for the public GitHub API.
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Creates a client for a custom API endpoint (GitHub Enterprise, tests).
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pr-style/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PrStyleError::Api(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| PrStyleError::Api(format!("Invalid API URL {raw}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "Sending GitHub API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| PrStyleError::Api(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error response body: {e}");
                String::new()
            });
            return Err(PrStyleError::Api(format!("HTTP {status}: {error_text}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PrStyleError::Api(format!("Invalid response format: {e}")))
    }

    async fn list_merged(&self, repo: &RepoId, count: usize) -> Result<Vec<PullSummary>> {
        let per_page = count.saturating_mul(2).min(MAX_PAGE_SIZE);
        let url = self.endpoint(
            &format!("repos/{}/{}/pulls", repo.owner, repo.repo),
            &[
                ("state", "closed".to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
                ("per_page", per_page.to_string()),
            ],
        )?;

        let pulls: Vec<PullSummary> = self.get_json(url).await?;
        let total = pulls.len();
        let merged: Vec<PullSummary> = pulls
            .into_iter()
            .filter(|pr| pr.merged_at.is_some())
            .take(count)
            .collect();

        info!(
            repository = %repo,
            closed = total,
            merged = merged.len(),
            "Listed closed pull requests"
        );
        Ok(merged)
    }

    /// Fetches change statistics, falling back to zeros when unavailable.
    async fn record_with_details(&self, repo: &RepoId, summary: PullSummary) -> PrRecord {
        let details = match self
            .endpoint(
                &format!("repos/{}/{}/pulls/{}", repo.owner, repo.repo, summary.number),
                &[],
            ) {
            Ok(url) => self.get_json::<PullDetails>(url).await,
            Err(e) => Err(e),
        };

        let (additions, deletions, changed_files) = match details {
            Ok(d) => (d.additions, d.deletions, d.changed_files),
            Err(e) => {
                warn!(
                    number = summary.number,
                    error = %e,
                    "Failed to fetch PR details, using zero statistics"
                );
                (0, 0, 0)
            }
        };

        PrRecord {
            number: summary.number,
            title: summary.title,
            body: summary.body.unwrap_or_default(),
            merged_at: summary.merged_at,
            author: summary
                .user
                .map_or_else(|| "unknown".to_string(), |u| u.login),
            labels: summary.labels.into_iter().filter_map(|l| l.name).collect(),
            additions,
            deletions,
            changed_files,
        }
    }
}

impl PrSource for GitHubClient {
    fn fetch_merged_prs<'a>(
        &'a self,
        repo: &'a RepoId,
        count: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PrRecord>>> + Send + 'a>> {
        Box::pin(async move {
            if count == 0 {
                return Ok(Vec::new());
            }

            let merged = self.list_merged(repo, count).await?;
            let records = join_all(
                merged
                    .into_iter()
                    .map(|summary| self.record_with_details(repo, summary)),
            )
            .await;

            Ok(records)
        })
    }

    fn verify_access<'a>(
        &'a self,
        repo: &'a RepoId,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            let url = match self.endpoint(&format!("repos/{}/{}", repo.owner, repo.repo), &[]) {
                Ok(url) => url,
                Err(_) => return false,
            };

            match self.get_json::<serde_json::Value>(url).await {
                Ok(_) => true,
                Err(e) => {
                    debug!(repository = %repo, error = %e, "Repository access check failed");
                    false
                }
            }
        })
    }
}

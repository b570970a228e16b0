use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::service::listing::ItemCollection;

pub mod parse;

pub use parse::{parse_items, ParseError};

/// Fixed repository search: Swift learning material, most-starred first.
pub const SEARCH_URL: &str =
    "https://api.github.com/search/repositories?q=learn+swift+language:swift&sort=stars&order=desc";

#[derive(Debug, thiserror::Error)]
pub enum SearchServiceError {
    #[error("failed to build client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search api status {0}")]
    Status(reqwest::StatusCode),
}

/// Where the raw search payload comes from.
///
/// `None` stands for any failure; callers do not tell failures apart.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self) -> Option<Vec<u8>>;
}

/// Fetches [`SEARCH_URL`] over HTTPS.
pub struct HttpPayloadSource {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpPayloadSource {
    pub fn new(config: &AppConfig) -> Result<Self, SearchServiceError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(15)) // 15 second timeout
            .build()
            .map_err(SearchServiceError::Client)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch the raw body, keeping the failure reason for logging.
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>, SearchServiceError> {
        self.fetch_from(SEARCH_URL).await
    }

    async fn fetch_from(&self, url: &str) -> Result<Vec<u8>, SearchServiceError> {
        info!("Requesting repository search");

        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = resp.status();
        debug!("Search API responded with status {}", status);
        if !status.is_success() {
            return Err(SearchServiceError::Status(status));
        }

        let body = resp.bytes().await?;
        Ok(body.to_vec())
    }

    async fn fetch_or_none(&self, url: &str) -> Option<Vec<u8>> {
        match self.fetch_from(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Repository search unavailable: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl PayloadSource for HttpPayloadSource {
    async fn fetch(&self) -> Option<Vec<u8>> {
        self.fetch_or_none(SEARCH_URL).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Payload parsed; `appended` may still be zero for an empty `items` array.
    Populated,
    /// The source produced no payload.
    Unavailable,
    /// The payload was not a JSON object with an `items` array.
    Malformed,
}

/// Summary of one orchestration pass, for the caller and logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub outcome: FetchOutcome,
    pub appended: usize,
    pub finished_at: DateTime<Utc>,
}

impl FetchReport {
    fn new(outcome: FetchOutcome, appended: usize) -> Self {
        Self {
            outcome,
            appended,
            finished_at: Utc::now(),
        }
    }
}

/// Fetches the search payload and appends its items to a collection.
pub struct FetchOrchestrator<S> {
    source: S,
}

impl<S: PayloadSource> FetchOrchestrator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run one fetch pass. Every failure leaves `items` exactly as it was.
    pub async fn run(&self, items: &mut ItemCollection) -> FetchReport {
        let Some(body) = self.source.fetch().await else {
            return FetchReport::new(FetchOutcome::Unavailable, 0);
        };

        let parsed = match parse_items(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                let preview = String::from_utf8_lossy(&body[..body.len().min(200)]);
                warn!("Ignoring search payload: {}; body preview: {}", e, preview);
                return FetchReport::new(FetchOutcome::Malformed, 0);
            }
        };

        let appended = parsed.len();
        items.extend(parsed);
        info!("Appended {} repositories ({} total)", appended, items.len());

        FetchReport::new(FetchOutcome::Populated, appended)
    }
}

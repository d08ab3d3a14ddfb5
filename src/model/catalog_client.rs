//! Character catalog API client
//!
//! Wraps the two read-only endpoints of the upstream catalog. Every request is
//! signed with a freshly generated `ts`/`apikey`/`hash` triple. There is no
//! retry: a transport error or non-2xx status is returned to the caller as is.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::Credentials;
use crate::config::Settings;
use crate::{log_api_request, log_api_result};

use super::character::{ApiResponse, Character, DataContainer};
use super::types::{SortKey, SortOrder};

pub const DEFAULT_LIMIT: u32 = 50;
/// Upstream rejects larger pages
pub const MAX_LIMIT: u32 = 100;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("marvel-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("catalog responded with {status}")]
    Status { status: StatusCode },
    #[error("invalid catalog response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Server-side ordering, rendered as `name`, `-name`, `modified`, `-modified`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderBy {
    pub key: SortKey,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn to_param(self) -> String {
        match self.order {
            SortOrder::Asc => self.key.field().to_string(),
            SortOrder::Desc => format!("-{}", self.key.field()),
        }
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::new(SortKey::Name, SortOrder::Asc)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListParams {
    pub name_starts_with: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<OrderBy>,
}

impl ListParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Query parameters sent alongside the signature
    fn query(&self) -> Vec<(&'static str, String)> {
        let limit = self
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        let mut query = vec![
            ("limit", limit.to_string()),
            ("offset", self.offset.unwrap_or(0).to_string()),
            ("orderBy", self.order_by.unwrap_or_default().to_param()),
        ];
        if let Some(prefix) = self.name_starts_with.as_deref().filter(|p| !p.is_empty()) {
            query.push(("nameStartsWith", prefix.to_string()));
        }
        query
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<Credentials>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("public_key", &self.credentials.public_key())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    pub fn new(settings: &Settings) -> Result<Self, CatalogError> {
        Self::with_timeout(
            &settings.base_url,
            settings.credentials(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn with_timeout(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Network)?;

        tracing::debug!(base_url, "Catalog HTTP client built");

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: Arc::new(credentials),
        })
    }

    pub async fn list_characters(&self, params: &ListParams) -> Result<DataContainer, CatalogError> {
        let query = params.query();
        log_api_request!("list_characters", query = ?query);

        let url = format!("{}/characters", self.base_url);
        let result = self.get(&url, &query).await.map(|r| r.data);
        log_api_result!("list_characters", result);

        if let Ok(ref page) = result {
            tracing::debug!(count = page.results.len(), total = page.total, "Characters page received");
        }
        result
    }

    /// Fetch one character; `Ok(None)` when the catalog has no such id
    pub async fn get_character_by_id(&self, id: u64) -> Result<Option<Character>, CatalogError> {
        log_api_request!("get_character_by_id", id);

        let url = format!("{}/characters/{}", self.base_url, id);
        let result = match self.get(&url, &[]).await {
            Ok(response) => Ok(response.data.results.into_iter().next()),
            Err(CatalogError::Status { status }) if status == StatusCode::NOT_FOUND => Ok(None),
            Err(e) => Err(e),
        };
        log_api_result!("get_character_by_id", result);
        result
    }

    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<ApiResponse, CatalogError> {
        // Signed per call; a timestamp is never reused
        let auth = self.credentials.sign();

        let response = self
            .http
            .get(url)
            .query(&auth.as_query())
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let body = response.text().await.map_err(CatalogError::Network)?;
        serde_json::from_str(&body).map_err(CatalogError::Decode)
    }
}

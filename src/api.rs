//! Fact Check Tools API client and the paginated-fetch primitive.
//!
//! This module wraps the Google Fact Check Tools `claims:search` endpoint.
//! All tunables that were effectively global in earlier prototypes (endpoint,
//! API key, language code, page size) live in an explicit [`ClientConfig`]
//! handed to [`FactCheckClient`] at construction.
//!
//! # Pagination
//!
//! The endpoint is cursor-based: each response carries an optional opaque
//! `nextPageToken`, which the next request echoes back as `pageToken`.
//! [`FactCheckClient::claims`] walks that protocol lazily as a
//! `futures::Stream` of claim records. Termination conditions:
//!
//! - the first page has no records (empty stream, no diagnostic)
//! - a page carries no continuation token (normal exhaustion)
//! - a subsequent page has no records (logged as "no more claims")
//!
//! There is deliberately no retry, backoff, or timeout handling: a transport
//! failure, a non-2xx status, or malformed JSON ends the sweep with a fatal
//! error. Each call to [`FactCheckClient::claims`] starts a fresh query from
//! page one; the stream is not restartable mid-walk.

use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{FactCheckError, Result};
use crate::models::{ClaimsPage, RawClaim};

/// The production `claims:search` endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";

const LANGUAGE_CODE: &str = "EN";
const PAGE_SIZE: u32 = 25;

/// Configuration for [`FactCheckClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub language_code: String,
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            api_key: api_key.into(),
            language_code: LANGUAGE_CODE.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    /// Point the client at a different endpoint (tests use this).
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Filter criteria for a claim search: a free-text topic query or a
/// publisher-site restriction. The endpoint treats these as distinct
/// parameters.
#[derive(Debug, Clone)]
pub enum ClaimFilter {
    Query(String),
    PublisherSite(String),
}

/// One claim search: filter plus freshness window in days.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub filter: ClaimFilter,
    pub max_age_days: u32,
}

impl SearchParams {
    pub fn topic(query: impl Into<String>, max_age_days: u32) -> Self {
        Self {
            filter: ClaimFilter::Query(query.into()),
            max_age_days,
        }
    }

    pub fn publisher_site(site: impl Into<String>, max_age_days: u32) -> Self {
        Self {
            filter: ClaimFilter::PublisherSite(site.into()),
            max_age_days,
        }
    }
}

/// Where the page walk currently stands.
enum Cursor {
    First,
    Next(String),
    Done,
}

pub struct FactCheckClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FactCheckClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Lazily walk every page of a claim search, yielding raw claim records
    /// in page-arrival order, then within-page order.
    pub fn claims(&self, params: SearchParams) -> impl Stream<Item = Result<RawClaim>> + '_ {
        stream::try_unfold((params, Cursor::First), move |(params, cursor)| async move {
            let token = match cursor {
                Cursor::First => None,
                Cursor::Next(token) => Some(token),
                Cursor::Done => return Ok::<_, FactCheckError>(None),
            };
            let page = self.fetch_page(&params, token.as_deref()).await?;

            let next_page_token = page.next_page_token.clone();
            let records = page.into_claims();
            if records.is_empty() {
                // An empty page past the first one is normal exhaustion,
                // not an error.
                if token.is_some() {
                    info!("no more claims");
                }
                return Ok(None);
            }
            debug!(count = records.len(), "Fetched claims page");

            let next = match next_page_token {
                Some(token) => Cursor::Next(token),
                None => Cursor::Done,
            };
            let records = stream::iter(records.into_iter().map(Ok::<RawClaim, FactCheckError>));
            Ok(Some((records, (params, next))))
        })
        .try_flatten()
    }

    /// Fetch one page, with or without a continuation token.
    #[instrument(level = "debug", skip_all, fields(has_token = page_token.is_some()))]
    async fn fetch_page(
        &self,
        params: &SearchParams,
        page_token: Option<&str>,
    ) -> Result<ClaimsPage> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(6);
        match &params.filter {
            ClaimFilter::Query(q) => query.push(("query", q.clone())),
            ClaimFilter::PublisherSite(site) => {
                query.push(("reviewPublisherSiteFilter", site.clone()))
            }
        }
        query.push(("maxAgeDays", params.max_age_days.to_string()));
        query.push(("pageSize", self.config.page_size.to_string()));
        query.push(("languageCode", self.config.language_code.clone()));
        // The API wants the key in the query string, not in a header.
        query.push(("key", self.config.api_key.clone()));
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let resp = self
            .http
            .get(self.config.endpoint.clone())
            .query(&query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(FactCheckError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let page: ClaimsPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}

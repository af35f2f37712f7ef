//! Data models for fact-check claims and their normalized representations.
//!
//! This module defines the structures used throughout the application:
//! - [`ClaimsPage`]: one page of the remote search response
//! - [`RawClaim`] / [`ClaimReview`] / [`Publisher`]: upstream records, read-only
//! - [`Sighting`]: a normalized (claim, review) pairing for export
//!
//! The wire format uses camelCase field names (`claimDate`, `nextPageToken`),
//! hence the `rename_all` attributes. Upstream fields that may be absent are
//! modeled as `Option`; the accessors below convert absence of a *required*
//! field into [`FactCheckError::MissingField`] so the failure propagates
//! instead of panicking.

use serde::{Deserialize, Serialize};

use crate::error::{FactCheckError, Result};
use crate::utils::sha256_hex;

/// One page of the `claims:search` response.
///
/// The API returns `claims` as a list, `null`, or omits it entirely when a
/// page is empty; `nextPageToken` is present only while more pages exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsPage {
    #[serde(default)]
    pub claims: Option<Vec<RawClaim>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ClaimsPage {
    /// Take this page's claims, treating `null`/absent as empty.
    pub fn into_claims(self) -> Vec<RawClaim> {
        self.claims.unwrap_or_default()
    }
}

/// An assertion made by some entity (claimant) on some date, as returned by
/// the search endpoint. Carries one or more reviews; only the first is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClaim {
    pub text: Option<String>,
    pub claimant: Option<String>,
    pub claim_date: Option<String>,
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

impl RawClaim {
    /// The first review entry. A claim with no reviews is a schema violation
    /// upstream and fatal here.
    pub fn first_review(&self) -> Result<&ClaimReview> {
        self.claim_review
            .first()
            .ok_or(FactCheckError::MissingField("claimReview"))
    }
}

/// A fact-checker's published assessment of a claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    pub publisher: Option<Publisher>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub review_date: Option<String>,
    pub textual_rating: Option<String>,
}

impl ClaimReview {
    pub fn publisher(&self) -> Result<&Publisher> {
        self.publisher
            .as_ref()
            .ok_or(FactCheckError::MissingField("claimReview.publisher"))
    }
}

/// The organization that authored a claim review.
#[derive(Debug, Clone, Deserialize)]
pub struct Publisher {
    pub name: Option<String>,
    pub site: Option<String>,
}

impl Publisher {
    /// Display name: `name`, falling back to `site`, falling back to "na".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.site.as_deref())
            .unwrap_or("na")
    }

    /// The site domain, required for publisher identity.
    pub fn site(&self) -> Result<&str> {
        self.site
            .as_deref()
            .ok_or(FactCheckError::MissingField("publisher.site"))
    }
}

/// One observed (claim, review) pairing, flattened for export.
///
/// `claim_id` is a SHA-256 hex digest over the publisher display name, the
/// review URL, and the review date (or empty string), single-space joined.
/// The upstream API assigns no claim ids, so identity is content-derived:
/// identical inputs always produce the same id, and a repeated
/// (publisher, url, date) triple produces a repeated id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sighting {
    pub claim_id: String,
    pub claim_org: String,
    pub claim_text: String,
    pub claim_conclusion: Option<String>,
    pub claim_url: String,
    pub text: String,
    pub publication: Option<String>,
    pub publication_date: Option<String>,
}

impl Sighting {
    /// Build a sighting from a raw claim's first review.
    ///
    /// # Errors
    ///
    /// Returns [`FactCheckError::MissingField`] when the review list, the
    /// publisher, the review URL, the review title, or the claim text is
    /// absent.
    pub fn from_claim(claim: &RawClaim) -> Result<Self> {
        let review = claim.first_review()?;
        let publisher = review.publisher()?;

        let claim_org = publisher.display_name().to_string();
        let claim_url = review
            .url
            .clone()
            .ok_or(FactCheckError::MissingField("claimReview.url"))?;
        let claim_text = review
            .title
            .clone()
            .ok_or(FactCheckError::MissingField("claimReview.title"))?;
        let text = claim
            .text
            .clone()
            .ok_or(FactCheckError::MissingField("claim.text"))?;

        let claim_id = sha256_hex(&[
            &claim_org,
            &claim_url,
            review.review_date.as_deref().unwrap_or(""),
        ]);

        Ok(Self {
            claim_id,
            claim_org,
            claim_text,
            claim_conclusion: review.textual_rating.clone(),
            claim_url,
            text,
            publication: claim.claimant.clone(),
            publication_date: claim.claim_date.clone(),
        })
    }

    /// Key for the aggregate mapping: SHA-256 hex over (text, claim_text),
    /// single-space joined. Two sightings with the same pair collide and the
    /// later-processed one wins.
    pub fn dedup_key(&self) -> String {
        sha256_hex(&[&self.text, &self.claim_text])
    }
}

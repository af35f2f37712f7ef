//! Publisher discovery across topic queries.
//!
//! For each topic, drain the claim stream and collect the site domain of the
//! first review's publisher. The sites accumulate in a `BTreeSet`, so the
//! union is deduplicated and downstream iteration is sorted, making the
//! whole sweep reproducible run to run.

use std::collections::BTreeSet;

use futures::{TryStreamExt, pin_mut};
use tracing::{info, instrument};

use crate::api::{FactCheckClient, SearchParams};
use crate::error::Result;

/// Topic queries for the standard discovery sweep.
pub const TOPIC_QUERIES: [&str; 6] = [
    "vaccine",
    "congress",
    "covid",
    "climate",
    "facebook",
    "twitter",
];

/// Collect the distinct publisher sites that reviewed claims matching one
/// topic query within the freshness window.
///
/// A claim whose first review carries no publisher or no site is a fatal
/// [`MissingField`](crate::error::FactCheckError::MissingField) error, not a
/// skip.
#[instrument(level = "info", skip(client))]
pub async fn find_publishers(
    client: &FactCheckClient,
    query: &str,
    max_age_days: u32,
) -> Result<BTreeSet<String>> {
    let claims = client.claims(SearchParams::topic(query, max_age_days));
    pin_mut!(claims);

    let mut publishers = BTreeSet::new();
    while let Some(claim) = claims.try_next().await? {
        let site = claim.first_review()?.publisher()?.site()?;
        publishers.insert(site.to_string());
    }

    info!(query, count = publishers.len(), "Indexed publishers for query");
    Ok(publishers)
}

/// Union publisher sites across many topic queries, sequentially.
///
/// Logs the running total after each query for progress tracking.
#[instrument(level = "info", skip_all)]
pub async fn discover_publishers(
    client: &FactCheckClient,
    queries: &[&str],
    max_age_days: u32,
) -> Result<BTreeSet<String>> {
    let mut all_publishers = BTreeSet::new();
    for query in queries {
        let publishers = find_publishers(client, query, max_age_days).await?;
        all_publishers.extend(publishers);
        info!(
            query,
            total = all_publishers.len(),
            "Publisher discovery progress"
        );
    }
    Ok(all_publishers)
}

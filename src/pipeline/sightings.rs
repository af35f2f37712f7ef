//! Sighting extraction and aggregation.
//!
//! [`publisher_sightings`] turns one publisher's recent reviews into an
//! ordered list of [`Sighting`] records; duplicates across pages survive this
//! stage. [`collect_sightings`] sweeps a whole publisher set and merges
//! everything into one mapping keyed by the (text, claim_text) digest, where
//! the later-processed sighting silently wins a collision. The publisher set
//! is sorted, so "later" is well-defined and the output is reproducible.

use std::collections::{BTreeMap, BTreeSet};

use futures::{TryStreamExt, pin_mut};
use tracing::{info, instrument};

use crate::api::{FactCheckClient, SearchParams};
use crate::error::Result;
use crate::models::Sighting;

/// All sightings from a single publisher within the freshness window, in
/// page-arrival order. Not deduplicated.
#[instrument(level = "info", skip(client))]
pub async fn publisher_sightings(
    client: &FactCheckClient,
    publisher_site: &str,
    max_age_days: u32,
) -> Result<Vec<Sighting>> {
    let claims = client.claims(SearchParams::publisher_site(publisher_site, max_age_days));
    pin_mut!(claims);

    let mut sightings = Vec::new();
    while let Some(claim) = claims.try_next().await? {
        sightings.push(Sighting::from_claim(&claim)?);
    }
    Ok(sightings)
}

/// Merge a batch of sightings into the aggregate mapping. Later entries
/// overwrite earlier ones under the same (text, claim_text) key.
pub fn merge_sightings(aggregate: &mut BTreeMap<String, Sighting>, sightings: Vec<Sighting>) {
    for sighting in sightings {
        aggregate.insert(sighting.dedup_key(), sighting);
    }
}

/// Sweep every publisher in the set sequentially (sorted order) and merge
/// all sightings into one deduplicated mapping.
///
/// Logs a per-publisher count as it goes and a site → count summary at the
/// end. Returns the mapping; persistence is the caller's concern.
#[instrument(level = "info", skip_all, fields(publishers = publishers.len()))]
pub async fn collect_sightings(
    client: &FactCheckClient,
    publishers: &BTreeSet<String>,
    max_age_days: u32,
) -> Result<BTreeMap<String, Sighting>> {
    let mut aggregate = BTreeMap::new();
    let mut site_counts: BTreeMap<String, usize> = BTreeMap::new();

    for site in publishers {
        let sightings = publisher_sightings(client, site, max_age_days).await?;
        info!(
            count = sightings.len(),
            publisher = %site,
            "Got claim-sentence pairs"
        );
        site_counts.insert(site.clone(), sightings.len());
        merge_sightings(&mut aggregate, sightings);
    }

    info!(?site_counts, total = aggregate.len(), "Sighting sweep complete");
    Ok(aggregate)
}

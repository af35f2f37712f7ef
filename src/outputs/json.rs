//! JSON artifact writing.
//!
//! The whole run produces exactly one artifact: a JSON object mapping
//! content-digest keys to sighting records. The file is written in one shot
//! and overwrites any previous run's output; there is no partial-write
//! recovery.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::Sighting;

/// Serialize the aggregate mapping and write it to `output_path`,
/// creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %output_path))]
pub async fn write_sightings(
    sightings: &BTreeMap<String, Sighting>,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(sightings)?;

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent).await {
                error!(path = %parent.display(), error = %e, "Failed to create output dir");
                return Err(e.into());
            }
        }
    }

    info!(path = %output_path, "Writing sightings JSON");
    fs::write(output_path, json).await?;
    info!(
        path = %output_path,
        count = sightings.len(),
        "Wrote sightings artifact"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> BTreeMap<String, Sighting> {
        let sighting = Sighting {
            claim_id: "deadbeef".to_string(),
            claim_org: "FactOrg".to_string(),
            claim_text: "Claim: X causes Y".to_string(),
            claim_conclusion: Some("False".to_string()),
            claim_url: "http://x/1".to_string(),
            text: "X causes Y".to_string(),
            publication: Some("A".to_string()),
            publication_date: Some("2021-01-01".to_string()),
        };
        BTreeMap::from([(sighting.dedup_key(), sighting)])
    }

    #[tokio::test]
    async fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fce_sightings.json");
        let mapping = sample_mapping();

        write_sightings(&mapping, path.to_str().unwrap())
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: BTreeMap<String, Sighting> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.len(), 1);
        let (key, sighting) = back.iter().next().unwrap();
        assert_eq!(key, &sighting.dedup_key());
        assert_eq!(sighting.claim_org, "FactOrg");
    }

    #[tokio::test]
    async fn test_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fce_sightings.json");
        std::fs::write(&path, "stale content").unwrap();

        write_sightings(&sample_mapping(), path.to_str().unwrap())
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('{'));
        assert!(!raw.contains("stale"));
    }

    #[tokio::test]
    async fn test_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep/nested/out.json");

        write_sightings(&sample_mapping(), path.to_str().unwrap())
            .await
            .unwrap();
        assert!(path.exists());
    }
}

//! Helpers for content digests and output-path validation.

use sha2::{Digest, Sha256};
use std::error::Error;
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// SHA-256 hex digest over the given parts joined by single spaces.
///
/// This is the identity construction used for both `claim_id`
/// (publisher, url, date) and the aggregate dedup key (text, claim_text).
pub fn sha256_hex(parts: &[&str]) -> String {
    hex::encode(Sha256::digest(parts.join(" ").as_bytes()))
}

/// Ensure the parent directory of an output file exists and is writable.
///
/// Creates the directory if needed, then performs a write test by creating
/// and immediately deleting a probe file. Run at startup so a bad output
/// path fails before any network traffic.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_parent_writable(path: &str) -> Result<(), Box<dyn Error>> {
    let parent = match Path::new(path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if let Err(e) = fs::create_dir_all(&parent).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = parent.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output location is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_vector() {
        // sha256("hello world")
        assert_eq!(
            sha256_hex(&["hello", "world"]),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_sha256_hex_single_space_join() {
        // Joining is not concatenation: ["a b", "c"] and ["a", "b c"] both
        // digest "a b c".
        assert_eq!(sha256_hex(&["a b", "c"]), sha256_hex(&["a", "b c"]));
        assert_ne!(sha256_hex(&["ab", "c"]), sha256_hex(&["a", "bc"]));
    }

    #[test]
    fn test_sha256_hex_shape() {
        let digest = sha256_hex(&["anything"]);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[tokio::test]
    async fn test_ensure_parent_writable_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        ensure_parent_writable(path.to_str().unwrap()).await.unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn test_ensure_parent_writable_bare_filename() {
        ensure_parent_writable("bare_filename.json").await.unwrap();
    }
}

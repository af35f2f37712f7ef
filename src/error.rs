//! Error types for the fact-check sweep.
//!
//! Every failure is fatal by policy: transport errors, non-2xx responses,
//! malformed JSON, and absent expected fields all propagate to the caller
//! untouched. The only condition handled anywhere is an empty results page,
//! which is normal pagination termination and never reaches this module.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactCheckError>;

#[derive(Debug, Error)]
pub enum FactCheckError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field the upstream schema is expected to carry was absent.
    /// Named by its wire path, e.g. `claimReview.url`.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

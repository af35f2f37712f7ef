//! Output generation for the sightings artifact.
//!
//! One submodule for now:
//!
//! - [`json`]: writes the aggregate mapping to a single JSON file,
//!   overwritten wholesale on each run

pub mod json;

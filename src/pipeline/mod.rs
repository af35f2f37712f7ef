//! The sweep pipeline over the paginated-fetch primitive.
//!
//! Two stages, run sequentially:
//!
//! 1. [`publishers`]: discover which fact-checking organizations have
//!    published claims for a set of topic queries
//! 2. [`sightings`]: pull each discovered publisher's recent reviews,
//!    normalize them into sighting records, and merge them into one
//!    digest-keyed mapping

pub mod publishers;
pub mod sightings;

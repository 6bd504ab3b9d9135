//! Search and directory core for an Australian real-estate marketplace.
//!
//! The crate is organised around two halves:
//!
//! - [`directory`] holds the entity model (properties, agencies, agents,
//!   service and tool providers), the repository abstraction that stands in
//!   for the future API backend, and the registration/approval, review, and
//!   session flows built on top of it.
//! - [`search`] holds the location-aware search engine: the suburb gazetteer,
//!   the radius expander, the per-entity predicate filters, and the façade
//!   that ties them to a repository.

pub mod config;
pub mod directory;
pub mod error;
pub mod search;
pub mod telemetry;

//! Location-aware search over the directory.
//!
//! Data flow: caller input becomes a per-entity filter set; the distance
//! expander resolves location terms against the suburb [`gazetteer`] when
//! "include surrounding" is set; the predicate filters apply every facet with
//! AND over the visible candidate set. All of it is pure, synchronous,
//! in-memory work; the only error path a caller has to handle is the store
//! lookup itself.

pub mod filters;
pub mod gazetteer;
pub mod geo;
pub mod professionals;
pub mod properties;
pub mod providers;
pub mod service;

#[cfg(test)]
mod tests;

pub use gazetteer::{Gazetteer, GazetteerError, SuburbRecord};
pub use geo::{expand, haversine_km};
pub use professionals::{filter_agencies, filter_agents, AgencyFilters, AgentFilters};
pub use properties::{filter_properties, PropertyFilters};
pub use providers::{
    filter_service_providers, filter_tool_providers, ServiceFilters, ToolFilters,
};
pub use service::SearchService;

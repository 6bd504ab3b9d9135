use serde::{Deserialize, Serialize};

use crate::directory::domain::{ServiceCategory, ServiceProvider, ToolCategory, ToolProvider};

use super::filters::{location_matches, CandidateLocation, DEFAULT_RADIUS_KM};
use super::gazetteer::Gazetteer;

/// Criteria for a service-provider search. Selected categories combine with
/// AND: the provider must offer every one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceFilters {
    #[serde(default)]
    pub categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub include_surrounding: bool,
    /// Expansion radius; unset means the caller's configured default.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Criteria for a tool-provider search. Tool providers carry exactly one
/// category, so this is an exact-match facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolFilters {
    #[serde(default)]
    pub category: Option<ToolCategory>,
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub include_surrounding: bool,
    /// Expansion radius; unset means the caller's configured default.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Filter service providers: approved only, category containment, then the
/// location facet over every declared service area (any area may match).
pub fn filter_service_providers(
    candidates: &[ServiceProvider],
    filters: &ServiceFilters,
    gazetteer: &Gazetteer,
) -> Vec<ServiceProvider> {
    let radius_km = filters.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    candidates
        .iter()
        .filter(|p| p.status.is_visible())
        .filter(|p| {
            filters
                .categories
                .iter()
                .all(|wanted| p.categories.contains(wanted))
        })
        .filter(|p| {
            let areas: Vec<CandidateLocation<'_>> = p
                .service_areas
                .iter()
                .map(|area| CandidateLocation {
                    suburb: &area.suburb,
                    postcode: &area.postcode,
                    full_text: None,
                })
                .collect();
            location_matches(
                &areas,
                &filters.query_text,
                filters.include_surrounding,
                radius_km,
                gazetteer,
            )
        })
        .cloned()
        .collect()
}

/// Filter tool providers: approved only, exact category, then the location
/// facet over every declared coverage area.
pub fn filter_tool_providers(
    candidates: &[ToolProvider],
    filters: &ToolFilters,
    gazetteer: &Gazetteer,
) -> Vec<ToolProvider> {
    let radius_km = filters.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    candidates
        .iter()
        .filter(|p| p.status.is_visible())
        .filter(|p| {
            filters
                .category
                .map_or(true, |wanted| p.tool_category == wanted)
        })
        .filter(|p| {
            let areas: Vec<CandidateLocation<'_>> = p
                .coverage_areas
                .iter()
                .map(|area| CandidateLocation {
                    suburb: &area.suburb,
                    postcode: &area.postcode,
                    full_text: None,
                })
                .collect();
            location_matches(
                &areas,
                &filters.query_text,
                filters.include_surrounding,
                radius_km,
                gazetteer,
            )
        })
        .cloned()
        .collect()
}

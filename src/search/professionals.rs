use serde::{Deserialize, Serialize};

use crate::directory::domain::{AgencyProfile, AgentProfile, AgentType, Classification};

use super::filters::{location_matches, CandidateLocation, DEFAULT_RADIUS_KM};
use super::gazetteer::Gazetteer;

/// Criteria for an agency search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyFilters {
    #[serde(default)]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub include_surrounding: bool,
    /// Expansion radius; unset means the caller's configured default.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Criteria for an agent search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentFilters {
    #[serde(default)]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub agent_type: Option<AgentType>,
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub include_surrounding: bool,
    /// Expansion radius; unset means the caller's configured default.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Filter agencies: approved profiles only, then classification and location
/// facets. Pure; the façade shuffles the output for display fairness.
pub fn filter_agencies(
    candidates: &[AgencyProfile],
    filters: &AgencyFilters,
    gazetteer: &Gazetteer,
) -> Vec<AgencyProfile> {
    let radius_km = filters.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    candidates
        .iter()
        .filter(|a| a.status.is_visible())
        .filter(|a| {
            filters
                .classification
                .map_or(true, |wanted| a.classification == wanted)
        })
        .filter(|a| {
            let full_text = format!(
                "{} {} {} {}",
                a.street_address,
                a.suburb,
                a.postcode,
                a.state.label()
            );
            let location = CandidateLocation {
                suburb: &a.suburb,
                postcode: &a.postcode,
                full_text: Some(full_text),
            };
            location_matches(
                &[location],
                &filters.query_text,
                filters.include_surrounding,
                radius_km,
                gazetteer,
            )
        })
        .cloned()
        .collect()
}

/// Filter agents: approved profiles only, then classification, agent type,
/// and location facets.
pub fn filter_agents(
    candidates: &[AgentProfile],
    filters: &AgentFilters,
    gazetteer: &Gazetteer,
) -> Vec<AgentProfile> {
    let radius_km = filters.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    candidates
        .iter()
        .filter(|a| a.status.is_visible())
        .filter(|a| {
            filters
                .classification
                .map_or(true, |wanted| a.classification == wanted)
        })
        .filter(|a| {
            filters
                .agent_type
                .map_or(true, |wanted| a.agent_type == wanted)
        })
        .filter(|a| {
            let full_text = format!("{} {}", a.suburb, a.postcode);
            let location = CandidateLocation {
                suburb: &a.suburb,
                postcode: &a.postcode,
                full_text: Some(full_text),
            };
            location_matches(
                &[location],
                &filters.query_text,
                filters.include_surrounding,
                radius_km,
                gazetteer,
            )
        })
        .cloned()
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::directory::domain::{Intent, Property, Segment};

use super::filters::{
    features_match, keyword_matches, location_matches, parse_amount, CandidateLocation,
    DEFAULT_RADIUS_KM,
};
use super::gazetteer::Gazetteer;

/// User-chosen criteria for one property search. Numeric fields stay as the
/// raw text the form submitted; parsing failures mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilters {
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub include_surrounding: bool,
    /// Expansion radius; unset means the caller's configured default.
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub segment: Option<Segment>,
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Exact property type; `None` or `"Any"` matches everything.
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub price_min: String,
    #[serde(default)]
    pub price_max: String,
    #[serde(default)]
    pub only_with_price: bool,
    /// "At least N" criteria, free-form text.
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub bathrooms: String,
    #[serde(default)]
    pub car_spaces: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub feature_keywords: Vec<String>,
}

fn property_type_matches(property: &Property, criterion: Option<&str>) -> bool {
    match criterion {
        None => true,
        Some(wanted) if wanted.eq_ignore_ascii_case("any") => true,
        Some(wanted) => property.property_type == wanted,
    }
}

fn at_least(candidate: Option<u8>, criterion: Option<f64>) -> bool {
    match criterion {
        None => true,
        // A missing candidate value counts as 0 for "at least N" checks.
        Some(min) => f64::from(candidate.unwrap_or(0)) >= min,
    }
}

fn price_matches(property: &Property, filters: &PropertyFilters) -> bool {
    if filters.only_with_price && property.price.is_none() {
        return false;
    }
    let min = parse_amount(&filters.price_min);
    let max = parse_amount(&filters.price_max);
    // A candidate without a price passes any range unless only_with_price
    // already dropped it.
    let Some(price) = property.price else {
        return true;
    };
    let price = price as f64;
    if min.is_some_and(|min| price < min) {
        return false;
    }
    if max.is_some_and(|max| price > max) {
        return false;
    }
    true
}

/// Apply a [`PropertyFilters`] set over the candidate list. Unpublished
/// listings are dropped before any facet runs; the remaining facets combine
/// with AND. Pure: same inputs, same output, input order preserved.
pub fn filter_properties(
    candidates: &[Property],
    filters: &PropertyFilters,
    gazetteer: &Gazetteer,
) -> Vec<Property> {
    let radius_km = filters.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    let bedrooms = parse_amount(&filters.bedrooms);
    let bathrooms = parse_amount(&filters.bathrooms);
    let car_spaces = parse_amount(&filters.car_spaces);

    candidates
        .iter()
        .filter(|p| p.published)
        .filter(|p| filters.segment.map_or(true, |segment| p.segment == segment))
        .filter(|p| filters.intent.map_or(true, |intent| p.intent == intent))
        .filter(|p| property_type_matches(p, filters.property_type.as_deref()))
        .filter(|p| {
            let location = CandidateLocation {
                suburb: &p.address.suburb,
                postcode: &p.address.postcode,
                full_text: Some(p.address.full_text()),
            };
            location_matches(
                &[location],
                &filters.query_text,
                filters.include_surrounding,
                radius_km,
                gazetteer,
            )
        })
        .filter(|p| price_matches(p, filters))
        .filter(|p| at_least(p.bedrooms, bedrooms))
        .filter(|p| at_least(p.bathrooms, bathrooms))
        .filter(|p| at_least(p.car_spaces, car_spaces))
        .filter(|p| {
            let state = p.address.state.map(|s| s.label()).unwrap_or_default();
            let description = p.description.as_deref().unwrap_or_default();
            let mut parts = vec![
                p.property_type.as_str(),
                description,
                p.address.suburb.as_str(),
                p.address.postcode.as_str(),
                state,
            ];
            parts.extend(p.features.iter().map(String::as_str));
            keyword_matches(&parts, &filters.keyword)
        })
        .filter(|p| features_match(&p.features, &filters.feature_keywords))
        .cloned()
        .collect()
}

//! Facet predicates shared by every entity search.
//!
//! All predicates are permissive on malformed input: an empty or unparseable
//! criterion means "no constraint", and an unknown location degrades to
//! literal text matching inside [`location_matches`]. Note the deliberate
//! asymmetry carried over from the product: selected feature tags combine
//! with AND, while the keyword facet is a single substring probe.

use super::gazetteer::Gazetteer;
use super::geo;

/// Radius applied when a caller enables "include surrounding" without giving
/// one and the façade has no configured default to fill in.
pub(crate) const DEFAULT_RADIUS_KM: f64 = 10.0;

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Parse a free-form numeric criterion. Empty or non-numeric input yields
/// `None`, i.e. no constraint.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Case-insensitive substring match over the concatenation of a candidate's
/// textual fields. An empty keyword matches everything.
pub(crate) fn keyword_matches(parts: &[&str], keyword: &str) -> bool {
    let needle = normalize(keyword);
    if needle.is_empty() {
        return true;
    }
    normalize(&parts.join(" ")).contains(&needle)
}

/// Set-containment facet: the candidate must carry every selected tag.
pub(crate) fn features_match(candidate: &[String], selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let owned: std::collections::HashSet<String> =
        candidate.iter().map(|f| normalize(f)).collect();
    selected.iter().all(|f| owned.contains(&normalize(f)))
}

/// One location a candidate can be matched at. Providers expose one per
/// declared service/coverage area; other entities expose exactly one.
pub(crate) struct CandidateLocation<'a> {
    pub suburb: &'a str,
    pub postcode: &'a str,
    /// Full formatted address text, where the entity has one.
    pub full_text: Option<String>,
}

/// Location facet over one or more candidate locations (any may match).
///
/// Without `include_surrounding`: suburb substring, exact postcode, or
/// address-text substring. With it: membership of the expanded surrounding
/// set, or exact postcode against the raw query.
pub(crate) fn location_matches(
    locations: &[CandidateLocation<'_>],
    query_text: &str,
    include_surrounding: bool,
    radius_km: f64,
    gazetteer: &Gazetteer,
) -> bool {
    let query = query_text.trim();
    if query.is_empty() {
        return true;
    }

    if include_surrounding {
        let nearby: std::collections::HashSet<String> = geo::expand(gazetteer, query, radius_km)
            .into_iter()
            .map(|suburb| normalize(&suburb))
            .collect();
        return locations.iter().any(|location| {
            nearby.contains(&normalize(location.suburb)) || location.postcode.trim() == query
        });
    }

    let needle = normalize(query);
    locations.iter().any(|location| {
        normalize(location.suburb).contains(&needle)
            || location.postcode.trim() == query
            || location
                .full_text
                .as_deref()
                .is_some_and(|text| normalize(text).contains(&needle))
    })
}

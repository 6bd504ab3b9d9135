//! Great-circle distance and surrounding-suburb expansion.

use std::collections::BTreeSet;

use super::gazetteer::Gazetteer;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two decimal-degree coordinates.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let x = (d_lat / 2.0).sin().powi(2)
        + (d_lng / 2.0).sin().powi(2) * lat1.to_radians().cos() * lat2.to_radians().cos();
    EARTH_RADIUS_KM * 2.0 * x.sqrt().atan2((1.0 - x).sqrt())
}

/// Expand a suburb/postcode query to the set of suburb names within
/// `radius_km` of its anchor.
///
/// The anchor is resolved through the gazetteer (case-insensitive suburb
/// name, or exact postcode). An unresolvable query degrades to a singleton
/// set holding the trimmed query text, whatever the radius: the caller falls
/// back to literal matching rather than failing the search. The boundary is
/// inclusive, and the anchor's own suburb is always in the result.
pub fn expand(gazetteer: &Gazetteer, query_text: &str, radius_km: f64) -> BTreeSet<String> {
    let query = query_text.trim();
    if query.is_empty() {
        return BTreeSet::new();
    }

    let Some(anchor) = gazetteer.find(query) else {
        return BTreeSet::from([query.to_string()]);
    };

    let mut nearby: BTreeSet<String> = gazetteer
        .records()
        .iter()
        .filter(|record| {
            haversine_km(
                anchor.latitude,
                anchor.longitude,
                record.latitude,
                record.longitude,
            ) <= radius_km
        })
        .map(|record| record.suburb.clone())
        .collect();
    nearby.insert(anchor.suburb.clone());
    nearby
}

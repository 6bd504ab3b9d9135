use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::directory::domain::AuState;

/// One known suburb with its postcode, state, and coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbRecord {
    pub suburb: String,
    pub postcode: String,
    pub state: AuState,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("failed to read gazetteer csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a known AU state")]
    UnknownState { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    suburb: String,
    postcode: String,
    state: String,
    lat: f64,
    lng: f64,
}

/// Static reference dataset of suburbs, postcodes, states, and coordinates.
///
/// Loaded once at startup and read-only afterwards; every location-aware
/// search leans on it.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    records: Vec<SuburbRecord>,
}

impl Gazetteer {
    /// The built-in dataset shipped with the product: capital-city and
    /// inner-metro suburbs across all eight states and territories.
    pub fn standard() -> Self {
        let records = STANDARD_SUBURBS
            .iter()
            .map(|&(suburb, postcode, state, latitude, longitude)| SuburbRecord {
                suburb: suburb.to_string(),
                postcode: postcode.to_string(),
                state,
                latitude,
                longitude,
            })
            .collect();
        Self { records }
    }

    pub fn from_records(records: Vec<SuburbRecord>) -> Self {
        Self { records }
    }

    /// Load `suburb,postcode,state,lat,lng` rows from a CSV export.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, GazetteerError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            let state =
                AuState::parse(&row.state).ok_or_else(|| GazetteerError::UnknownState {
                    row: index + 1,
                    value: row.state.clone(),
                })?;
            records.push(SuburbRecord {
                suburb: row.suburb.trim().to_string(),
                postcode: row.postcode.trim().to_string(),
                state,
                latitude: row.lat,
                longitude: row.lng,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[SuburbRecord] {
        &self.records
    }

    /// Records for one state, or every record when no state is given.
    pub fn in_state(&self, state: Option<AuState>) -> Vec<&SuburbRecord> {
        self.records
            .iter()
            .filter(|record| state.map_or(true, |wanted| record.state == wanted))
            .collect()
    }

    /// Case-insensitive exact match on suburb name, or exact match on
    /// postcode. When duplicate names exist, the first record in dataset
    /// order wins.
    pub fn find(&self, text: &str) -> Option<&SuburbRecord> {
        let needle = text.trim();
        self.records
            .iter()
            .find(|record| record.suburb.eq_ignore_ascii_case(needle))
            .or_else(|| self.records.iter().find(|record| record.postcode == needle))
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_SUBURBS: &[(&str, &str, AuState, f64, f64)] = &[
    ("Sydney", "2000", AuState::Nsw, -33.8688, 151.2093),
    ("Parramatta", "2150", AuState::Nsw, -33.815, 151.0011),
    ("Chatswood", "2067", AuState::Nsw, -33.7969, 151.182),
    ("Maroubra", "2035", AuState::Nsw, -33.95, 151.2353),
    ("Bondi Junction", "2022", AuState::Nsw, -33.8912, 151.2481),
    ("North Sydney", "2060", AuState::Nsw, -33.8389, 151.2071),
    ("Melbourne", "3000", AuState::Vic, -37.8136, 144.9631),
    ("Richmond", "3121", AuState::Vic, -37.8183, 145.0018),
    ("St Kilda", "3182", AuState::Vic, -37.8676, 144.9809),
    ("Carlton", "3053", AuState::Vic, -37.8001, 144.9674),
    ("Fitzroy", "3065", AuState::Vic, -37.7985, 144.978),
    ("Brisbane City", "4000", AuState::Qld, -27.4698, 153.0251),
    ("Fortitude Valley", "4006", AuState::Qld, -27.457, 153.033),
    ("South Brisbane", "4101", AuState::Qld, -27.4748, 153.0167),
    ("Gold Coast", "4217", AuState::Qld, -28.0023, 153.4145),
    ("Perth", "6000", AuState::Wa, -31.9523, 115.8613),
    ("Fremantle", "6160", AuState::Wa, -32.0569, 115.7439),
    ("Northbridge", "6003", AuState::Wa, -31.946, 115.852),
    ("Adelaide", "5000", AuState::Sa, -34.9285, 138.6007),
    ("North Adelaide", "5006", AuState::Sa, -34.9066, 138.5944),
    ("Hobart", "7000", AuState::Tas, -42.8821, 147.3272),
    ("Launceston", "7250", AuState::Tas, -41.4388, 147.1347),
    ("Canberra", "2600", AuState::Act, -35.2809, 149.13),
    ("Darwin", "0800", AuState::Nt, -12.4634, 130.8456),
    ("Palmerston", "0830", AuState::Nt, -12.486, 130.9833),
];

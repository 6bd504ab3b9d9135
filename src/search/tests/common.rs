use chrono::{TimeZone, Utc};

use crate::directory::domain::{
    Address, AgencyProfile, AgentProfile, AgentType, AuState, Classification, CoverageArea,
    CoverageRadius, Intent, ProfileId, ProfileStatus, Property, Segment, ServiceCategory,
    ServiceProvider, ToolCategory, ToolProvider,
};
use crate::search::gazetteer::{Gazetteer, SuburbRecord};

/// The three-suburb gazetteer from the radius-expansion acceptance scenario.
pub(super) fn small_gazetteer() -> Gazetteer {
    Gazetteer::from_records(vec![
        SuburbRecord {
            suburb: "Sydney".to_string(),
            postcode: "2000".to_string(),
            state: AuState::Nsw,
            latitude: -33.8688,
            longitude: 151.2093,
        },
        SuburbRecord {
            suburb: "Parramatta".to_string(),
            postcode: "2150".to_string(),
            state: AuState::Nsw,
            latitude: -33.815,
            longitude: 151.0011,
        },
        SuburbRecord {
            suburb: "Melbourne".to_string(),
            postcode: "3000".to_string(),
            state: AuState::Vic,
            latitude: -37.8136,
            longitude: 144.9631,
        },
    ])
}

pub(super) fn property(id: &str, suburb: &str, postcode: &str) -> Property {
    Property {
        property_id: ProfileId(id.to_string()),
        address: Address {
            unit: None,
            street: Some("12 Example St".to_string()),
            suburb: suburb.to_string(),
            state: Some(AuState::Nsw),
            postcode: postcode.to_string(),
        },
        segment: Segment::Residential,
        intent: Intent::Buy,
        property_type: "House".to_string(),
        price: Some(750_000),
        bedrooms: Some(3),
        bathrooms: Some(2),
        car_spaces: Some(1),
        features: vec!["Pool".to_string(), "Garage".to_string()],
        description: Some("Renovated family home".to_string()),
        media_urls: Vec::new(),
        published: true,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub(super) fn agency(id: &str, suburb: &str, status: ProfileStatus) -> AgencyProfile {
    AgencyProfile {
        id: ProfileId(id.to_string()),
        status,
        classification: Classification::Residential,
        logo: String::new(),
        name: format!("{suburb} Realty"),
        principal_name: "A. Principal".to_string(),
        principal_email: "principal@example.com".to_string(),
        principal_mobile: "0400 000 000".to_string(),
        street_address: "1 Main St".to_string(),
        suburb: suburb.to_string(),
        state: AuState::Nsw,
        postcode: "2000".to_string(),
        phone: "02 9000 0000".to_string(),
        email: format!("{id}@example.com"),
        password: "secret".to_string(),
        office_url: String::new(),
        crm: "Rex Software".to_string(),
        reviews_score: 0.0,
        sold_current_year: 0,
        for_sale: 0,
        leased_current_year: 0,
        for_lease: 0,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub(super) fn agent(id: &str, suburb: &str, agent_type: AgentType) -> AgentProfile {
    AgentProfile {
        id: ProfileId(id.to_string()),
        status: ProfileStatus::Approved,
        classification: Classification::Residential,
        agent_type,
        agency_logo: String::new(),
        agency_name: "Harbourline Realty".to_string(),
        name: "J. Agent".to_string(),
        principal_name: "A. Principal".to_string(),
        principal_email: "principal@example.com".to_string(),
        principal_mobile: "0400 000 000".to_string(),
        office_url: String::new(),
        crm: "Rex Software".to_string(),
        unique_agent_id: format!("UA-{id}"),
        photo: String::new(),
        email: format!("{id}@example.com"),
        phone: "02 9000 0000".to_string(),
        password: "secret".to_string(),
        suburb: suburb.to_string(),
        postcode: "2000".to_string(),
        properties_sold: 12,
        number_of_listings: 4,
        average_sold_price: 900_000,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub(super) fn area(suburb: &str, postcode: &str) -> CoverageArea {
    CoverageArea {
        suburb: suburb.to_string(),
        postcode: postcode.to_string(),
        state: AuState::Nsw,
        radius: CoverageRadius::Km25,
    }
}

pub(super) fn service_provider(
    id: &str,
    categories: Vec<ServiceCategory>,
    areas: Vec<CoverageArea>,
) -> ServiceProvider {
    ServiceProvider {
        id: ProfileId(id.to_string()),
        service_id: format!("SVC-{id}"),
        status: ProfileStatus::Approved,
        business_name: "Example Services".to_string(),
        principal_name: "A. Principal".to_string(),
        street_address: "1 Main St".to_string(),
        suburb: "Sydney".to_string(),
        state: AuState::Nsw,
        postcode: "2000".to_string(),
        phone: "02 9000 0000".to_string(),
        email: format!("{id}@example.com"),
        password: "secret".to_string(),
        website: String::new(),
        categories,
        service_areas: areas,
        logo: String::new(),
        about_us: String::new(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub(super) fn tool_provider(
    id: &str,
    category: ToolCategory,
    areas: Vec<CoverageArea>,
) -> ToolProvider {
    ToolProvider {
        id: ProfileId(id.to_string()),
        tool_id: format!("TOL-{id}"),
        status: ProfileStatus::Approved,
        tool_category: category,
        business_name: "Example Tools".to_string(),
        principal_name: "A. Principal".to_string(),
        principal_email: "principal@example.com".to_string(),
        principal_mobile: "0400 000 000".to_string(),
        street_address: "1 Main St".to_string(),
        suburb: "Sydney".to_string(),
        state: AuState::Nsw,
        postcode: "2000".to_string(),
        email: format!("{id}@example.com"),
        phone: "02 9000 0000".to_string(),
        password: "secret".to_string(),
        website: String::new(),
        coverage_areas: areas,
        logo: String::new(),
        about_us: String::new(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

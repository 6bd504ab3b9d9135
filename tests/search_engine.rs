use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use propfinder::directory::{
    Address, AuState, Classification, CoverageArea, CoverageRadius, InMemoryStore, Intent,
    NewAgency, ProfileId, ProfileKind, ProfileStatus, Property, RegistrationService, Segment,
    ServiceCategory,
};
use propfinder::search::{
    expand, AgencyFilters, Gazetteer, PropertyFilters, SearchService, ServiceFilters,
};

fn listing(id: &str, suburb: &str, postcode: &str, price: Option<u64>) -> Property {
    Property {
        property_id: ProfileId(id.to_string()),
        address: Address {
            unit: None,
            street: Some("12 Station St".to_string()),
            suburb: suburb.to_string(),
            state: Some(AuState::Nsw),
            postcode: postcode.to_string(),
        },
        segment: Segment::Residential,
        intent: Intent::Buy,
        property_type: "House".to_string(),
        price,
        bedrooms: Some(3),
        bathrooms: Some(2),
        car_spaces: Some(1),
        features: vec!["Pool".to_string(), "Garage".to_string()],
        description: Some("Renovated family home".to_string()),
        media_urls: Vec::new(),
        published: true,
        created_at: Utc::now(),
    }
}

fn agency_intake(name: &str, email: &str, suburb: &str, postcode: &str) -> NewAgency {
    NewAgency {
        classification: Classification::Residential,
        logo: String::new(),
        name: name.to_string(),
        principal_name: "Dana Wu".to_string(),
        principal_email: "dana@harbour.example".to_string(),
        principal_mobile: "0400 000 000".to_string(),
        street_address: "1 George St".to_string(),
        suburb: suburb.to_string(),
        state: AuState::Nsw,
        postcode: postcode.to_string(),
        phone: "02 9000 0000".to_string(),
        email: email.to_string(),
        password: "sandstone".to_string(),
        office_url: "https://harbour.example".to_string(),
        crm: "None".to_string(),
    }
}

#[test]
fn surrounding_search_pulls_in_listings_from_nearby_suburbs() {
    let store = Arc::new(InMemoryStore::new());
    let registration = RegistrationService::new(store.clone());
    let search = SearchService::new(store, Arc::new(Gazetteer::standard()));

    registration
        .publish_property(listing("p-sydney", "Sydney", "2000", Some(900_000)))
        .expect("listing stored");
    registration
        .publish_property(listing("p-parramatta", "Parramatta", "2150", Some(750_000)))
        .expect("listing stored");
    registration
        .publish_property(listing("p-melbourne", "Melbourne", "3000", Some(800_000)))
        .expect("listing stored");

    let nearby = PropertyFilters {
        query_text: "Sydney".to_string(),
        include_surrounding: true,
        radius_km: Some(25.0),
        ..PropertyFilters::default()
    };
    let ids: BTreeSet<String> = search
        .properties(&nearby)
        .expect("search runs")
        .into_iter()
        .map(|p| p.property_id.0)
        .collect();
    assert!(ids.contains("p-sydney"));
    assert!(ids.contains("p-parramatta"));
    assert!(!ids.contains("p-melbourne"));

    let tight = PropertyFilters {
        query_text: "Sydney".to_string(),
        include_surrounding: true,
        radius_km: Some(1.0),
        ..PropertyFilters::default()
    };
    let ids: Vec<String> = search
        .properties(&tight)
        .expect("search runs")
        .into_iter()
        .map(|p| p.property_id.0)
        .collect();
    assert_eq!(ids, vec!["p-sydney".to_string()]);
}

#[test]
fn price_and_feature_facets_combine_with_location() {
    let store = Arc::new(InMemoryStore::new());
    let registration = RegistrationService::new(store.clone());
    let search = SearchService::new(store, Arc::new(Gazetteer::standard()));

    registration
        .publish_property(listing("p-priced", "Sydney", "2000", Some(650_000)))
        .expect("listing stored");
    registration
        .publish_property(listing("p-unpriced", "Sydney", "2000", None))
        .expect("listing stored");

    let capped = PropertyFilters {
        query_text: "Sydney".to_string(),
        price_max: "700000".to_string(),
        feature_keywords: vec!["pool".to_string(), "garage".to_string()],
        ..PropertyFilters::default()
    };
    // Unpriced listings pass a price range until only_with_price drops them.
    let results = search.properties(&capped).expect("search runs");
    assert_eq!(results.len(), 2);

    let priced_only = PropertyFilters {
        only_with_price: true,
        ..capped
    };
    let results = search.properties(&priced_only).expect("search runs");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].property_id.0, "p-priced");
}

#[test]
fn agency_search_shuffles_without_changing_membership() {
    let store = Arc::new(InMemoryStore::new());
    let registration = RegistrationService::new(store.clone());
    let search = SearchService::new(store, Arc::new(Gazetteer::standard()));

    let mut expected = BTreeSet::new();
    for n in 0..12 {
        let agency = registration
            .register_agency(agency_intake(
                &format!("Agency {n}"),
                &format!("office{n}@example.com"),
                "Sydney",
                "2000",
            ))
            .expect("intake accepted");
        registration
            .set_status(ProfileKind::Agency, &agency.id, ProfileStatus::Approved)
            .expect("approval applies");
        expected.insert(agency.id.0);
    }

    for _ in 0..5 {
        let found: BTreeSet<String> = search
            .agencies(&AgencyFilters::default())
            .expect("search runs")
            .into_iter()
            .map(|a| a.id.0)
            .collect();
        assert_eq!(found, expected);
    }
}

#[test]
fn provider_search_matches_any_declared_service_area() {
    let gazetteer = Gazetteer::standard();
    let provider = propfinder::directory::ServiceProvider {
        id: ProfileId("svc-1".to_string()),
        service_id: "SVC-000001".to_string(),
        status: ProfileStatus::Approved,
        business_name: "Apex Conveyancing".to_string(),
        principal_name: "Lee Chen".to_string(),
        street_address: "4 Market St".to_string(),
        suburb: "Melbourne".to_string(),
        state: AuState::Vic,
        postcode: "3000".to_string(),
        phone: "03 9000 0000".to_string(),
        email: "hello@apex.example".to_string(),
        password: "bluestone".to_string(),
        website: "https://apex.example".to_string(),
        categories: vec![ServiceCategory::ConveyancersSolicitors],
        service_areas: vec![
            CoverageArea {
                suburb: "Melbourne".to_string(),
                postcode: "3000".to_string(),
                state: AuState::Vic,
                radius: CoverageRadius::Km25,
            },
            CoverageArea {
                suburb: "Parramatta".to_string(),
                postcode: "2150".to_string(),
                state: AuState::Nsw,
                radius: CoverageRadius::Km25,
            },
        ],
        logo: String::new(),
        about_us: String::new(),
        created_at: Utc::now(),
    };

    let filters = ServiceFilters {
        query_text: "Parramatta".to_string(),
        ..ServiceFilters::default()
    };
    let results =
        propfinder::search::filter_service_providers(&[provider.clone()], &filters, &gazetteer);
    assert_eq!(results.len(), 1);

    let elsewhere = ServiceFilters {
        query_text: "Hobart".to_string(),
        ..ServiceFilters::default()
    };
    let results = propfinder::search::filter_service_providers(&[provider], &elsewhere, &gazetteer);
    assert!(results.is_empty());
}

#[test]
fn expansion_is_inclusive_at_the_boundary_and_keeps_the_anchor() {
    let gazetteer = Gazetteer::standard();

    let anchor_only = expand(&gazetteer, "Sydney", 0.0);
    assert_eq!(anchor_only.len(), 1);
    assert!(anchor_only.contains("Sydney"));

    // Unknown anchors degrade to a literal singleton.
    let literal = expand(&gazetteer, "  Wagga Wagga  ", 50.0);
    assert_eq!(literal.into_iter().collect::<Vec<_>>(), vec!["Wagga Wagga"]);

    assert!(expand(&gazetteer, "   ", 50.0).is_empty());
}

use std::sync::Arc;

use super::common::{agency, agent, small_gazetteer};
use crate::directory::domain::{AgentType, Classification, ProfileStatus};
use crate::directory::store::{DirectoryStore, InMemoryStore};
use crate::search::professionals::{filter_agencies, filter_agents, AgencyFilters, AgentFilters};
use crate::search::service::SearchService;

#[test]
fn only_approved_agencies_surface() {
    let gazetteer = small_gazetteer();
    let candidates = vec![
        agency("a1", "Sydney", ProfileStatus::Approved),
        agency("a2", "Sydney", ProfileStatus::Approved),
        agency("a3", "Sydney", ProfileStatus::Pending),
    ];

    let filters = AgencyFilters {
        query_text: "sydney".to_string(),
        ..AgencyFilters::default()
    };
    let results = filter_agencies(&candidates, &filters, &gazetteer);
    let mut ids: Vec<&str> = results.iter().map(|a| a.id.0.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[test]
fn suspended_and_rejected_agencies_never_surface() {
    let gazetteer = small_gazetteer();
    let candidates = vec![
        agency("a1", "Sydney", ProfileStatus::Suspended),
        agency("a2", "Sydney", ProfileStatus::Rejected),
    ];

    assert!(filter_agencies(&candidates, &AgencyFilters::default(), &gazetteer).is_empty());
}

#[test]
fn classification_facet_is_exact() {
    let gazetteer = small_gazetteer();
    let mut commercial = agency("a2", "Sydney", ProfileStatus::Approved);
    commercial.classification = Classification::Commercial;
    let candidates = vec![agency("a1", "Sydney", ProfileStatus::Approved), commercial];

    let filters = AgencyFilters {
        classification: Some(Classification::Commercial),
        ..AgencyFilters::default()
    };
    let results = filter_agencies(&candidates, &filters, &gazetteer);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id.0, "a2");
}

#[test]
fn agent_type_and_classification_combine() {
    let gazetteer = small_gazetteer();
    let candidates = vec![
        agent("g1", "Sydney", AgentType::Selling),
        agent("g2", "Sydney", AgentType::Leasing),
    ];

    let filters = AgentFilters {
        agent_type: Some(AgentType::Leasing),
        ..AgentFilters::default()
    };
    let results = filter_agents(&candidates, &filters, &gazetteer);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id.0, "g2");

    let filters = AgentFilters {
        classification: Some(Classification::Commercial),
        ..AgentFilters::default()
    };
    assert!(filter_agents(&candidates, &filters, &gazetteer).is_empty());
}

#[test]
fn agents_match_surrounding_suburbs_via_expansion() {
    let gazetteer = small_gazetteer();
    let candidates = vec![
        agent("g1", "Parramatta", AgentType::Selling),
        agent("g2", "Melbourne", AgentType::Selling),
    ];

    let filters = AgentFilters {
        query_text: "Sydney".to_string(),
        include_surrounding: true,
        radius_km: Some(25.0),
        ..AgentFilters::default()
    };
    let results = filter_agents(&candidates, &filters, &gazetteer);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id.0, "g1");
}

#[test]
fn facade_shuffle_preserves_membership() {
    let store = Arc::new(InMemoryStore::new());
    for i in 0..20 {
        store
            .insert_agency(agency(&format!("a{i}"), "Sydney", ProfileStatus::Approved))
            .expect("inserted");
    }
    store
        .insert_agency(agency("pending", "Sydney", ProfileStatus::Pending))
        .expect("inserted");

    let service = SearchService::new(store, Arc::new(small_gazetteer()));
    let results = service
        .agencies(&AgencyFilters::default())
        .expect("search succeeds");

    assert_eq!(results.len(), 20);
    let mut ids: Vec<String> = results.iter().map(|a| a.id.0.clone()).collect();
    ids.sort_unstable();
    let mut expected: Vec<String> = (0..20).map(|i| format!("a{i}")).collect();
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn facade_fills_unset_radius_from_its_configured_default() {
    let store = Arc::new(InMemoryStore::new());
    store
        .insert_agency(agency("nearby", "Parramatta", ProfileStatus::Approved))
        .expect("inserted");

    let filters = AgencyFilters {
        query_text: "Sydney".to_string(),
        include_surrounding: true,
        radius_km: None,
        ..AgencyFilters::default()
    };

    // Stock 10 km default keeps Parramatta out of a Sydney search.
    let service = SearchService::new(store.clone(), Arc::new(small_gazetteer()));
    assert!(service.agencies(&filters).expect("search succeeds").is_empty());

    // A wider configured default reaches it without the caller setting a radius.
    let service = SearchService::new(store, Arc::new(small_gazetteer()))
        .with_default_radius_km(25.0);
    let results = service.agencies(&filters).expect("search succeeds");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id.0, "nearby");
}

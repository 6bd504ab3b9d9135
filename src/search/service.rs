use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::directory::domain::{
    AgencyProfile, AgentProfile, ProfileStatus, Property, ServiceProvider, ToolProvider,
};
use crate::directory::store::{DirectoryStore, StoreError};

use super::filters::DEFAULT_RADIUS_KM;
use super::gazetteer::Gazetteer;
use super::professionals::{filter_agencies, filter_agents, AgencyFilters, AgentFilters};
use super::properties::{filter_properties, PropertyFilters};
use super::providers::{
    filter_service_providers, filter_tool_providers, ServiceFilters, ToolFilters,
};

/// Search façade over the injected store and gazetteer snapshot.
///
/// Each method pulls the visible candidate set, fills an unset expansion
/// radius with the configured default, runs the pure filter pass, and hands
/// the result back for rendering. Agency and agent results are returned in a
/// fresh uniformly random order on every call so no profile gets a permanent
/// top spot; the other searches preserve store order.
pub struct SearchService<S> {
    store: Arc<S>,
    gazetteer: Arc<Gazetteer>,
    default_radius_km: f64,
}

impl<S> SearchService<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>, gazetteer: Arc<Gazetteer>) -> Self {
        Self {
            store,
            gazetteer,
            default_radius_km: DEFAULT_RADIUS_KM,
        }
    }

    /// Radius used for surrounding-suburb expansion when a search leaves
    /// `radius_km` unset.
    pub fn with_default_radius_km(mut self, radius_km: f64) -> Self {
        self.default_radius_km = radius_km;
        self
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn properties(&self, filters: &PropertyFilters) -> Result<Vec<Property>, StoreError> {
        let mut filters = filters.clone();
        filters.radius_km.get_or_insert(self.default_radius_km);
        let candidates = self.store.properties(true)?;
        Ok(filter_properties(&candidates, &filters, &self.gazetteer))
    }

    pub fn agencies(&self, filters: &AgencyFilters) -> Result<Vec<AgencyProfile>, StoreError> {
        let mut filters = filters.clone();
        filters.radius_km.get_or_insert(self.default_radius_km);
        let candidates = self.store.agencies(Some(ProfileStatus::Approved))?;
        let mut results = filter_agencies(&candidates, &filters, &self.gazetteer);
        results.shuffle(&mut rand::thread_rng());
        Ok(results)
    }

    pub fn agents(&self, filters: &AgentFilters) -> Result<Vec<AgentProfile>, StoreError> {
        let mut filters = filters.clone();
        filters.radius_km.get_or_insert(self.default_radius_km);
        let candidates = self.store.agents(Some(ProfileStatus::Approved))?;
        let mut results = filter_agents(&candidates, &filters, &self.gazetteer);
        results.shuffle(&mut rand::thread_rng());
        Ok(results)
    }

    pub fn service_providers(
        &self,
        filters: &ServiceFilters,
    ) -> Result<Vec<ServiceProvider>, StoreError> {
        let mut filters = filters.clone();
        filters.radius_km.get_or_insert(self.default_radius_km);
        let candidates = self
            .store
            .service_providers(Some(ProfileStatus::Approved))?;
        Ok(filter_service_providers(
            &candidates,
            &filters,
            &self.gazetteer,
        ))
    }

    pub fn tool_providers(&self, filters: &ToolFilters) -> Result<Vec<ToolProvider>, StoreError> {
        let mut filters = filters.clone();
        filters.radius_km.get_or_insert(self.default_radius_km);
        let candidates = self.store.tool_providers(Some(ProfileStatus::Approved))?;
        Ok(filter_tool_providers(&candidates, &filters, &self.gazetteer))
    }
}

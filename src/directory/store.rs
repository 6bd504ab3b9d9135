use std::sync::Mutex;

use super::domain::{
    AgencyProfile, AgentProfile, ConsumerProfile, ProfileId, ProfileStatus, Property, Review,
    ReviewTarget, ServiceProvider, ToolProvider,
};

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction standing in for the future API backend.
///
/// The search and lifecycle services only ever ask for lists filtered by
/// status; any real backend error is expected to be normalised here rather
/// than surfacing inside the search core.
pub trait DirectoryStore: Send + Sync {
    fn insert_agency(&self, agency: AgencyProfile) -> Result<AgencyProfile, StoreError>;
    fn agencies(&self, status: Option<ProfileStatus>) -> Result<Vec<AgencyProfile>, StoreError>;
    fn agency_by_id(&self, id: &ProfileId) -> Result<Option<AgencyProfile>, StoreError>;
    fn agency_by_email(&self, email: &str) -> Result<Option<AgencyProfile>, StoreError>;
    fn set_agency_status(&self, id: &ProfileId, status: ProfileStatus) -> Result<(), StoreError>;
    fn update_agency(&self, agency: AgencyProfile) -> Result<(), StoreError>;

    fn insert_agent(&self, agent: AgentProfile) -> Result<AgentProfile, StoreError>;
    fn agents(&self, status: Option<ProfileStatus>) -> Result<Vec<AgentProfile>, StoreError>;
    fn agent_by_id(&self, id: &ProfileId) -> Result<Option<AgentProfile>, StoreError>;
    fn agent_by_email(&self, email: &str) -> Result<Option<AgentProfile>, StoreError>;
    fn set_agent_status(&self, id: &ProfileId, status: ProfileStatus) -> Result<(), StoreError>;

    fn insert_service_provider(
        &self,
        provider: ServiceProvider,
    ) -> Result<ServiceProvider, StoreError>;
    fn service_providers(
        &self,
        status: Option<ProfileStatus>,
    ) -> Result<Vec<ServiceProvider>, StoreError>;
    fn service_provider_by_id(&self, id: &ProfileId)
        -> Result<Option<ServiceProvider>, StoreError>;
    fn service_provider_by_email(&self, email: &str)
        -> Result<Option<ServiceProvider>, StoreError>;
    fn set_service_provider_status(
        &self,
        id: &ProfileId,
        status: ProfileStatus,
    ) -> Result<(), StoreError>;

    fn insert_tool_provider(&self, provider: ToolProvider) -> Result<ToolProvider, StoreError>;
    fn tool_providers(
        &self,
        status: Option<ProfileStatus>,
    ) -> Result<Vec<ToolProvider>, StoreError>;
    fn tool_provider_by_id(&self, id: &ProfileId) -> Result<Option<ToolProvider>, StoreError>;
    fn tool_provider_by_email(&self, email: &str) -> Result<Option<ToolProvider>, StoreError>;
    fn set_tool_provider_status(
        &self,
        id: &ProfileId,
        status: ProfileStatus,
    ) -> Result<(), StoreError>;

    fn insert_consumer(&self, consumer: ConsumerProfile) -> Result<ConsumerProfile, StoreError>;
    fn consumer_by_email(&self, email: &str) -> Result<Option<ConsumerProfile>, StoreError>;

    fn insert_property(&self, property: Property) -> Result<Property, StoreError>;
    /// All listings, or only published ones when `published_only` is set.
    fn properties(&self, published_only: bool) -> Result<Vec<Property>, StoreError>;

    fn insert_review(&self, review: Review) -> Result<Review, StoreError>;
    fn reviews_for(&self, target: &ReviewTarget) -> Result<Vec<Review>, StoreError>;
}

#[derive(Debug, Default)]
struct Inner {
    agencies: Vec<AgencyProfile>,
    agents: Vec<AgentProfile>,
    service_providers: Vec<ServiceProvider>,
    tool_providers: Vec<ToolProvider>,
    consumers: Vec<ConsumerProfile>,
    properties: Vec<Property>,
    reviews: Vec<Review>,
}

/// In-memory [`DirectoryStore`] used by the demo server and tests. The
/// original product kept this data in a browser-local store with the same
/// read/write surface.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

fn by_status<T, F>(items: &[T], status: Option<ProfileStatus>, status_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> ProfileStatus,
{
    items
        .iter()
        .filter(|item| status.map_or(true, |wanted| status_of(item) == wanted))
        .cloned()
        .collect()
}

impl DirectoryStore for InMemoryStore {
    fn insert_agency(&self, agency: AgencyProfile) -> Result<AgencyProfile, StoreError> {
        let mut inner = self.lock()?;
        if inner.agencies.iter().any(|a| a.id == agency.id) {
            return Err(StoreError::Conflict);
        }
        inner.agencies.push(agency.clone());
        Ok(agency)
    }

    fn agencies(&self, status: Option<ProfileStatus>) -> Result<Vec<AgencyProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(by_status(&inner.agencies, status, |a| a.status))
    }

    fn agency_by_id(&self, id: &ProfileId) -> Result<Option<AgencyProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.agencies.iter().find(|a| &a.id == id).cloned())
    }

    fn agency_by_email(&self, email: &str) -> Result<Option<AgencyProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .agencies
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn set_agency_status(&self, id: &ProfileId, status: ProfileStatus) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let agency = inner
            .agencies
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(StoreError::NotFound)?;
        agency.status = status;
        Ok(())
    }

    fn update_agency(&self, agency: AgencyProfile) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let slot = inner
            .agencies
            .iter_mut()
            .find(|a| a.id == agency.id)
            .ok_or(StoreError::NotFound)?;
        *slot = agency;
        Ok(())
    }

    fn insert_agent(&self, agent: AgentProfile) -> Result<AgentProfile, StoreError> {
        let mut inner = self.lock()?;
        if inner.agents.iter().any(|a| a.id == agent.id) {
            return Err(StoreError::Conflict);
        }
        inner.agents.push(agent.clone());
        Ok(agent)
    }

    fn agents(&self, status: Option<ProfileStatus>) -> Result<Vec<AgentProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(by_status(&inner.agents, status, |a| a.status))
    }

    fn agent_by_id(&self, id: &ProfileId) -> Result<Option<AgentProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.agents.iter().find(|a| &a.id == id).cloned())
    }

    fn agent_by_email(&self, email: &str) -> Result<Option<AgentProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .agents
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn set_agent_status(&self, id: &ProfileId, status: ProfileStatus) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let agent = inner
            .agents
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(StoreError::NotFound)?;
        agent.status = status;
        Ok(())
    }

    fn insert_service_provider(
        &self,
        provider: ServiceProvider,
    ) -> Result<ServiceProvider, StoreError> {
        let mut inner = self.lock()?;
        if inner.service_providers.iter().any(|p| p.id == provider.id) {
            return Err(StoreError::Conflict);
        }
        inner.service_providers.push(provider.clone());
        Ok(provider)
    }

    fn service_providers(
        &self,
        status: Option<ProfileStatus>,
    ) -> Result<Vec<ServiceProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(by_status(&inner.service_providers, status, |p| p.status))
    }

    fn service_provider_by_id(
        &self,
        id: &ProfileId,
    ) -> Result<Option<ServiceProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .service_providers
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    fn service_provider_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ServiceProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .service_providers
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn set_service_provider_status(
        &self,
        id: &ProfileId,
        status: ProfileStatus,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let provider = inner
            .service_providers
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(StoreError::NotFound)?;
        provider.status = status;
        Ok(())
    }

    fn insert_tool_provider(&self, provider: ToolProvider) -> Result<ToolProvider, StoreError> {
        let mut inner = self.lock()?;
        if inner.tool_providers.iter().any(|p| p.id == provider.id) {
            return Err(StoreError::Conflict);
        }
        inner.tool_providers.push(provider.clone());
        Ok(provider)
    }

    fn tool_providers(
        &self,
        status: Option<ProfileStatus>,
    ) -> Result<Vec<ToolProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(by_status(&inner.tool_providers, status, |p| p.status))
    }

    fn tool_provider_by_id(&self, id: &ProfileId) -> Result<Option<ToolProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.tool_providers.iter().find(|p| &p.id == id).cloned())
    }

    fn tool_provider_by_email(&self, email: &str) -> Result<Option<ToolProvider>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .tool_providers
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn set_tool_provider_status(
        &self,
        id: &ProfileId,
        status: ProfileStatus,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let provider = inner
            .tool_providers
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(StoreError::NotFound)?;
        provider.status = status;
        Ok(())
    }

    fn insert_consumer(&self, consumer: ConsumerProfile) -> Result<ConsumerProfile, StoreError> {
        let mut inner = self.lock()?;
        if inner.consumers.iter().any(|c| c.id == consumer.id) {
            return Err(StoreError::Conflict);
        }
        inner.consumers.push(consumer.clone());
        Ok(consumer)
    }

    fn consumer_by_email(&self, email: &str) -> Result<Option<ConsumerProfile>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .consumers
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn insert_property(&self, property: Property) -> Result<Property, StoreError> {
        let mut inner = self.lock()?;
        if inner.properties.iter().any(|p| p.property_id == property.property_id) {
            return Err(StoreError::Conflict);
        }
        inner.properties.push(property.clone());
        Ok(property)
    }

    fn properties(&self, published_only: bool) -> Result<Vec<Property>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .properties
            .iter()
            .filter(|p| !published_only || p.published)
            .cloned()
            .collect())
    }

    fn insert_review(&self, review: Review) -> Result<Review, StoreError> {
        let mut inner = self.lock()?;
        if inner.reviews.iter().any(|r| r.id == review.id) {
            return Err(StoreError::Conflict);
        }
        inner.reviews.push(review.clone());
        Ok(review)
    }

    fn reviews_for(&self, target: &ReviewTarget) -> Result<Vec<Review>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .reviews
            .iter()
            .filter(|r| &r.target == target)
            .cloned()
            .collect())
    }
}

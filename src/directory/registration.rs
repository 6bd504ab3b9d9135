use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    AgencyProfile, AgentProfile, AgentType, AuState, Classification, ConsumerProfile, CoverageArea,
    ProfileId, ProfileStatus, Property, ServiceCategory, ServiceProvider, ToolCategory,
    ToolProvider,
};
use super::store::{DirectoryStore, StoreError};

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> (u64, ProfileId) {
    let seq = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    (seq, ProfileId(format!("{prefix}-{seq:06}")))
}

/// Error raised by registration and approval flows.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("a profile is already registered for {0}")]
    DuplicateEmail(String),
    #[error("cannot move a {from} profile to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which professional register an admin action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Agency,
    Agent,
    Service,
    Tool,
}

/// Agency sign-up payload; lifecycle fields are assigned on intake.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAgency {
    pub classification: Classification,
    pub logo: String,
    pub name: String,
    pub principal_name: String,
    pub principal_email: String,
    pub principal_mobile: String,
    pub street_address: String,
    pub suburb: String,
    pub state: AuState,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub office_url: String,
    pub crm: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAgent {
    pub classification: Classification,
    pub agent_type: AgentType,
    pub agency_logo: String,
    pub agency_name: String,
    pub name: String,
    pub principal_name: String,
    pub principal_email: String,
    pub principal_mobile: String,
    pub office_url: String,
    pub crm: String,
    pub unique_agent_id: String,
    pub photo: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub suburb: String,
    pub postcode: String,
    pub properties_sold: u32,
    pub number_of_listings: u32,
    pub average_sold_price: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewServiceProvider {
    pub business_name: String,
    pub principal_name: String,
    pub street_address: String,
    pub suburb: String,
    pub state: AuState,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub website: String,
    pub categories: Vec<ServiceCategory>,
    pub service_areas: Vec<CoverageArea>,
    pub logo: String,
    pub about_us: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewToolProvider {
    pub tool_category: ToolCategory,
    pub business_name: String,
    pub principal_name: String,
    pub principal_email: String,
    pub principal_mobile: String,
    pub street_address: String,
    pub suburb: String,
    pub state: AuState,
    pub postcode: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub website: String,
    pub coverage_areas: Vec<CoverageArea>,
    pub logo: String,
    pub about_us: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewConsumer {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub mobile: String,
    pub suburb: String,
    pub postcode: String,
    pub password: String,
}

/// Intake and approval service for directory profiles.
///
/// New professional profiles always start [`ProfileStatus::Pending`] and only
/// become searchable once an admin approves them. The welcome e-mail of the
/// original product is stubbed as a structured log line.
pub struct RegistrationService<S> {
    store: Arc<S>,
}

impl<S> RegistrationService<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn register_agency(&self, intake: NewAgency) -> Result<AgencyProfile, RegistrationError> {
        if self.store.agency_by_email(&intake.email)?.is_some() {
            return Err(RegistrationError::DuplicateEmail(intake.email));
        }
        let (_, id) = next_id("agency");
        let agency = AgencyProfile {
            id,
            status: ProfileStatus::Pending,
            classification: intake.classification,
            logo: intake.logo,
            name: intake.name,
            principal_name: intake.principal_name,
            principal_email: intake.principal_email,
            principal_mobile: intake.principal_mobile,
            street_address: intake.street_address,
            suburb: intake.suburb,
            state: intake.state,
            postcode: intake.postcode,
            phone: intake.phone,
            email: intake.email,
            password: intake.password,
            office_url: intake.office_url,
            crm: intake.crm,
            reviews_score: 0.0,
            sold_current_year: 0,
            for_sale: 0,
            leased_current_year: 0,
            for_lease: 0,
            created_at: Utc::now(),
        };
        let stored = self.store.insert_agency(agency)?;
        info!(email = %stored.email, "stub: agency welcome email would be sent");
        Ok(stored)
    }

    pub fn register_agent(&self, intake: NewAgent) -> Result<AgentProfile, RegistrationError> {
        if self.store.agent_by_email(&intake.email)?.is_some() {
            return Err(RegistrationError::DuplicateEmail(intake.email));
        }
        let (_, id) = next_id("agent");
        let agent = AgentProfile {
            id,
            status: ProfileStatus::Pending,
            classification: intake.classification,
            agent_type: intake.agent_type,
            agency_logo: intake.agency_logo,
            agency_name: intake.agency_name,
            name: intake.name,
            principal_name: intake.principal_name,
            principal_email: intake.principal_email,
            principal_mobile: intake.principal_mobile,
            office_url: intake.office_url,
            crm: intake.crm,
            unique_agent_id: intake.unique_agent_id,
            photo: intake.photo,
            email: intake.email,
            phone: intake.phone,
            password: intake.password,
            suburb: intake.suburb,
            postcode: intake.postcode,
            properties_sold: intake.properties_sold,
            number_of_listings: intake.number_of_listings,
            average_sold_price: intake.average_sold_price,
            created_at: Utc::now(),
        };
        let stored = self.store.insert_agent(agent)?;
        info!(email = %stored.email, "stub: agent welcome email would be sent");
        Ok(stored)
    }

    pub fn register_service_provider(
        &self,
        intake: NewServiceProvider,
    ) -> Result<ServiceProvider, RegistrationError> {
        if self.store.service_provider_by_email(&intake.email)?.is_some() {
            return Err(RegistrationError::DuplicateEmail(intake.email));
        }
        let (seq, id) = next_id("service");
        let provider = ServiceProvider {
            id,
            service_id: format!("SVC-{seq:06}"),
            status: ProfileStatus::Pending,
            business_name: intake.business_name,
            principal_name: intake.principal_name,
            street_address: intake.street_address,
            suburb: intake.suburb,
            state: intake.state,
            postcode: intake.postcode,
            phone: intake.phone,
            email: intake.email,
            password: intake.password,
            website: intake.website,
            categories: intake.categories,
            service_areas: intake.service_areas,
            logo: intake.logo,
            about_us: intake.about_us,
            created_at: Utc::now(),
        };
        let stored = self.store.insert_service_provider(provider)?;
        info!(
            email = %stored.email,
            service_id = %stored.service_id,
            "stub: thank-you-for-joining email would be sent"
        );
        Ok(stored)
    }

    pub fn register_tool_provider(
        &self,
        intake: NewToolProvider,
    ) -> Result<ToolProvider, RegistrationError> {
        if self.store.tool_provider_by_email(&intake.email)?.is_some() {
            return Err(RegistrationError::DuplicateEmail(intake.email));
        }
        let (seq, id) = next_id("tool");
        let provider = ToolProvider {
            id,
            tool_id: format!("TOL-{seq:06}"),
            status: ProfileStatus::Pending,
            tool_category: intake.tool_category,
            business_name: intake.business_name,
            principal_name: intake.principal_name,
            principal_email: intake.principal_email,
            principal_mobile: intake.principal_mobile,
            street_address: intake.street_address,
            suburb: intake.suburb,
            state: intake.state,
            postcode: intake.postcode,
            email: intake.email,
            phone: intake.phone,
            password: intake.password,
            website: intake.website,
            coverage_areas: intake.coverage_areas,
            logo: intake.logo,
            about_us: intake.about_us,
            created_at: Utc::now(),
        };
        let stored = self.store.insert_tool_provider(provider)?;
        info!(
            email = %stored.email,
            tool_id = %stored.tool_id,
            "stub: thank-you-for-joining email would be sent"
        );
        Ok(stored)
    }

    pub fn register_consumer(
        &self,
        intake: NewConsumer,
    ) -> Result<ConsumerProfile, RegistrationError> {
        if self.store.consumer_by_email(&intake.email)?.is_some() {
            return Err(RegistrationError::DuplicateEmail(intake.email));
        }
        let (_, id) = next_id("consumer");
        let consumer = ConsumerProfile {
            id,
            first_name: intake.first_name,
            surname: intake.surname,
            email: intake.email,
            mobile: intake.mobile,
            suburb: intake.suburb,
            postcode: intake.postcode,
            password: intake.password,
            created_at: Utc::now(),
        };
        Ok(self.store.insert_consumer(consumer)?)
    }

    pub fn publish_property(&self, mut property: Property) -> Result<Property, RegistrationError> {
        if property.property_id.0.is_empty() {
            let (_, id) = next_id("property");
            property.property_id = id;
        }
        Ok(self.store.insert_property(property)?)
    }

    /// Apply an admin status decision. Legal moves mirror the approvals
    /// screen: approve anything not yet approved, reject anything not yet
    /// rejected, suspend only an approved profile.
    pub fn set_status(
        &self,
        kind: ProfileKind,
        id: &ProfileId,
        status: ProfileStatus,
    ) -> Result<(), RegistrationError> {
        let current = self.current_status(kind, id)?;
        if !transition_allowed(current, status) {
            return Err(RegistrationError::InvalidTransition {
                from: current.label(),
                to: status.label(),
            });
        }
        match kind {
            ProfileKind::Agency => self.store.set_agency_status(id, status)?,
            ProfileKind::Agent => self.store.set_agent_status(id, status)?,
            ProfileKind::Service => self.store.set_service_provider_status(id, status)?,
            ProfileKind::Tool => self.store.set_tool_provider_status(id, status)?,
        }
        info!(kind = ?kind, id = %id, status = status.label(), "profile status updated");
        Ok(())
    }

    fn current_status(
        &self,
        kind: ProfileKind,
        id: &ProfileId,
    ) -> Result<ProfileStatus, RegistrationError> {
        let status = match kind {
            ProfileKind::Agency => self.store.agency_by_id(id)?.map(|a| a.status),
            ProfileKind::Agent => self.store.agent_by_id(id)?.map(|a| a.status),
            ProfileKind::Service => self.store.service_provider_by_id(id)?.map(|p| p.status),
            ProfileKind::Tool => self.store.tool_provider_by_id(id)?.map(|p| p.status),
        };
        status.ok_or(RegistrationError::Store(StoreError::NotFound))
    }
}

fn transition_allowed(from: ProfileStatus, to: ProfileStatus) -> bool {
    match to {
        ProfileStatus::Approved => from != ProfileStatus::Approved,
        ProfileStatus::Rejected => from != ProfileStatus::Rejected,
        ProfileStatus::Suspended => from == ProfileStatus::Approved,
        ProfileStatus::Pending => false,
    }
}

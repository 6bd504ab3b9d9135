//! Directory entities, persistence abstraction, and profile lifecycle flows.

pub mod auth;
pub mod domain;
pub mod registration;
pub mod reviews;
pub mod store;

pub use auth::{is_admin_email, AuthError, Session, SessionGate};
pub use domain::{
    Address, AgencyProfile, AgentProfile, AgentType, AuState, Classification, ConsumerProfile,
    CoverageArea, CoverageRadius, Intent, ProfileId, ProfileStatus, Property, Review, ReviewTarget,
    Role, Segment, ServiceCategory, ServiceProvider, ToolCategory, ToolProvider,
};
pub use registration::{
    NewAgency, NewAgent, NewConsumer, NewServiceProvider, NewToolProvider, ProfileKind,
    RegistrationError, RegistrationService,
};
pub use reviews::{NewReview, ReviewError, ReviewService};
pub use store::{DirectoryStore, InMemoryStore, StoreError};

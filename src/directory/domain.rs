use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper shared by every registered profile and listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Australian states and territories. User input is parsed at the boundary;
/// everything past it works with the closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuState {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,
}

impl AuState {
    pub const ALL: [AuState; 8] = [
        AuState::Nsw,
        AuState::Vic,
        AuState::Qld,
        AuState::Wa,
        AuState::Sa,
        AuState::Tas,
        AuState::Act,
        AuState::Nt,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AuState::Nsw => "NSW",
            AuState::Vic => "VIC",
            AuState::Qld => "QLD",
            AuState::Wa => "WA",
            AuState::Sa => "SA",
            AuState::Tas => "TAS",
            AuState::Act => "ACT",
            AuState::Nt => "NT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Lifecycle of a registered professional profile. Only approved profiles are
/// ever visible to searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl ProfileStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileStatus::Pending => "pending",
            ProfileStatus::Approved => "approved",
            ProfileStatus::Rejected => "rejected",
            ProfileStatus::Suspended => "suspended",
        }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, ProfileStatus::Approved)
    }
}

/// Market classification carried by agencies and agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Residential,
    Commercial,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Selling,
    Leasing,
}

/// Residential/commercial split on property listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Residential,
    Commercial,
}

/// What the listing is on the market for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Buy,
    Lease,
    Sold,
    Leased,
}

/// Street address attached to a property listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    pub suburb: String,
    #[serde(default)]
    pub state: Option<AuState>,
    pub postcode: String,
}

impl Address {
    /// Full formatted address text used by substring location matching.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(unit) = self.unit.as_deref() {
            parts.push(unit);
        }
        if let Some(street) = self.street.as_deref() {
            parts.push(street);
        }
        parts.push(&self.suburb);
        parts.push(&self.postcode);
        let mut text = parts.join(" ");
        if let Some(state) = self.state {
            text.push(' ');
            text.push_str(state.label());
        }
        text
    }
}

/// A property listing published by an agency or agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub property_id: ProfileId,
    pub address: Address,
    pub segment: Segment,
    pub intent: Intent,
    pub property_type: String,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<u8>,
    #[serde(default)]
    pub car_spaces: Option<u8>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Registered real-estate agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyProfile {
    pub id: ProfileId,
    pub status: ProfileStatus,
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
    pub reviews_score: f32,
    pub sold_current_year: u32,
    pub for_sale: u32,
    pub leased_current_year: u32,
    pub for_lease: u32,
    pub created_at: DateTime<Utc>,
}

/// Registered individual agent, tied to an agency by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: ProfileId,
    pub status: ProfileStatus,
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
    pub created_at: DateTime<Utc>,
}

/// Categories offered by real-estate service providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "Conveyancers/Solicitors")]
    ConveyancersSolicitors,
    #[serde(rename = "Mortgage Brokers/Finance")]
    MortgageBrokersFinance,
    #[serde(rename = "Landlord and property Insurance")]
    LandlordPropertyInsurance,
    #[serde(rename = "Valuations")]
    Valuations,
    #[serde(rename = "Depreciation reports")]
    DepreciationReports,
    #[serde(rename = "Buyers Agents")]
    BuyersAgents,
    #[serde(rename = "Land Surveyors")]
    LandSurveyors,
    #[serde(rename = "Pest and Building Reports")]
    PestBuildingReports,
    #[serde(rename = "Removalists and Storage")]
    RemovalistsStorage,
    #[serde(rename = "Rubbish Removal")]
    RubbishRemoval,
    #[serde(rename = "Painting")]
    Painting,
    #[serde(rename = "Cleaning")]
    Cleaning,
    #[serde(rename = "Gardening and Landscape")]
    GardeningLandscape,
    #[serde(rename = "Utilities and Streaming")]
    UtilitiesStreaming,
    #[serde(rename = "Carpet Cleaning")]
    CarpetCleaning,
    #[serde(rename = "Locksmiths and Security")]
    LocksmithsSecurity,
}

/// Categories offered by tool providers serving the industry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolCategory {
    #[serde(rename = "Furniture Hire and Property Styling")]
    FurnitureHireStyling,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "Videography")]
    Videography,
    #[serde(rename = "Floorplans")]
    Floorplans,
    #[serde(rename = "Copy writers")]
    CopyWriters,
    #[serde(rename = "Auctioneers")]
    Auctioneers,
    #[serde(rename = "Training and Mentoring")]
    TrainingMentoring,
    #[serde(rename = "Software and Hardware")]
    SoftwareHardware,
    #[serde(rename = "CRM's")]
    Crms,
    #[serde(rename = "Franchise Real Estate Groups")]
    FranchiseGroups,
    #[serde(rename = "Trust Account Auditors")]
    TrustAccountAuditors,
    #[serde(rename = "Front Window Display")]
    FrontWindowDisplay,
    #[serde(rename = "Printing and Stationery")]
    PrintingStationery,
    #[serde(rename = "Signage and Signboards")]
    SignageSignboards,
    #[serde(rename = "Corporate Merchandise and Gifts")]
    CorporateMerchandise,
    #[serde(rename = "Marketing and Social Media")]
    MarketingSocialMedia,
}

/// Radius tiers a provider may nominate for a serviced area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageRadius {
    #[serde(rename = "5")]
    Km5,
    #[serde(rename = "25")]
    Km25,
    #[serde(rename = "50")]
    Km50,
}

/// A suburb a provider nominates as serviced, with its radius tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageArea {
    pub suburb: String,
    pub postcode: String,
    pub state: AuState,
    pub radius: CoverageRadius,
}

/// Registered real-estate service provider (conveyancers, brokers, trades).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: ProfileId,
    pub service_id: String,
    pub status: ProfileStatus,
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
    pub created_at: DateTime<Utc>,
}

/// Registered provider of tools and services to the industry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProvider {
    pub id: ProfileId,
    pub tool_id: String,
    pub status: ProfileStatus,
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
    pub created_at: DateTime<Utc>,
}

/// Consumer account used for sign-in and review authorship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerProfile {
    pub id: ProfileId,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub mobile: String,
    pub suburb: String,
    pub postcode: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// What a review is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ReviewTarget {
    Agency(ProfileId),
    Agent(ProfileId),
}

impl ReviewTarget {
    pub fn id(&self) -> &ProfileId {
        match self {
            ReviewTarget::Agency(id) | ReviewTarget::Agent(id) => id,
        }
    }
}

/// Consumer review left against an agency or agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ProfileId,
    pub target: ReviewTarget,
    pub author_id: ProfileId,
    pub author_name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Account roles recognised by the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Consumer,
    Agency,
    Agent,
    Service,
    Tool,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Consumer => "consumer",
            Role::Agency => "agency",
            Role::Agent => "agent",
            Role::Service => "service",
            Role::Tool => "tool",
            Role::Admin => "admin",
        }
    }
}

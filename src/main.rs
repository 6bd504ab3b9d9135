use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use propfinder::config::AppConfig;
use propfinder::directory::{
    is_admin_email, AuState, InMemoryStore, NewAgency, NewAgent, NewConsumer, NewReview,
    NewServiceProvider, NewToolProvider, ProfileId, ProfileKind, ProfileStatus, Property,
    RegistrationError, RegistrationService, ReviewError, ReviewService, Role, SessionGate,
    StoreError,
};
use propfinder::error::AppError;
use propfinder::search::{
    expand, AgencyFilters, AgentFilters, Gazetteer, PropertyFilters, SearchService, ServiceFilters,
    ToolFilters,
};
use propfinder::telemetry;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    search: Arc<SearchService<InMemoryStore>>,
    registration: Arc<RegistrationService<InMemoryStore>>,
    reviews: Arc<ReviewService<InMemoryStore>>,
    gate: Arc<SessionGate<InMemoryStore>>,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "propfinder",
    about = "Run the property directory search service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the known suburbs, optionally restricted to one state
    Suburbs(SuburbsArgs),
    /// Show which suburbs a radius search around a query would cover
    Expand(ExpandArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct SuburbsArgs {
    /// State or territory code (NSW, VIC, QLD, WA, SA, TAS, ACT, NT)
    #[arg(long, value_parser = parse_state)]
    state: Option<AuState>,
}

#[derive(Args, Debug)]
struct ExpandArgs {
    /// Suburb name or postcode to anchor the search on
    query: String,
    /// Radius in kilometres (defaults to the configured search radius)
    #[arg(long)]
    radius_km: Option<f64>,
}

fn parse_state(raw: &str) -> Result<AuState, String> {
    AuState::parse(raw).ok_or_else(|| format!("'{raw}' is not a known AU state or territory"))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Suburbs(args) => run_suburbs(args),
        Command::Expand(args) => run_expand(args),
    }
}

fn load_gazetteer(config: &AppConfig) -> Result<Gazetteer, AppError> {
    match &config.search.gazetteer_csv {
        Some(path) => Ok(Gazetteer::from_csv_path(path)?),
        None => Ok(Gazetteer::standard()),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let gazetteer = Arc::new(load_gazetteer(&config)?);
    let store = Arc::new(InMemoryStore::new());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        search: Arc::new(
            SearchService::new(store.clone(), gazetteer)
                .with_default_radius_km(config.search.default_radius_km),
        ),
        registration: Arc::new(RegistrationService::new(store.clone())),
        reviews: Arc::new(ReviewService::new(store.clone())),
        gate: Arc::new(SessionGate::new(store)),
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "directory search service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/search/properties", post(search_properties))
        .route("/api/v1/search/agencies", post(search_agencies))
        .route("/api/v1/search/agents", post(search_agents))
        .route("/api/v1/search/services", post(search_services))
        .route("/api/v1/search/tools", post(search_tools))
        .route("/api/v1/register/agency", post(register_agency))
        .route("/api/v1/register/agent", post(register_agent))
        .route("/api/v1/register/service", post(register_service))
        .route("/api/v1/register/tool", post(register_tool))
        .route("/api/v1/register/consumer", post(register_consumer))
        .route("/api/v1/properties", post(publish_property))
        .route("/api/v1/sessions", post(open_session))
        .route("/api/v1/admin/profiles/status", post(admin_set_status))
        .route("/api/v1/reviews", post(submit_review))
        .with_state(state)
}

fn run_suburbs(args: SuburbsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gazetteer = load_gazetteer(&config)?;

    match args.state {
        Some(state) => println!("Suburbs in {}", state.label()),
        None => println!("All known suburbs"),
    }
    for record in gazetteer.in_state(args.state) {
        println!(
            "- {} {} ({}) at {:.4}, {:.4}",
            record.suburb,
            record.postcode,
            record.state.label(),
            record.latitude,
            record.longitude
        );
    }
    Ok(())
}

fn run_expand(args: ExpandArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gazetteer = load_gazetteer(&config)?;
    let radius_km = args.radius_km.unwrap_or(config.search.default_radius_km);

    let query = args.query.trim();
    if !query.is_empty() && gazetteer.find(query).is_none() {
        println!("'{query}' is not in the gazetteer; searches fall back to literal matching");
    }

    let nearby = expand(&gazetteer, &args.query, radius_km);
    println!("Suburbs within {radius_km} km of '{query}': {}", nearby.len());
    for suburb in &nearby {
        println!("- {suburb}");
    }
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn search_properties(
    State(state): State<AppState>,
    Json(filters): Json<PropertyFilters>,
) -> Result<Response, AppError> {
    let results = state.search.properties(&filters)?;
    Ok(Json(results).into_response())
}

async fn search_agencies(
    State(state): State<AppState>,
    Json(filters): Json<AgencyFilters>,
) -> Result<Response, AppError> {
    let results = state.search.agencies(&filters)?;
    Ok(Json(results).into_response())
}

async fn search_agents(
    State(state): State<AppState>,
    Json(filters): Json<AgentFilters>,
) -> Result<Response, AppError> {
    let results = state.search.agents(&filters)?;
    Ok(Json(results).into_response())
}

async fn search_services(
    State(state): State<AppState>,
    Json(filters): Json<ServiceFilters>,
) -> Result<Response, AppError> {
    let results = state.search.service_providers(&filters)?;
    Ok(Json(results).into_response())
}

async fn search_tools(
    State(state): State<AppState>,
    Json(filters): Json<ToolFilters>,
) -> Result<Response, AppError> {
    let results = state.search.tool_providers(&filters)?;
    Ok(Json(results).into_response())
}

fn registration_error_response(error: RegistrationError) -> Response {
    let status = match &error {
        RegistrationError::DuplicateEmail(_) => StatusCode::CONFLICT,
        RegistrationError::InvalidTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RegistrationError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        RegistrationError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        RegistrationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

async fn register_agency(State(state): State<AppState>, Json(intake): Json<NewAgency>) -> Response {
    match state.registration.register_agency(intake) {
        Ok(agency) => (
            StatusCode::ACCEPTED,
            Json(json!({ "id": agency.id, "status": agency.status.label() })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn register_agent(State(state): State<AppState>, Json(intake): Json<NewAgent>) -> Response {
    match state.registration.register_agent(intake) {
        Ok(agent) => (
            StatusCode::ACCEPTED,
            Json(json!({ "id": agent.id, "status": agent.status.label() })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn register_service(
    State(state): State<AppState>,
    Json(intake): Json<NewServiceProvider>,
) -> Response {
    match state.registration.register_service_provider(intake) {
        Ok(provider) => (
            StatusCode::ACCEPTED,
            Json(json!({
                "id": provider.id,
                "service_id": provider.service_id,
                "status": provider.status.label(),
            })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn register_tool(
    State(state): State<AppState>,
    Json(intake): Json<NewToolProvider>,
) -> Response {
    match state.registration.register_tool_provider(intake) {
        Ok(provider) => (
            StatusCode::ACCEPTED,
            Json(json!({
                "id": provider.id,
                "tool_id": provider.tool_id,
                "status": provider.status.label(),
            })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn register_consumer(
    State(state): State<AppState>,
    Json(intake): Json<NewConsumer>,
) -> Response {
    match state.registration.register_consumer(intake) {
        Ok(consumer) => (StatusCode::CREATED, Json(json!({ "id": consumer.id }))).into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn publish_property(State(state): State<AppState>, Json(property): Json<Property>) -> Response {
    match state.registration.publish_property(property) {
        Ok(property) => (
            StatusCode::CREATED,
            Json(json!({ "id": property.property_id })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct SignInRequest {
    role: Role,
    email: String,
    password: String,
}

async fn open_session(State(state): State<AppState>, Json(request): Json<SignInRequest>) -> Response {
    match state
        .gate
        .sign_in(request.role, &request.email, &request.password)
    {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(error) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct StatusChangeRequest {
    admin_email: String,
    kind: ProfileKind,
    id: ProfileId,
    status: ProfileStatus,
}

async fn admin_set_status(
    State(state): State<AppState>,
    Json(request): Json<StatusChangeRequest>,
) -> Response {
    // The approvals screen is only reachable by admin accounts.
    if !is_admin_email(&request.admin_email) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "admin access required" })),
        )
            .into_response();
    }

    match state
        .registration
        .set_status(request.kind, &request.id, request.status)
    {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "id": request.id, "status": request.status.label() })),
        )
            .into_response(),
        Err(error) => registration_error_response(error),
    }
}

async fn submit_review(State(state): State<AppState>, Json(review): Json<NewReview>) -> Response {
    match state.reviews.submit(review) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error @ ReviewError::RatingOutOfRange(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

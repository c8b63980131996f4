pub mod api;
mod auth;
mod config;
mod datasets;
mod models;
mod services;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::AppState;
use auth::SessionManager;
use config::Config;
use services::clock::WallClock;

#[derive(OpenApi)]
#[openapi(
    info(title = "MetroMind Dashboard API", version = "0.1.0"),
    paths(
        api::auth::login,
        api::auth::demo_login,
        api::auth::logout,
        api::operations::get_dashboard,
        api::operations::refresh_dashboard,
        api::admin::get_dashboard,
        api::admin::select_mode,
        api::admin::refresh_dashboard,
        api::stations::list_stations,
        api::health::health_check,
        api::system::get_system_info,
    ),
    components(schemas(
        api::ErrorResponse,
        api::auth::LoginRequest,
        api::auth::LoginResponse,
        api::auth::DemoLoginRequest,
        api::operations::OperationsDashboardResponse,
        api::admin::AdminDashboardResponse,
        api::admin::ModeRequest,
        api::stations::StationListResponse,
        api::stations::StationLoadView,
        api::health::HealthResponse,
        api::system::SystemInfoResponse,
        auth::Role,
        auth::User,
        models::OperatingMode,
        models::PassengerSample,
        models::TrainScheduleEntry,
        models::AlertEntry,
        models::AlertKind,
        models::AlertPriority,
        models::CostSample,
        models::EnergySplit,
        models::OperationsMetrics,
        models::AdminMetrics,
        models::OperationsBundle,
        models::AdminBundle,
        models::Trend,
        models::LoadIntensity,
        services::classify::EfficiencyRating,
    )),
    tags(
        (name = "auth", description = "Login gate and session handling"),
        (name = "operations", description = "Operations dashboard data"),
        (name = "admin", description = "Admin dashboard data and mode control"),
        (name = "stations", description = "Station density heatmap"),
        (name = "health", description = "Service liveness"),
        (name = "system", description = "Server information")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Load config
    let config = Config::load("config.yaml").expect("Failed to load config");
    tracing::info!(bind_addr = %config.bind_addr, "Loaded configuration");

    // Surface the quirks baked into the literal tables
    let issues = datasets::issues::scan();
    for issue in &issues {
        tracing::debug!(table = issue.table, detail = %issue.detail, "Dataset quirk");
    }
    tracing::info!(issues = issues.len(), "Dataset tables scanned");

    // Build CORS layer based on config
    let cors_layer = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode explicitly enabled (all origins allowed) - DO NOT USE IN PRODUCTION");
        CorsLayer::permissive()
    } else if !config.cors_origins.is_empty() {
        tracing::info!(origins = ?config.cors_origins, "CORS: Restricting to configured origins");
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::HeaderName::from_static(api::SESSION_HEADER),
            ])
    } else {
        panic!("CORS configuration error: Either set 'cors_origins' with allowed origins, or set 'cors_permissive: true' for development");
    };

    // Start the minute tick feeding the header clock
    let clock = WallClock::new();
    clock.spawn_tick();

    let state = AppState {
        sessions: SessionManager::new(config.timing, config.rng_seed),
        clock,
        started_at: std::time::Instant::now(),
    };

    // Build the app
    let app = Router::new()
        .route("/", get(root))
        .nest("/api", api::router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Server running on http://{}", config.bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

async fn root() -> &'static str {
    "MetroMind Dashboard API"
}

//! Route definitions for the Society Hub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; uploaded
//! images are served statically under `/uploads`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(resident_routes())
        .merge(notice_routes())
        .merge(poll_routes())
        .merge(booking_routes())
        .merge(lostfound_routes())
        .merge(chat_routes())
        .merge(maintenance_routes())
        .merge(report_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);
    let uploads = ServeDir::new(state.images.root());

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/uploads", uploads)
        // Room for the multipart envelope around the image itself.
        .layer(DefaultBodyLimit::max(max_upload + 64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Resident directory endpoints
fn resident_routes() -> Router<AppState> {
    Router::new()
        .route("/residents", get(handlers::resident::list))
        .route("/residents/{id}", get(handlers::resident::get))
        .route("/residents/{id}", put(handlers::resident::update))
}

/// Notice board endpoints
fn notice_routes() -> Router<AppState> {
    Router::new()
        .route("/notices", get(handlers::notice::list))
        .route("/notices", post(handlers::notice::create))
        .route("/notices/{id}", get(handlers::notice::get))
        .route("/notices/{id}", delete(handlers::notice::delete))
}

/// Poll endpoints, nested under notices plus vote routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/notices/{id}/poll", post(handlers::poll::create))
        .route("/notices/{id}/poll", get(handlers::poll::get_by_notice))
        .route("/polls/{id}/vote", post(handlers::poll::vote))
        .route("/polls/{id}/vote", put(handlers::poll::change_vote))
}

/// Facility booking endpoints
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create))
        .route("/bookings", get(handlers::booking::list_mine))
        .route("/bookings/all", get(handlers::booking::list_all))
        .route("/bookings/{id}/status", patch(handlers::booking::set_status))
        .route("/bookings/{id}/cancel", post(handlers::booking::cancel))
        .route("/bookings/{id}", delete(handlers::booking::delete))
}

/// Lost-and-found endpoints
fn lostfound_routes() -> Router<AppState> {
    Router::new()
        .route("/lostfound", get(handlers::lostfound::list))
        .route("/lostfound", post(handlers::lostfound::create))
        .route("/lostfound/{id}", get(handlers::lostfound::get))
        .route(
            "/lostfound/{id}/resolve",
            patch(handlers::lostfound::resolve),
        )
        .route("/lostfound/{id}", delete(handlers::lostfound::delete))
}

/// Chat endpoints
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/lostfound/{id}/chat", post(handlers::chat::open))
        .route("/chats", get(handlers::chat::list_mine))
        .route("/chats/{id}", get(handlers::chat::get))
        .route("/chats/{id}/messages", post(handlers::chat::send_message))
}

/// Maintenance/complaint endpoints
fn maintenance_routes() -> Router<AppState> {
    Router::new()
        .route("/maintenance", post(handlers::maintenance::create))
        .route("/maintenance", get(handlers::maintenance::list_mine))
        .route("/maintenance/all", get(handlers::maintenance::list_all))
        .route("/maintenance/{id}", get(handlers::maintenance::get))
        .route(
            "/maintenance/{id}/status",
            patch(handlers::maintenance::set_status),
        )
        .route(
            "/maintenance/{id}/cancel",
            post(handlers::maintenance::cancel),
        )
}

/// Admin report endpoints
fn report_routes() -> Router<AppState> {
    Router::new().route(
        "/reports/maintenance/monthly",
        get(handlers::report::monthly_maintenance),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}

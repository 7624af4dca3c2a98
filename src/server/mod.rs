//! HTTP surface over the standings resolver

use axum::Router;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::error::AppError;
use crate::football::StandingsResolver;

pub mod dto;
pub mod handlers;
pub mod openapi;

use openapi::{ApiDoc, OPENAPI_PATH};

/// Builds the `/standings` router with CORS and request tracing.
/// The OpenAPI document is built once and served as static JSON.
pub fn router(resolver: Arc<StandingsResolver>) -> Router {
    let openapi_doc = Arc::new(ApiDoc::openapi());

    Router::new()
        .route("/standings/countries", get(handlers::get_countries))
        .route("/standings/leagues", get(handlers::get_leagues))
        .route("/standings/teams", get(handlers::get_teams))
        .route(
            "/standings/league/:league_id",
            get(handlers::get_league_standings),
        )
        .route("/standings/team", get(handlers::get_team_standing))
        .route(
            "/standings/offline-mode",
            get(handlers::get_offline_mode).post(handlers::set_offline_mode),
        )
        .route("/standings/cache-stats", get(handlers::get_cache_stats))
        .route(
            OPENAPI_PATH,
            get(move || async move {
                ([(header::CACHE_CONTROL, "no-store")], Json(openapi_doc.as_ref())).into_response()
            }),
        )
        .with_state(resolver)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serves the router on `listener` until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    resolver: Arc<StandingsResolver>,
    shutdown: F,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::server_error(format!("Failed to read listener address: {e}")))?;
    info!("Serving football standings on http://{local_addr}");

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::server_error(format!("Server terminated: {e}")))?;

    info!("Server stopped");
    Ok(())
}

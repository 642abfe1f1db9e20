pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;

use crate::{
    config::Settings,
    service::ServiceContext,
};
use state::AppState;

pub fn create_app(service_context: Arc<ServiceContext>, settings: Arc<Settings>) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))

        .nest("/announcements", announcement_routes())

        .with_state(app_state)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn announcement_routes() -> Router<AppState> {
    // Reads are public; writes check `teacher_username` in the service.
    Router::new()
        .route(
            "/",
            get(handlers::announcements::list_active).post(handlers::announcements::create),
        )
        .route("/all", get(handlers::announcements::list_all))
        .route(
            "/:id",
            put(handlers::announcements::update).delete(handlers::announcements::delete),
        )
}

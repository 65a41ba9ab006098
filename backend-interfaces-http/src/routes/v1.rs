use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    admin_event_handlers,
    admin_show_handlers,
    ops_handlers,
    ticket_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/tickets/prepare",
            axum::routing::post(ticket_handlers::prepare_ticket),
        )
        .route(
            "/api/tickets/finalize",
            axum::routing::post(ticket_handlers::finalize_ticket),
        )
        .route(
            "/api/tickets/users/:wallet",
            axum::routing::get(ticket_handlers::list_user_tickets),
        )
        .route(
            "/api/admin/events",
            axum::routing::post(admin_event_handlers::create_event)
                .get(admin_event_handlers::list_events),
        )
        .route(
            "/api/admin/events/:event_id",
            axum::routing::get(admin_event_handlers::get_event)
                .put(admin_event_handlers::update_event)
                .delete(admin_event_handlers::delete_event),
        )
        .route(
            "/api/admin/shows",
            axum::routing::post(admin_show_handlers::create_show)
                .get(admin_show_handlers::list_shows),
        )
        .route(
            "/api/admin/shows/:show_id",
            axum::routing::get(admin_show_handlers::get_show)
                .put(admin_show_handlers::update_show),
        )
        .route(
            "/api/admin/shows/:show_id/metadata-template",
            axum::routing::post(admin_show_handlers::setup_metadata_template),
        )
        .route(
            "/api/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/api/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/api/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

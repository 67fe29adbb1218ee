use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/movies", get(handlers::list_movies))
        .route("/movies", post(handlers::add_movie))
        .route("/movies/:id", patch(handlers::update_movie))
        .route("/movies/:id", delete(handlers::remove_movie))
        .route("/movies/:id/like", post(handlers::like_movie))
        .route("/movies/:id/dislike", post(handlers::dislike_movie))
        .route("/movies/:id/interaction", get(handlers::get_interaction))
        // Recommendation slots
        .route(
            "/translator-categories",
            get(handlers::get_translator_categories),
        )
        .route("/recommendations", get(handlers::list_recommendations))
        .route(
            "/recommendations/:category",
            get(handlers::get_recommended_movie),
        )
        .route(
            "/recommendations/:category",
            put(handlers::update_recommendation),
        )
        // Contact
        .route("/contact", post(handlers::submit_contact))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::{filter_movies, MovieFilter};
use crate::catalog::CatalogStore;
use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{CategoryRecommendation, Movie, MovieUpdate};
use crate::services::contact::{ContactOutcome, ContactRequest};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    /// Comma-separated category names; any match qualifies
    pub categories: Option<String>,
    pub mood: Option<String>,
}

impl MovieListQuery {
    fn into_filter(self) -> MovieFilter {
        let categories = self
            .categories
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|category| !category.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        MovieFilter {
            categories,
            mood: self.mood,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    /// Whether the vote changed anything; repeat votes and unknown ids
    /// report `false`
    pub changed: bool,
    pub likes: u32,
    pub dislikes: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResponse {
    pub movie_id: String,
    pub liked: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecommendationRequest {
    pub movie_id: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the catalog, filtered by caller-supplied category and mood state
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> Json<Vec<Movie>> {
    let filter = query.into_filter();
    let catalog = state.catalog.read().await;
    let movies = filter_movies(catalog.movies(), &filter)
        .into_iter()
        .cloned()
        .collect();
    Json(movies)
}

/// Add a movie to the catalog
pub async fn add_movie(
    State(state): State<AppState>,
    Json(movie): Json<Movie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let mut catalog = state.catalog.write().await;
    catalog.add_movie(movie.clone())?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Merge partial fields into a movie
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<MovieUpdate>,
) -> AppResult<StatusCode> {
    let mut catalog = state.catalog.write().await;
    catalog.update_movie(&id, update)?;
    Ok(StatusCode::OK)
}

/// Remove a movie and cascade to interactions and recommendation slots
pub async fn remove_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let mut catalog = state.catalog.write().await;
    catalog.remove_movie(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record a like for a movie
pub async fn like_movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<VoteResponse>> {
    let mut catalog = state.catalog.write().await;
    let changed = catalog.like_movie(&id).await?;

    tracing::info!(
        request_id = %request_id,
        movie_id = %id,
        changed,
        "Like vote processed"
    );

    Ok(Json(vote_response(&catalog, &id, changed)))
}

/// Record a dislike for a movie
pub async fn dislike_movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<VoteResponse>> {
    let mut catalog = state.catalog.write().await;
    let changed = catalog.dislike_movie(&id).await?;

    tracing::info!(
        request_id = %request_id,
        movie_id = %id,
        changed,
        "Dislike vote processed"
    );

    Ok(Json(vote_response(&catalog, &id, changed)))
}

fn vote_response(catalog: &CatalogStore, id: &str, changed: bool) -> VoteResponse {
    let (likes, dislikes) = catalog
        .movie(id)
        .map(|movie| (movie.likes, movie.dislikes))
        .unwrap_or_default();

    VoteResponse {
        changed,
        likes,
        dislikes,
    }
}

/// Get the current user's vote record for a movie; `liked` is null when no
/// vote has been recorded
pub async fn get_interaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<InteractionResponse> {
    let catalog = state.catalog.read().await;
    let liked = catalog.user_interaction(&id).and_then(|i| i.liked);
    Json(InteractionResponse { movie_id: id, liked })
}

/// Get the fixed translator-category slot names
pub async fn get_translator_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let catalog = state.catalog.read().await;
    Json(
        catalog
            .translator_categories()
            .iter()
            .map(|category| category.to_string())
            .collect(),
    )
}

/// Get all recommendation slot assignments
pub async fn list_recommendations(
    State(state): State<AppState>,
) -> Json<Vec<CategoryRecommendation>> {
    let catalog = state.catalog.read().await;
    Json(catalog.recommendations().to_vec())
}

/// Resolve a recommendation slot to its full movie record
pub async fn get_recommended_movie(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Movie>> {
    let catalog = state.catalog.read().await;
    let movie = catalog
        .recommended_movie(&category)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No recommendation for category {}", category)))?;
    Ok(Json(movie))
}

/// Assign a movie to a recommendation slot
pub async fn update_recommendation(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<UpdateRecommendationRequest>,
) -> AppResult<StatusCode> {
    let mut catalog = state.catalog.write().await;
    catalog.update_recommendation(&category, &request.movie_id)?;
    Ok(StatusCode::OK)
}

/// Relay a contact-form submission
///
/// Transport and decode failures are reported as a generic retry message,
/// never a failed response; the relay's own rejection message passes
/// through verbatim.
pub async fn submit_contact(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ContactRequest>,
) -> Json<ContactOutcome> {
    match state.relay.submit(&request).await {
        Ok(outcome) => Json(outcome),
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Contact form relay failed"
            );
            Json(ContactOutcome {
                success: false,
                message: "An unexpected error occurred. Please try again later.".to_string(),
            })
        }
    }
}

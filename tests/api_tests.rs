use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;

use movie_mood_api::api::{create_router, AppState};
use movie_mood_api::catalog::CatalogStore;
use movie_mood_api::error::{AppError, AppResult};
use movie_mood_api::services::contact::{ContactOutcome, ContactRelay, ContactRequest};
use movie_mood_api::store::MemoryStore;

struct StubRelay {
    outcome: ContactOutcome,
}

#[async_trait]
impl ContactRelay for StubRelay {
    async fn submit(&self, _request: &ContactRequest) -> AppResult<ContactOutcome> {
        Ok(self.outcome.clone())
    }
}

struct FailingRelay;

#[async_trait]
impl ContactRelay for FailingRelay {
    async fn submit(&self, _request: &ContactRequest) -> AppResult<ContactOutcome> {
        Err(AppError::ExternalApi("connection reset".to_string()))
    }
}

fn create_test_server_with_relay(relay: Arc<dyn ContactRelay>) -> TestServer {
    let catalog = CatalogStore::load(Arc::new(MemoryStore::new()));
    let state = AppState::new(catalog, relay);
    TestServer::new(create_router(state)).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with_relay(Arc::new(StubRelay {
        outcome: ContactOutcome {
            success: true,
            message: "sent".to_string(),
        },
    }))
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_seed_catalog_is_served() {
    let server = create_test_server();

    let response = server.get("/movies").await;
    response.assert_status_ok();

    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 6);
    assert_eq!(movies[0]["id"], "1");
    assert_eq!(movies[0]["title"], "Inception");
    assert_eq!(movies[0]["likes"], 124);
}

#[tokio::test]
async fn test_filter_by_categories_and_mood() {
    let server = create_test_server();

    // Any-of across categories
    let response = server.get("/movies?categories=Fantasy,Romance").await;
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 2);

    // Mood narrows further
    let response = server.get("/movies?categories=Drama&mood=Nostalgic").await;
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Forrest Gump");

    let response = server.get("/movies?mood=Sleepy").await;
    let movies: Vec<serde_json::Value> = response.json();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_add_and_list_movie() {
    let server = create_test_server();

    let response = server
        .post("/movies")
        .json(&json!({
            "id": "7",
            "title": "Spirited Away",
            "description": "A young girl wanders into a world of spirits.",
            "imageUrl": "/spirited.jpg",
            "trailerUrl": "https://example.com/spirited",
            "categories": ["Animation", "Fantasy"],
            "moods": ["Adventurous"],
            "likes": 0,
            "dislikes": 0
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["title"], "Spirited Away");

    let response = server.get("/movies").await;
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 7);
    assert_eq!(movies[6]["id"], "7");
}

#[tokio::test]
async fn test_add_duplicate_movie_id_is_rejected() {
    let server = create_test_server();

    let body = json!({
        "id": "1",
        "title": "Impostor",
        "description": "Same id as a seed movie.",
        "imageUrl": "/x.jpg",
        "trailerUrl": "https://example.com/x",
        "categories": [],
        "moods": [],
        "likes": 0,
        "dislikes": 0
    });

    let response = server.post("/movies").json(&body).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let response = server.get("/movies").await;
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 6);
}

#[tokio::test]
async fn test_update_movie_merges_fields() {
    let server = create_test_server();

    let response = server
        .patch("/movies/2")
        .json(&json!({ "title": "Shawshank" }))
        .await;
    response.assert_status_ok();

    let response = server.get("/movies").await;
    let movies: Vec<serde_json::Value> = response.json();
    let updated = movies.iter().find(|m| m["id"] == "2").unwrap();
    assert_eq!(updated["title"], "Shawshank");
    assert_eq!(updated["likes"], 256);
}

#[tokio::test]
async fn test_like_is_idempotent_and_dislike_switches() {
    let server = create_test_server();

    let response = server.post("/movies/1/like").await;
    response.assert_status_ok();
    let vote: serde_json::Value = response.json();
    assert_eq!(vote["changed"], true);
    assert_eq!(vote["likes"], 125);
    assert_eq!(vote["dislikes"], 18);

    // Repeat like changes nothing
    let response = server.post("/movies/1/like").await;
    let vote: serde_json::Value = response.json();
    assert_eq!(vote["changed"], false);
    assert_eq!(vote["likes"], 125);

    // Switching undoes the like
    let response = server.post("/movies/1/dislike").await;
    let vote: serde_json::Value = response.json();
    assert_eq!(vote["changed"], true);
    assert_eq!(vote["likes"], 124);
    assert_eq!(vote["dislikes"], 19);

    let response = server.get("/movies/1/interaction").await;
    let interaction: serde_json::Value = response.json();
    assert_eq!(interaction["movieId"], "1");
    assert_eq!(interaction["liked"], false);
}

#[tokio::test]
async fn test_interaction_is_null_without_vote() {
    let server = create_test_server();

    let response = server.get("/movies/3/interaction").await;
    response.assert_status_ok();
    let interaction: serde_json::Value = response.json();
    assert_eq!(interaction["liked"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_remove_movie_cascades() {
    let server = create_test_server();

    server.post("/movies/1/like").await.assert_status_ok();

    let response = server.delete("/movies/1").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // Interaction record is gone with the movie
    let response = server.get("/movies/1/interaction").await;
    let interaction: serde_json::Value = response.json();
    assert_eq!(interaction["liked"], serde_json::Value::Null);

    // Slots that pointed at the movie are cleared, not deleted
    let response = server.get("/recommendations").await;
    let recommendations: Vec<serde_json::Value> = response.json();
    assert_eq!(recommendations.len(), 8);
    let rocky = recommendations
        .iter()
        .find(|r| r["categoryName"] == "Rocky")
        .unwrap();
    assert_eq!(rocky["movieId"], "");

    // And the slot no longer resolves
    let response = server.get("/recommendations/Rocky").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_translator_categories_are_fixed() {
    let server = create_test_server();

    let response = server.get("/translator-categories").await;
    response.assert_status_ok();
    let categories: Vec<String> = response.json();
    assert_eq!(
        categories,
        [
            "Rocky",
            "Gaheza",
            "Savimbi",
            "Sankara",
            "B The Great",
            "Junior Giti",
            "Senior",
            "Dylan"
        ]
    );
}

#[tokio::test]
async fn test_default_recommendation_resolves() {
    let server = create_test_server();

    let response = server.get("/recommendations/Rocky").await;
    response.assert_status_ok();
    let movie: serde_json::Value = response.json();
    assert_eq!(movie["id"], "1");
    assert_eq!(movie["title"], "Inception");
}

#[tokio::test]
async fn test_recommendation_upsert() {
    let server = create_test_server();

    let response = server
        .put("/recommendations/Rocky")
        .json(&json!({ "movieId": "3" }))
        .await;
    response.assert_status_ok();

    let response = server.get("/recommendations/Rocky").await;
    let movie: serde_json::Value = response.json();
    assert_eq!(movie["id"], "3");

    // Unknown category names are appended
    let response = server
        .put("/recommendations/Newcomer")
        .json(&json!({ "movieId": "4" }))
        .await;
    response.assert_status_ok();

    let response = server.get("/recommendations").await;
    let recommendations: Vec<serde_json::Value> = response.json();
    assert_eq!(recommendations.len(), 9);
}

#[tokio::test]
async fn test_unknown_recommendation_is_not_found() {
    let server = create_test_server();
    let response = server.get("/recommendations/Nobody").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_passes_relay_verdict_through() {
    let server = create_test_server_with_relay(Arc::new(StubRelay {
        outcome: ContactOutcome {
            success: false,
            message: "Invalid access key".to_string(),
        },
    }));

    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello!"
        }))
        .await;

    response.assert_status_ok();
    let outcome: serde_json::Value = response.json();
    assert_eq!(outcome["success"], false);
    assert_eq!(outcome["message"], "Invalid access key");
}

#[tokio::test]
async fn test_contact_transport_failure_is_a_generic_retry_message() {
    let server = create_test_server_with_relay(Arc::new(FailingRelay));

    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello!"
        }))
        .await;

    // Never surfaces as an error status
    response.assert_status_ok();
    let outcome: serde_json::Value = response.json();
    assert_eq!(outcome["success"], false);
    assert_eq!(
        outcome["message"],
        "An unexpected error occurred. Please try again later."
    );
}

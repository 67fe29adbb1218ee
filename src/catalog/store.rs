use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{
    CategoryRecommendation, Movie, MovieUpdate, UserInteraction, TRANSLATOR_CATEGORIES,
};
use crate::store::{SliceKey, SnapshotStore};

use super::seed;

/// Owner of all catalog state for the lifetime of the process
///
/// Holds the movie list, the current user's votes, and the recommendation
/// slot assignments. After every successful mutation the affected slices are
/// written whole to the snapshot store; the store is a passive mirror and
/// only read back at initialization.
pub struct CatalogStore {
    movies: Vec<Movie>,
    interactions: Vec<UserInteraction>,
    recommendations: Vec<CategoryRecommendation>,
    store: Arc<dyn SnapshotStore>,
}

impl CatalogStore {
    /// Seeds the built-in catalog, then overrides each slice independently
    /// from its persisted snapshot when one exists and parses
    pub fn load(store: Arc<dyn SnapshotStore>) -> Self {
        let mut catalog = Self {
            movies: seed::default_movies(),
            interactions: Vec::new(),
            recommendations: seed::default_recommendations(),
            store,
        };

        if let Some(movies) = catalog.restore_slice(SliceKey::Movies) {
            catalog.movies = movies;
        }
        if let Some(interactions) = catalog.restore_slice(SliceKey::UserInteractions) {
            catalog.interactions = interactions;
        }
        if let Some(recommendations) = catalog.restore_slice(SliceKey::CategoryRecommendations) {
            catalog.recommendations = recommendations;
        }

        catalog
    }

    /// Reads one slice from the snapshot store. A missing snapshot keeps the
    /// seeded default silently; read and parse failures keep it with a log
    /// line. Failures never cross slice boundaries.
    fn restore_slice<T: DeserializeOwned>(&self, slice: SliceKey) -> Option<Vec<T>> {
        let snapshot = match self.store.load(slice) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(slice = %slice, error = %e, "Failed to read stored snapshot");
                return None;
            }
        };

        match serde_json::from_str(&snapshot) {
            Ok(values) => Some(values),
            Err(e) => {
                tracing::error!(slice = %slice, error = %e, "Failed to parse stored snapshot");
                None
            }
        }
    }

    fn persist<T: Serialize>(&self, slice: SliceKey, values: &[T]) -> AppResult<()> {
        let snapshot = serde_json::to_string(values)?;
        self.store.save(slice, &snapshot)
    }

    fn persist_movies(&self) -> AppResult<()> {
        self.persist(SliceKey::Movies, &self.movies)
    }

    fn persist_interactions(&self) -> AppResult<()> {
        self.persist(SliceKey::UserInteractions, &self.interactions)
    }

    fn persist_recommendations(&self) -> AppResult<()> {
        self.persist(SliceKey::CategoryRecommendations, &self.recommendations)
    }

    /// Full movie list in insertion order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All recommendation slot assignments
    pub fn recommendations(&self) -> &[CategoryRecommendation] {
        &self.recommendations
    }

    /// The fixed translator-category slot names
    pub fn translator_categories(&self) -> &'static [&'static str] {
        &TRANSLATOR_CATEGORIES
    }

    /// Looks up a movie by id
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Appends a movie to the catalog. Ids must be unique; a duplicate is
    /// rejected so that later lookups stay unambiguous.
    pub fn add_movie(&mut self, movie: Movie) -> AppResult<()> {
        if self.movie(&movie.id).is_some() {
            return Err(AppError::InvalidInput(format!(
                "Movie id {} already exists",
                movie.id
            )));
        }

        self.movies.push(movie);
        self.persist_movies()
    }

    /// Removes a movie and cascades: its interaction record is deleted, and
    /// any recommendation slot pointing at it is cleared (the slot record
    /// itself survives). Unknown ids are a silent no-op.
    pub fn remove_movie(&mut self, id: &str) -> AppResult<()> {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        if self.movies.len() == before {
            return Ok(());
        }

        self.interactions.retain(|i| i.movie_id != id);
        for rec in self.recommendations.iter_mut().filter(|r| r.movie_id == id) {
            rec.movie_id.clear();
        }

        self.persist_movies()?;
        self.persist_interactions()?;
        self.persist_recommendations()
    }

    /// Merges the supplied fields into the matching movie. Unknown ids are a
    /// silent no-op.
    pub fn update_movie(&mut self, id: &str, update: MovieUpdate) -> AppResult<()> {
        let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(());
        };

        movie.apply_update(update);
        self.persist_movies()
    }

    /// Records a like for the movie. Returns `false` without changes when
    /// the movie is already liked or unknown.
    pub async fn like_movie(&mut self, id: &str) -> AppResult<bool> {
        self.vote(id, true)
    }

    /// Records a dislike for the movie. Returns `false` without changes when
    /// the movie is already disliked or unknown.
    pub async fn dislike_movie(&mut self, id: &str) -> AppResult<bool> {
        self.vote(id, false)
    }

    /// A repeat vote is a no-op; a switched vote undoes the opposing count.
    /// Every decrement is paired with an increment recorded in the
    /// interaction state, so counters stay non-negative without a clamp.
    fn vote(&mut self, id: &str, liked: bool) -> AppResult<bool> {
        let prior = self.user_interaction(id).and_then(|i| i.liked);
        if prior == Some(liked) {
            return Ok(false);
        }

        let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };

        if liked {
            movie.likes += 1;
            if prior == Some(false) {
                movie.dislikes -= 1;
            }
        } else {
            movie.dislikes += 1;
            if prior == Some(true) {
                movie.likes -= 1;
            }
        }

        match self.interactions.iter_mut().find(|i| i.movie_id == id) {
            Some(interaction) => interaction.liked = Some(liked),
            None => self.interactions.push(UserInteraction {
                movie_id: id.to_string(),
                liked: Some(liked),
            }),
        }

        self.persist_movies()?;
        self.persist_interactions()?;
        Ok(true)
    }

    /// The current user's vote record for a movie, if any
    pub fn user_interaction(&self, id: &str) -> Option<&UserInteraction> {
        self.interactions.iter().find(|i| i.movie_id == id)
    }

    /// Assigns a movie to a recommendation slot, appending the slot record
    /// if the category was never mapped before
    pub fn update_recommendation(&mut self, category_name: &str, movie_id: &str) -> AppResult<()> {
        match self
            .recommendations
            .iter_mut()
            .find(|r| r.category_name == category_name)
        {
            Some(rec) => rec.movie_id = movie_id.to_string(),
            None => self.recommendations.push(CategoryRecommendation {
                category_name: category_name.to_string(),
                movie_id: movie_id.to_string(),
            }),
        }

        self.persist_recommendations()
    }

    /// Resolves a slot to its full movie record. `None` when the category is
    /// unmapped, the slot is unset, or the movie no longer exists.
    pub fn recommended_movie(&self, category_name: &str) -> Option<&Movie> {
        let rec = self
            .recommendations
            .iter()
            .find(|r| r.category_name == category_name)?;
        self.movie(&rec.movie_id)
    }
}

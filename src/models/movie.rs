use serde::{Deserialize, Serialize};

/// Represents a movie in the catalog
///
/// Serialized field names are camelCase so persisted snapshots and API
/// payloads share one layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier, immutable once created
    pub id: String,
    /// Display title
    pub title: String,
    /// Short synopsis shown on the movie card
    pub description: String,
    /// Poster image URL
    pub image_url: String,
    /// Embedded trailer URL
    pub trailer_url: String,
    /// Category labels; display order preserved
    pub categories: Vec<String>,
    /// Mood labels
    pub moods: Vec<String>,
    /// Like counter
    pub likes: u32,
    /// Dislike counter
    pub dislikes: u32,
}

/// Partial movie update; absent fields are left unchanged. The id is not
/// updatable.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub trailer_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub moods: Option<Vec<String>>,
    pub likes: Option<u32>,
    pub dislikes: Option<u32>,
}

impl Movie {
    /// Merges the supplied fields into this movie
    pub fn apply_update(&mut self, update: MovieUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(trailer_url) = update.trailer_url {
            self.trailer_url = trailer_url;
        }
        if let Some(categories) = update.categories {
            self.categories = categories;
        }
        if let Some(moods) = update.moods {
            self.moods = moods;
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
        if let Some(dislikes) = update.dislikes {
            self.dislikes = dislikes;
        }
    }
}

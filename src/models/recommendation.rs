use serde::{Deserialize, Serialize};

/// The fixed set of translator-category recommendation slots
pub const TRANSLATOR_CATEGORIES: [&str; 8] = [
    "Rocky",
    "Gaheza",
    "Savimbi",
    "Sankara",
    "B The Great",
    "Junior Giti",
    "Senior",
    "Dylan",
];

/// Maps one translator category to its recommended movie
///
/// `movie_id` is a weak reference; an empty string means the slot is unset.
/// At most one record exists per category name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecommendation {
    /// One of `TRANSLATOR_CATEGORIES`, or a name appended dynamically
    pub category_name: String,
    /// Id of the recommended movie, empty when unset
    pub movie_id: String,
}

impl CategoryRecommendation {
    pub fn is_unset(&self) -> bool {
        self.movie_id.is_empty()
    }
}

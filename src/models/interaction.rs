use serde::{Deserialize, Serialize};

/// The current user's recorded vote on one movie
///
/// `movie_id` is a weak reference: removal of the movie removes the record,
/// nothing else enforces integrity. At most one record exists per movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInteraction {
    /// Id of the voted-on movie
    pub movie_id: String,
    /// `Some(true)` liked, `Some(false)` disliked, `None` no vote
    pub liked: Option<bool>,
}

impl UserInteraction {
    pub fn is_liked(&self) -> bool {
        self.liked == Some(true)
    }

    pub fn is_disliked(&self) -> bool {
        self.liked == Some(false)
    }
}

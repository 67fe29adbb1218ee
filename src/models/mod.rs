pub mod interaction;
pub mod movie;
pub mod recommendation;

pub use interaction::UserInteraction;
pub use movie::{Movie, MovieUpdate};
pub use recommendation::{CategoryRecommendation, TRANSLATOR_CATEGORIES};

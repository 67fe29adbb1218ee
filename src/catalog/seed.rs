use crate::models::{CategoryRecommendation, Movie, TRANSLATOR_CATEGORIES};

const PLACEHOLDER_POSTER: &str = "/placeholder.svg?height=400&width=300";

fn movie(
    id: &str,
    title: &str,
    description: &str,
    trailer_url: &str,
    categories: &[&str],
    moods: &[&str],
    likes: u32,
    dislikes: u32,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: PLACEHOLDER_POSTER.to_string(),
        trailer_url: trailer_url.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        moods: moods.iter().map(|m| m.to_string()).collect(),
        likes,
        dislikes,
    }
}

/// The built-in default catalog used until persisted state exists
pub fn default_movies() -> Vec<Movie> {
    vec![
        movie(
            "1",
            "Inception",
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "https://www.youtube.com/embed/YoHD9XEInc0",
            &["Sci-Fi", "Action", "Thriller"],
            &["Thoughtful", "Excited"],
            124,
            18,
        ),
        movie(
            "2",
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "https://www.youtube.com/embed/6hB3S9bIaco",
            &["Drama"],
            &["Inspired", "Thoughtful"],
            256,
            5,
        ),
        movie(
            "3",
            "The Dark Knight",
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "https://www.youtube.com/embed/EXeTwQWrcwY",
            &["Action", "Crime", "Drama"],
            &["Excited", "Thoughtful"],
            198,
            22,
        ),
        movie(
            "4",
            "Pulp Fiction",
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
            "https://www.youtube.com/embed/s7EdQ4FqbhY",
            &["Crime", "Drama"],
            &["Excited", "Thoughtful"],
            167,
            31,
        ),
        movie(
            "5",
            "The Lord of the Rings: The Fellowship of the Ring",
            "A meek Hobbit from the Shire and eight companions set out on a journey to destroy the powerful One Ring and save Middle-earth from the Dark Lord Sauron.",
            "https://www.youtube.com/embed/V75dMMIW2B4",
            &["Adventure", "Drama", "Fantasy"],
            &["Adventurous", "Excited"],
            231,
            12,
        ),
        movie(
            "6",
            "Forrest Gump",
            "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75, whose only desire is to be reunited with his childhood sweetheart.",
            "https://www.youtube.com/embed/bLvqoHBptjg",
            &["Drama", "Romance"],
            &["Nostalgic", "Thoughtful", "Inspired"],
            245,
            8,
        ),
    ]
}

/// Default slot assignments: each of the 8 categories starts on one of the
/// 6 seed movies, wrapping around
pub fn default_recommendations() -> Vec<CategoryRecommendation> {
    const SEED_MOVIE_IDS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "1", "2"];

    TRANSLATOR_CATEGORIES
        .iter()
        .zip(SEED_MOVIE_IDS)
        .map(|(category, movie_id)| CategoryRecommendation {
            category_name: category.to_string(),
            movie_id: movie_id.to_string(),
        })
        .collect()
}

use serde::Deserialize;

use crate::models::Movie;

/// Caller-supplied filter state for the catalog view
///
/// Filtering is a pure function of the movie list; the catalog owns no
/// filter state.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MovieFilter {
    /// Selected category labels; a movie matches when any of them is among
    /// its categories. Empty means no category restriction.
    pub categories: Vec<String>,
    /// Selected mood; a movie matches when it is among its moods
    pub mood: Option<String>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        let matches_categories = self.categories.is_empty()
            || self
                .categories
                .iter()
                .any(|category| movie.categories.contains(category));

        let matches_mood = self
            .mood
            .as_ref()
            .map_or(true, |mood| movie.moods.contains(mood));

        matches_categories && matches_mood
    }
}

/// Applies the filter, preserving catalog order
pub fn filter_movies<'a>(movies: &'a [Movie], filter: &MovieFilter) -> Vec<&'a Movie> {
    movies.iter().filter(|movie| filter.matches(movie)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_movies;

    #[test]
    fn test_empty_filter_matches_everything() {
        let movies = default_movies();
        let filtered = filter_movies(&movies, &MovieFilter::default());
        assert_eq!(filtered.len(), movies.len());
    }

    #[test]
    fn test_category_filter_matches_any_of() {
        let movies = default_movies();
        let filter = MovieFilter {
            categories: vec!["Fantasy".to_string(), "Romance".to_string()],
            mood: None,
        };

        let filtered = filter_movies(&movies, &filter);
        let titles: Vec<&str> = filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "The Lord of the Rings: The Fellowship of the Ring",
                "Forrest Gump"
            ]
        );
    }

    #[test]
    fn test_mood_filter_requires_membership() {
        let movies = default_movies();
        let filter = MovieFilter {
            categories: Vec::new(),
            mood: Some("Nostalgic".to_string()),
        };

        let filtered = filter_movies(&movies, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Forrest Gump");
    }

    #[test]
    fn test_category_and_mood_combine_conjunctively() {
        let movies = default_movies();
        let filter = MovieFilter {
            categories: vec!["Drama".to_string()],
            mood: Some("Excited".to_string()),
        };

        let filtered = filter_movies(&movies, &filter);
        let titles: Vec<&str> = filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "The Dark Knight",
                "Pulp Fiction",
                "The Lord of the Rings: The Fellowship of the Ring"
            ]
        );
    }

    #[test]
    fn test_no_matches_yields_empty_view() {
        let movies = default_movies();
        let filter = MovieFilter {
            categories: vec!["Documentary".to_string()],
            mood: None,
        };

        assert!(filter_movies(&movies, &filter).is_empty());
    }
}

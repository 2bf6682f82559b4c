//! Movie resources.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::common::{
    CompanySummary, Genre, ListSummary, Paged, ProductionCountry, SpokenLanguage,
};
use super::media::CollectionSummary;

/// Response from `movie/{movie_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date (`YYYY-MM-DD`).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// `Released`, `In Production`, ...
    pub status: String,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Homepage.
    pub homepage: Option<String>,
    /// Collection the movie belongs to.
    pub belongs_to_collection: Option<CollectionSummary>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Production companies.
    pub production_companies: Vec<CompanySummary>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Whether this entry is a video release.
    pub video: bool,
}

/// One certified release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    /// Certification (e.g. `R`, `PG-13`).
    pub certification: String,
    /// Content descriptors.
    pub descriptors: Vec<String>,
    /// Language.
    pub iso_639_1: String,
    /// Free-form note.
    pub note: String,
    /// Release timestamp.
    pub release_date: String,
    /// 1 premiere, 2 limited, 3 theatrical, 4 digital, 5 physical, 6 TV.
    #[serde(rename = "type")]
    pub kind: u8,
}

/// Releases in one country.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryReleaseDates {
    /// Country code.
    pub iso_3166_1: String,
    /// Releases.
    pub release_dates: Vec<ReleaseDate>,
}

/// Response from `movie/{movie_id}/release_dates`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDates {
    /// Movie ID.
    pub id: u64,
    /// Releases per country.
    pub results: Vec<CountryReleaseDates>,
}

/// Streaming or retail provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProvider {
    /// Provider ID.
    pub provider_id: u64,
    /// Provider name.
    pub provider_name: String,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Display priority.
    pub display_priority: u32,
}

/// Providers offering a title in one region.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegionProviders {
    /// `JustWatch` link.
    pub link: String,
    /// Subscription.
    pub flatrate: Vec<WatchProvider>,
    /// Rental.
    pub rent: Vec<WatchProvider>,
    /// Purchase.
    pub buy: Vec<WatchProvider>,
    /// Free.
    pub free: Vec<WatchProvider>,
    /// Ad-supported.
    pub ads: Vec<WatchProvider>,
}

/// Response from `movie/{movie_id}/watch/providers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProviderAvailability {
    /// Movie ID.
    pub id: u64,
    /// Providers per region code.
    pub results: BTreeMap<String, RegionProviders>,
}

/// Response from `movie/{movie_id}/lists`.
pub type MovieListMemberships = Paged<ListSummary>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_watch_providers_keyed_by_region() {
        // Arrange
        let json = r#"{"id":550,"results":{"US":{"link":"https://www.themoviedb.org/movie/550/watch?locale=US","rent":[{"provider_id":2,"provider_name":"Apple TV","display_priority":4}]}}}"#;

        // Act
        let availability: WatchProviderAvailability = serde_json::from_str(json).unwrap();

        // Assert
        let us = availability.results.get("US").unwrap();
        assert_eq!(us.rent.len(), 1);
        assert!(us.flatrate.is_empty());
        assert_eq!(us.rent.first().unwrap().provider_name, "Apple TV");
    }

    #[test]
    fn test_movie_details_null_collection() {
        // Arrange
        let json = r#"{"id":550,"title":"Fight Club","belongs_to_collection":null,"runtime":null}"#;

        // Act
        let details: MovieDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert!(details.belongs_to_collection.is_none());
        assert!(details.runtime.is_none());
    }
}

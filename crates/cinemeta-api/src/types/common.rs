//! Shapes shared across many endpoints.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One page of a paginated result.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Paged<T> {
    /// Current page (1-based).
    pub page: u32,
    /// Results on this page.
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Inclusive date window attached to date-bound movie lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// Latest date (`YYYY-MM-DD`).
    pub maximum: String,
    /// Earliest date (`YYYY-MM-DD`).
    pub minimum: String,
}

/// Page of results with the date window they were selected from.
#[derive(Debug, Clone, Deserialize)]
pub struct DatedPage<T> {
    /// Release window.
    #[serde(default)]
    pub dates: DateRange,
    /// The page itself.
    #[serde(flatten)]
    pub page: Paged<T>,
}

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Company or network as embedded in other resources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanySummary {
    /// Company ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// ISO 3166-1 country code.
    pub origin_country: Option<String>,
}

/// Country of production.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// English name.
    pub name: String,
}

/// Language spoken in a title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    /// English name.
    pub english_name: String,
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// Native name.
    pub name: String,
}

/// Image metadata (poster, backdrop, profile, still).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Width / height.
    pub aspect_ratio: f64,
    /// Path to append to a configured image base URL.
    pub file_path: String,
    /// Pixel height.
    pub height: u32,
    /// Language of any text in the image.
    pub iso_639_1: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Pixel width.
    pub width: u32,
}

/// Logo entry of a company or network image listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Logo {
    /// Width / height.
    pub aspect_ratio: f64,
    /// Image path.
    pub file_path: String,
    /// File extension (`.svg`, `.png`).
    pub file_type: String,
    /// Pixel height.
    pub height: u32,
    /// Image ID.
    pub id: String,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Pixel width.
    pub width: u32,
}

/// Images attached to a resource. Which lists are present depends on the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    /// Resource ID.
    pub id: u64,
    /// Backdrops.
    pub backdrops: Vec<Image>,
    /// Logos (movies, series).
    pub logos: Vec<Image>,
    /// Posters.
    pub posters: Vec<Image>,
    /// Profile pictures (people).
    pub profiles: Vec<Image>,
    /// Stills (episodes).
    pub stills: Vec<Image>,
}

/// Logos of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogoSet {
    /// Company or network ID.
    pub id: u64,
    /// Logos.
    pub logos: Vec<Logo>,
}

/// Trailer, teaser, clip.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Language code.
    pub iso_639_1: String,
    /// Country code.
    pub iso_3166_1: String,
    /// Key on the hosting site.
    pub key: String,
    /// Title.
    pub name: String,
    /// Hosting site (`YouTube`, `Vimeo`).
    pub site: String,
    /// Resolution (e.g. 1080).
    pub size: u32,
    /// Kind (`Trailer`, `Teaser`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the video is official.
    pub official: bool,
    /// Publication timestamp.
    pub published_at: String,
}

/// Videos of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoList {
    /// Resource ID.
    pub id: u64,
    /// Videos.
    pub results: Vec<Video>,
}

/// Keyword entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// Keywords of a movie (`keywords`) or series (`results`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeywordList {
    /// Resource ID.
    pub id: u64,
    /// Keywords.
    #[serde(alias = "results")]
    pub keywords: Vec<Keyword>,
}

/// Regional title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlternativeTitle {
    /// Country code.
    pub iso_3166_1: String,
    /// Title.
    pub title: String,
    /// Qualifier such as `romaji`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Alternative titles of a movie (`titles`) or series (`results`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlternativeTitles {
    /// Resource ID.
    pub id: u64,
    /// Titles.
    #[serde(alias = "results")]
    pub titles: Vec<AlternativeTitle>,
}

/// Alternative name of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlternativeName {
    /// Name.
    pub name: String,
    /// Qualifier.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Alternative names of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlternativeNames {
    /// Company or network ID.
    pub id: u64,
    /// Names.
    pub results: Vec<AlternativeName>,
}

/// Translated fields. Each endpoint fills a different subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    /// Movie or collection title.
    pub title: Option<String>,
    /// Series, season, episode or person name.
    pub name: Option<String>,
    /// Overview.
    pub overview: Option<String>,
    /// Homepage.
    pub homepage: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Runtime in minutes (movies).
    pub runtime: Option<u32>,
    /// Biography (people).
    pub biography: Option<String>,
}

/// One translation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// Country code.
    pub iso_3166_1: String,
    /// Language code.
    pub iso_639_1: String,
    /// Native language name.
    pub name: String,
    /// English language name.
    pub english_name: String,
    /// Translated fields.
    pub data: TranslationData,
}

/// Translations of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Translations {
    /// Resource ID.
    pub id: u64,
    /// Translations.
    pub translations: Vec<Translation>,
}

/// Identifiers on other sites. Which ones are present depends on the resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    /// TMDB ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Freebase MID.
    pub freebase_mid: Option<String>,
    /// Freebase ID.
    pub freebase_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// TVRage ID.
    pub tvrage_id: Option<u64>,
    /// Wikidata ID.
    pub wikidata_id: Option<String>,
    /// Facebook handle.
    pub facebook_id: Option<String>,
    /// Instagram handle.
    pub instagram_id: Option<String>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
    /// TikTok handle.
    pub tiktok_id: Option<String>,
    /// YouTube handle.
    pub youtube_id: Option<String>,
}

/// A user's rating state: `false` when unrated, `{"value": n}` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    /// Rated with the given value.
    Rated {
        /// Score (0.5 - 10.0).
        value: f64,
    },
    /// Not rated; the payload is always `false`.
    Unrated(bool),
}

impl Rating {
    /// Score, if rated.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Rated { value } => Some(*value),
            Self::Unrated(_) => None,
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::Unrated(false)
    }
}

/// Session-scoped state of a movie, series or episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountStates {
    /// Resource ID.
    pub id: u64,
    /// Marked as favorite.
    pub favorite: bool,
    /// Rating.
    pub rated: Rating,
    /// On the watchlist.
    pub watchlist: bool,
}

/// Reviewer profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorDetails {
    /// Display name.
    pub name: String,
    /// Username.
    pub username: String,
    /// Avatar path.
    pub avatar_path: Option<String>,
    /// Rating given with the review.
    pub rating: Option<f64>,
}

/// User review.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review ID.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Author profile.
    pub author_details: AuthorDetails,
    /// Body text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Permalink.
    pub url: String,
    /// Language (review detail only).
    pub iso_639_1: Option<String>,
    /// Reviewed resource ID (review detail only).
    pub media_id: Option<u64>,
    /// Reviewed resource title (review detail only).
    pub media_title: Option<String>,
    /// `movie` or `tv` (review detail only).
    pub media_type: Option<String>,
}

/// Reviews of a movie or series.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewPage {
    /// Resource ID.
    pub id: u64,
    /// Current page.
    pub page: u32,
    /// Reviews.
    pub results: Vec<Review>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// One edit in a change history. `value` shapes vary by key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChangeItem {
    /// Change ID.
    pub id: String,
    /// `added`, `updated`, `deleted`, ...
    pub action: String,
    /// Timestamp.
    pub time: String,
    /// Language, when the change is language specific.
    pub iso_639_1: Option<String>,
    /// Country, when the change is country specific.
    pub iso_3166_1: Option<String>,
    /// New value.
    pub value: Option<serde_json::Value>,
    /// Previous value.
    pub original_value: Option<serde_json::Value>,
}

/// Changes grouped by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Change {
    /// Changed field.
    pub key: String,
    /// Edits.
    pub items: Vec<ChangeItem>,
}

/// Change history of one resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChangeSet {
    /// Changes per field.
    pub changes: Vec<Change>,
}

/// Entry of a global change list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangedEntry {
    /// Changed resource ID.
    pub id: u64,
    /// Adult flag, when known.
    pub adult: Option<bool>,
}

/// User list as referenced from movies and accounts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListSummary {
    /// List ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Favorite count.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language.
    pub iso_639_1: String,
    /// `movie` or `tv`.
    pub list_type: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
}

/// Region code to provider display priority.
pub type DisplayPriorities = BTreeMap<String, u32>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_rating_unrated() {
        // Arrange
        let json = r#"{"id":550,"favorite":true,"rated":false,"watchlist":false}"#;

        // Act
        let states: AccountStates = serde_json::from_str(json).unwrap();

        // Assert
        assert!(states.favorite);
        assert_eq!(states.rated, Rating::Unrated(false));
        assert_eq!(states.rated.value(), None);
    }

    #[test]
    fn test_rating_rated() {
        // Arrange
        let json = r#"{"id":550,"favorite":false,"rated":{"value":8.5},"watchlist":true}"#;

        // Act
        let states: AccountStates = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(states.rated.value(), Some(8.5));
        assert!(states.watchlist);
    }

    #[test]
    fn test_keyword_list_accepts_both_field_names() {
        // Arrange
        let movie = r#"{"id":550,"keywords":[{"id":825,"name":"support group"}]}"#;
        let tv = r#"{"id":1399,"results":[{"id":6091,"name":"war"}]}"#;

        // Act
        let movie: KeywordList = serde_json::from_str(movie).unwrap();
        let tv: KeywordList = serde_json::from_str(tv).unwrap();

        // Assert
        assert_eq!(movie.keywords[0].name, "support group");
        assert_eq!(tv.keywords[0].id, 6091);
    }

    #[test]
    fn test_dated_page_flattens_page_fields() {
        // Arrange
        let json = r#"{"dates":{"maximum":"2024-06-10","minimum":"2024-05-01"},"page":2,"results":[1,2],"total_pages":5,"total_results":97}"#;

        // Act
        let dated: DatedPage<u32> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(dated.dates.minimum, "2024-05-01");
        assert_eq!(dated.page.page, 2);
        assert_eq!(dated.page.results, vec![1, 2]);
        assert_eq!(dated.page.total_results, 97);
    }

    #[test]
    fn test_change_set_keeps_raw_values() {
        // Arrange
        let json = r#"{"changes":[{"key":"images","items":[{"id":"5f","action":"added","time":"2024-01-01 00:00:00 UTC","value":{"poster":{"file_path":"/a.jpg"}}}]}]}"#;

        // Act
        let set: ChangeSet = serde_json::from_str(json).unwrap();

        // Assert
        let item = &set.changes[0].items[0];
        assert_eq!(item.action, "added");
        assert_eq!(
            item.value.as_ref().unwrap()["poster"]["file_path"],
            "/a.jpg"
        );
        assert!(item.original_value.is_none());
    }
}

//! Reference data and standalone resources: certifications, configuration,
//! collections, companies, networks, lists, find, watch regions.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::common::{CompanySummary, DisplayPriorities, Genre};
use super::media::{
    EpisodeSummary, MediaSummary, MovieSummary, PersonSummary, SeasonSummary, TvSummary,
};

/// Rating certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Certification {
    /// Certification label (e.g. `PG-13`).
    pub certification: String,
    /// Explanation.
    pub meaning: String,
    /// Sort order.
    pub order: u32,
}

/// Response from `certification/{movie,tv}/list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certifications {
    /// Certifications per country code.
    pub certifications: BTreeMap<String, Vec<Certification>>,
}

/// Response from `genre/{movie,tv}/list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreList {
    /// Genres.
    pub genres: Vec<Genre>,
}

/// Image base URLs and sizes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageConfiguration {
    /// HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Backdrop sizes.
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    pub still_sizes: Vec<String>,
}

impl ImageConfiguration {
    /// Full HTTPS URL of an image path at a given size (`w500`, `original`).
    #[must_use]
    pub fn image_url(&self, size: &str, file_path: &str) -> String {
        format!("{}{size}{file_path}", self.secure_base_url)
    }
}

/// Response from `configuration`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfiguration {
    /// Image settings.
    pub images: ImageConfiguration,
    /// Keys that appear in change histories.
    pub change_keys: Vec<String>,
}

/// Entry of `configuration/countries`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Country {
    /// Country code.
    pub iso_3166_1: String,
    /// English name.
    pub english_name: String,
    /// Native name.
    pub native_name: Option<String>,
}

/// Entry of `configuration/jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Department {
    /// Department name.
    pub department: String,
    /// Jobs in the department.
    pub jobs: Vec<String>,
}

/// Entry of `configuration/languages`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Language code.
    pub iso_639_1: String,
    /// English name.
    pub english_name: String,
    /// Native name.
    pub name: String,
}

/// Entry of `configuration/timezones`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountryTimezones {
    /// Country code.
    pub iso_3166_1: String,
    /// IANA zone names.
    pub zones: Vec<String>,
}

/// Response from `collection/{collection_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionDetails {
    /// Collection ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Overview.
    pub overview: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    pub parts: Vec<MovieSummary>,
}

/// Response from `company/{company_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyDetails {
    /// Company ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Headquarters.
    pub headquarters: Option<String>,
    /// Homepage.
    pub homepage: Option<String>,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Country code.
    pub origin_country: Option<String>,
    /// Parent company.
    pub parent_company: Option<CompanySummary>,
}

/// Response from `network/{network_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkDetails {
    /// Network ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Headquarters.
    pub headquarters: Option<String>,
    /// Homepage.
    pub homepage: Option<String>,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Country code.
    pub origin_country: Option<String>,
}

/// List identifier; TMDB returns either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListId {
    /// Numeric ID.
    Number(u64),
    /// String ID.
    Text(String),
}

impl Default for ListId {
    fn default() -> Self {
        Self::Number(0)
    }
}

/// Response from `list/{list_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListDetails {
    /// List ID.
    pub id: ListId,
    /// Name.
    pub name: String,
    /// Creator username.
    pub created_by: String,
    /// Description.
    pub description: String,
    /// Favorite count.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language.
    pub iso_639_1: String,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Items.
    pub items: Vec<MediaSummary>,
}

/// Response from `list/{list_id}/item_status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListItemStatus {
    /// List ID, when echoed back.
    pub id: Option<ListId>,
    /// Whether the queried movie is on the list.
    pub item_present: bool,
}

/// Response from `find/{external_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FindResults {
    /// Matching movies.
    pub movie_results: Vec<MovieSummary>,
    /// Matching people.
    pub person_results: Vec<PersonSummary>,
    /// Matching series.
    pub tv_results: Vec<TvSummary>,
    /// Matching episodes.
    pub tv_episode_results: Vec<EpisodeSummary>,
    /// Matching seasons.
    pub tv_season_results: Vec<SeasonSummary>,
}

impl FindResults {
    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movie_results.is_empty()
            && self.person_results.is_empty()
            && self.tv_results.is_empty()
            && self.tv_episode_results.is_empty()
            && self.tv_season_results.is_empty()
    }
}

/// Region where watch provider data exists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchRegion {
    /// Country code.
    pub iso_3166_1: String,
    /// English name.
    pub english_name: String,
    /// Native name.
    pub native_name: String,
}

/// Response from `watch/providers/regions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchRegions {
    /// Regions.
    pub results: Vec<WatchRegion>,
}

/// Provider listing from `watch/providers/{movie,tv}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderListing {
    /// Provider ID.
    pub provider_id: u64,
    /// Provider name.
    pub provider_name: String,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Global display priority.
    pub display_priority: u32,
    /// Display priority per region.
    pub display_priorities: DisplayPriorities,
}

/// Response from `watch/providers/{movie,tv}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderCatalog {
    /// Providers.
    pub results: Vec<ProviderListing>,
}

//! Series, season, episode and episode-group resources.

use serde::Deserialize;

use super::common::{CompanySummary, Genre, ProductionCountry, Rating, SpokenLanguage};
use super::credits::{CastCredit, CrewCredit};
use super::media::{EpisodeSummary, SeasonSummary};

/// Series creator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Credit ID.
    pub credit_id: String,
    /// Name.
    pub name: String,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Profile path.
    pub profile_path: Option<String>,
}

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvSeriesDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// Languages (ISO 639-1).
    pub languages: Vec<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Homepage.
    pub homepage: Option<String>,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Status (e.g., "Returning Series", "Ended").
    pub status: Option<String>,
    /// `Scripted`, `Reality`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Whether the show is still in production.
    pub in_production: bool,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Typical episode runtimes.
    pub episode_run_time: Vec<u32>,
    /// Creators.
    pub created_by: Vec<Creator>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Broadcasting networks.
    pub networks: Vec<CompanySummary>,
    /// Production companies.
    pub production_companies: Vec<CompanySummary>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Season summaries.
    pub seasons: Vec<SeasonSummary>,
    /// Most recent aired episode.
    pub last_episode_to_air: Option<EpisodeSummary>,
    /// Next scheduled episode.
    pub next_episode_to_air: Option<EpisodeSummary>,
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
}

/// Content rating in one country.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentRating {
    /// Content descriptors.
    pub descriptors: Vec<String>,
    /// Country code.
    pub iso_3166_1: String,
    /// Rating (e.g. `TV-MA`).
    pub rating: String,
}

/// Response from `tv/{series_id}/content_ratings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentRatings {
    /// Series ID.
    pub id: u64,
    /// Ratings per country.
    pub results: Vec<ContentRating>,
}

/// Episode group as listed under a series.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeGroupSummary {
    /// Group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Number of episodes.
    pub episode_count: u32,
    /// Number of groups.
    pub group_count: u32,
    /// 1 original air date, 2 absolute, 3 DVD, 4 digital, 5 story arc, 6 production, 7 TV.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Network the ordering comes from.
    pub network: Option<CompanySummary>,
}

/// Response from `tv/{series_id}/episode_groups`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeGroups {
    /// Series ID.
    pub id: u64,
    /// Groups.
    pub results: Vec<EpisodeGroupSummary>,
}

/// Episode with an ordering position inside an episode group.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderedEpisode {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Position in the group.
    #[serde(default)]
    pub order: u32,
}

/// One group inside an episode group ordering.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeGroup {
    /// Group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Position.
    pub order: u32,
    /// Whether the group is locked.
    pub locked: bool,
    /// Episodes.
    pub episodes: Vec<OrderedEpisode>,
}

/// Response from `tv/episode_group/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeGroupDetails {
    /// Episode group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Number of episodes.
    pub episode_count: u32,
    /// Number of groups.
    pub group_count: u32,
    /// Grouping type.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Network.
    pub network: Option<CompanySummary>,
    /// Groups.
    pub groups: Vec<EpisodeGroup>,
}

/// Episode flagged as screened theatrically.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreenedEpisode {
    /// Episode ID.
    pub id: u64,
    /// Episode number.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
}

/// Response from `tv/{series_id}/screened_theatrically`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreenedTheatrically {
    /// Series ID.
    pub id: u64,
    /// Episodes.
    pub results: Vec<ScreenedEpisode>,
}

/// Episode inside a season, with its credits.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonEpisode {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Crew.
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
    /// Guest stars.
    #[serde(default)]
    pub guest_stars: Vec<CastCredit>,
}

/// Response from `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonDetails {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id")]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Season overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Episodes in this season.
    pub episodes: Vec<SeasonEpisode>,
    /// Vote average.
    pub vote_average: f64,
}

/// Rating state of one episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeAccountState {
    /// Episode ID.
    pub id: u64,
    /// Episode number.
    pub episode_number: u32,
    /// Rating.
    pub rated: Rating,
}

/// Response from `tv/{series_id}/season/{season_number}/account_states`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonAccountStates {
    /// Season ID.
    pub id: u64,
    /// Per-episode states.
    pub results: Vec<EpisodeAccountState>,
}

/// Response from `tv/{series_id}/season/{n}/episode/{m}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeDetails {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Crew.
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
    /// Guest stars.
    #[serde(default)]
    pub guest_stars: Vec<CastCredit>,
}

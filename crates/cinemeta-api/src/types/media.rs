//! Movie, series, person and episode summaries as they appear in lists.

use serde::Deserialize;

/// Movie as returned by searches, lists and discovery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date (`YYYY-MM-DD`).
    pub release_date: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
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

/// Series as returned by searches, lists and discovery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TvSummary {
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
    /// Overview text.
    pub overview: Option<String>,
    /// First air date (`YYYY-MM-DD`).
    pub first_air_date: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
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

/// Person as returned by searches and popularity lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Titles the person is known for.
    pub known_for: Vec<MediaSummary>,
}

/// Entry of a mixed result list, discriminated by `media_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaSummary {
    /// A movie.
    Movie(MovieSummary),
    /// A series.
    Tv(TvSummary),
    /// A person.
    Person(PersonSummary),
    /// Any other media type.
    #[serde(other)]
    Other,
}

impl MediaSummary {
    /// TMDB ID of the entry, if known.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Movie(m) => Some(m.id),
            Self::Tv(t) => Some(t.id),
            Self::Person(p) => Some(p.id),
            Self::Other => None,
        }
    }

    /// Title or name of the entry.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::Tv(t) => &t.name,
            Self::Person(p) => &p.name,
            Self::Other => "",
        }
    }
}

/// Collection as returned by searches and movie details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionSummary {
    /// Collection ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name (search results only).
    pub original_name: Option<String>,
    /// Overview (search results only).
    pub overview: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
}

/// Season entry within series details and find results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Number of episodes in this season.
    pub episode_count: u32,
    /// Air date of this season.
    pub air_date: Option<String>,
    /// Season name.
    pub name: String,
    /// Season overview.
    pub overview: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Parent series ID (find results only).
    pub show_id: Option<u64>,
}

/// Episode without credits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeSummary {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Parent series ID.
    pub show_id: u64,
    /// Production code.
    pub production_code: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Episode type (e.g., "standard", "finale").
    pub episode_type: Option<String>,
}

/// Movie with the rating a user or guest session gave it.
#[derive(Debug, Clone, Deserialize)]
pub struct RatedMovie {
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieSummary,
    /// Rating given.
    #[serde(default)]
    pub rating: f64,
}

/// Series with the rating a user or guest session gave it.
#[derive(Debug, Clone, Deserialize)]
pub struct RatedTv {
    /// The series.
    #[serde(flatten)]
    pub tv: TvSummary,
    /// Rating given.
    #[serde(default)]
    pub rating: f64,
}

/// Episode with the rating a user or guest session gave it.
#[derive(Debug, Clone, Deserialize)]
pub struct RatedEpisode {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Rating given.
    #[serde(default)]
    pub rating: f64,
}

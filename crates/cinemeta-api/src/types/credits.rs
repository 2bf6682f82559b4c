//! Cast and crew credits.

use serde::Deserialize;

use super::media::PersonSummary;

/// Cast member of a movie, season or episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastCredit {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Character played.
    pub character: String,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    pub order: u32,
    /// Cast ID (movies only).
    pub cast_id: Option<u64>,
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
}

/// Crew member of a movie, season or episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrewCredit {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Department.
    pub department: String,
    /// Job.
    pub job: String,
    /// Credit ID.
    pub credit_id: String,
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
}

/// Credits of a movie, series, season or episode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credits {
    /// Resource ID.
    pub id: u64,
    /// Cast.
    pub cast: Vec<CastCredit>,
    /// Crew.
    pub crew: Vec<CrewCredit>,
    /// Guest stars (episodes only).
    pub guest_stars: Vec<CastCredit>,
}

/// Character played across several episodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregateRole {
    /// Credit ID.
    pub credit_id: String,
    /// Character.
    pub character: String,
    /// Episodes with this role.
    pub episode_count: u32,
}

/// Job held across several episodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregateJob {
    /// Credit ID.
    pub credit_id: String,
    /// Job.
    pub job: String,
    /// Episodes with this job.
    pub episode_count: u32,
}

/// Cast member summed over a series or season.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregateCast {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Roles played.
    pub roles: Vec<AggregateRole>,
    /// Total episodes.
    pub total_episode_count: u32,
    /// Billing order.
    pub order: u32,
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
}

/// Crew member summed over a series or season.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregateCrew {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: Option<String>,
    /// Jobs held.
    pub jobs: Vec<AggregateJob>,
    /// Department.
    pub department: String,
    /// Total episodes.
    pub total_episode_count: u32,
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
}

/// Aggregate credits of a series or season.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregateCredits {
    /// Resource ID.
    pub id: u64,
    /// Cast.
    pub cast: Vec<AggregateCast>,
    /// Crew.
    pub crew: Vec<AggregateCrew>,
}

/// A person's credit on a movie or series.
///
/// Movie credits fill `title`/`release_date`, series credits fill
/// `name`/`first_air_date`/`episode_count`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonCredit {
    /// Movie or series ID.
    pub id: u64,
    /// `movie` or `tv` (combined credits only).
    pub media_type: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    /// Original movie title.
    pub original_title: Option<String>,
    /// Original series name.
    pub original_name: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Series first air date.
    pub first_air_date: Option<String>,
    /// Character (cast credits).
    pub character: Option<String>,
    /// Department (crew credits).
    pub department: Option<String>,
    /// Job (crew credits).
    pub job: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Episodes credited (series only).
    pub episode_count: Option<u32>,
    /// Billing order (movie cast only).
    pub order: Option<u32>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Original language.
    pub original_language: String,
    /// Overview.
    pub overview: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
}

impl PersonCredit {
    /// Title for movies, name for series.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Movie, series or combined credits of a person.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonCredits {
    /// Person ID.
    pub id: u64,
    /// Acting credits.
    pub cast: Vec<PersonCredit>,
    /// Crew credits.
    pub crew: Vec<PersonCredit>,
}

/// Season entry of a series credit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditSeason {
    /// Season ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Season number.
    pub season_number: u32,
    /// Air date.
    pub air_date: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Parent series ID.
    pub show_id: Option<u64>,
}

/// Media a credit points at. Movie and series fields are both optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditMedia {
    /// Movie or series ID.
    pub id: u64,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    /// Character played.
    pub character: Option<String>,
    /// Original language.
    pub original_language: Option<String>,
    /// Overview.
    pub overview: Option<String>,
    /// Seasons the credit covers (series only).
    pub seasons: Vec<CreditSeason>,
    /// Poster path.
    pub poster_path: Option<String>,
}

/// Response from `credit/{credit_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditDetails {
    /// Credit ID.
    pub id: String,
    /// `cast` or `crew`.
    pub credit_type: String,
    /// Department.
    pub department: String,
    /// Job.
    pub job: String,
    /// `movie` or `tv`.
    pub media_type: String,
    /// Credited media.
    pub media: CreditMedia,
    /// Credited person.
    pub person: PersonSummary,
}

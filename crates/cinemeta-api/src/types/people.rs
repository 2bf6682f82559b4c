//! Person resources.

use serde::Deserialize;

/// Response from `person/{person_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Name.
    pub name: String,
    /// Other names.
    pub also_known_as: Vec<String>,
    /// Biography.
    pub biography: String,
    /// Birthday (`YYYY-MM-DD`).
    pub birthday: Option<String>,
    /// Deathday (`YYYY-MM-DD`).
    pub deathday: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Homepage.
    pub homepage: Option<String>,
    /// Department the person is known for.
    pub known_for_department: Option<String>,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Adult flag.
    pub adult: bool,
}

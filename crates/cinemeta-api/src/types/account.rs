//! Account and authentication resources.

use serde::Deserialize;

/// Gravatar reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gravatar {
    /// Gravatar hash.
    pub hash: String,
}

/// Avatar uploaded to TMDB.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbAvatar {
    /// Avatar path.
    pub avatar_path: Option<String>,
}

/// Avatar sources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Avatar {
    /// Gravatar.
    pub gravatar: Gravatar,
    /// TMDB upload.
    pub tmdb: TmdbAvatar,
}

/// Response from `account/{account_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountDetails {
    /// Account ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Username.
    pub username: String,
    /// Preferred language.
    pub iso_639_1: String,
    /// Country.
    pub iso_3166_1: String,
    /// Whether adult content is shown.
    pub include_adult: bool,
    /// Avatar.
    pub avatar: Avatar,
}

/// Response from `authentication/guest_session/new`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuestSession {
    /// Success flag.
    pub success: bool,
    /// Guest session ID.
    pub guest_session_id: String,
    /// Expiry timestamp.
    pub expires_at: String,
}

/// Response from `authentication/token/new`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestToken {
    /// Success flag.
    pub success: bool,
    /// Expiry timestamp.
    pub expires_at: String,
    /// Token to be approved by the user.
    pub request_token: String,
}

/// Response from `authentication`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyValidation {
    /// Success flag.
    pub success: bool,
    /// TMDB status code.
    pub status_code: i32,
    /// Status message.
    pub status_message: String,
}

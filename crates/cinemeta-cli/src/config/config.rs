//! `AppConfig` struct, TOML read/write and credential resolution.

use std::path::Path;

use anyhow::{Context, Result, bail};
use cinemeta_api::{Auth, ClientOption};
use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder printed instead of secrets.
const REDACTED: &str = "********";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB connection settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// `[tmdb]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// v3 API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// v4 read access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default response language for language-aware commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Stored retry budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Copy with every credential replaced by a placeholder.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| String::from(REDACTED));
        Self {
            tmdb: TmdbConfig {
                api_key: redact(&self.tmdb.api_key),
                bearer_token: redact(&self.tmdb.bearer_token),
                ..self.tmdb.clone()
            },
        }
    }
}

impl TmdbConfig {
    /// Picks the credential to use.
    ///
    /// Precedence: `env_token` (bearer), `env_key`, then the configured
    /// bearer token and API key. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is available anywhere.
    pub fn resolve_auth(&self, env_token: Option<String>, env_key: Option<String>) -> Result<Auth> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(token) = present(env_token) {
            return Ok(Auth::Bearer(token));
        }
        if let Some(key) = present(env_key) {
            return Ok(Auth::ApiKey(key));
        }
        if let Some(token) = present(self.bearer_token.clone()) {
            return Ok(Auth::Bearer(token));
        }
        if let Some(key) = present(self.api_key.clone()) {
            return Ok(Auth::ApiKey(key));
        }
        bail!(
            "no TMDB credential found: set TMDB_API_TOKEN or TMDB_API_KEY, \
             or add bearer_token/api_key under [tmdb] in config.toml"
        )
    }

    /// Client options derived from the optional settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn client_options(&self) -> Result<Vec<ClientOption>> {
        let mut options = Vec::new();
        if let Some(ref base_url) = self.base_url {
            let url = Url::parse(base_url)
                .with_context(|| format!("invalid tmdb.base_url: {base_url}"))?;
            options.push(ClientOption::BaseUrl(url));
        }
        if let Some(retries) = self.max_retries {
            options.push(ClientOption::Retries(retries));
        }
        Ok(options)
    }

    /// Configured language, or `en-US`.
    #[must_use]
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or("en-US")
    }
}

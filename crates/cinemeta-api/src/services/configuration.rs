//! `configuration` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{ApiConfiguration, Country, CountryTimezones, Department, Language};

service! {
    /// API-wide reference data: image settings, countries, jobs, languages.
    ConfigurationService
}

impl ConfigurationService<'_> {
    /// Image base URLs and change keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self) -> Result<ApiConfiguration> {
        self.pipeline.get_json("configuration", &[]).await
    }

    /// Countries used throughout TMDB.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn countries(&self, params: &[QueryParam]) -> Result<Vec<Country>> {
        self.pipeline
            .get_json("configuration/countries", params)
            .await
    }

    /// Departments and their jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn jobs(&self) -> Result<Vec<Department>> {
        self.pipeline.get_json("configuration/jobs", &[]).await
    }

    /// ISO 639-1 languages.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn languages(&self) -> Result<Vec<Language>> {
        self.pipeline.get_json("configuration/languages", &[]).await
    }

    /// Officially supported translations (`ja-JP`, `en-US`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn primary_translations(&self) -> Result<Vec<String>> {
        self.pipeline
            .get_json("configuration/primary_translations", &[])
            .await
    }

    /// Timezones per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn timezones(&self) -> Result<Vec<CountryTimezones>> {
        self.pipeline.get_json("configuration/timezones", &[]).await
    }
}

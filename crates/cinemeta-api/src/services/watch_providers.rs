//! `watch/providers/*` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{ProviderCatalog, WatchRegions};

service! {
    /// Streaming provider catalogs (data from `JustWatch`).
    WatchProvidersService
}

impl WatchProvidersService<'_> {
    /// Regions with provider data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn regions(&self, params: &[QueryParam]) -> Result<WatchRegions> {
        self.pipeline
            .get_json("watch/providers/regions", params)
            .await
    }

    /// Providers carrying movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie(&self, params: &[QueryParam]) -> Result<ProviderCatalog> {
        self.pipeline.get_json("watch/providers/movie", params).await
    }

    /// Providers carrying series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self, params: &[QueryParam]) -> Result<ProviderCatalog> {
        self.pipeline.get_json("watch/providers/tv", params).await
    }
}

//! `discover/{movie,tv}` endpoints.
//!
//! Discover takes dozens of filters; they are passed as raw
//! [`QueryParam`]s. Filters that accept several values use
//! [`QueryParam::multi`], which repeats the key on the wire.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{MovieSummary, Paged, TvSummary};

service! {
    /// Filtered movie and TV discovery.
    DiscoverService
}

impl DiscoverService<'_> {
    /// Discovers movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie(&self, params: &[QueryParam]) -> Result<Paged<MovieSummary>> {
        self.pipeline.get_json("discover/movie", params).await
    }

    /// Discovers series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("discover/tv", params).await
    }
}

//! `trending/{media_type}/{time_window}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{MediaSummary, MovieSummary, Paged, PersonSummary, TimeWindow, TvSummary};

service! {
    /// Daily and weekly trending lists.
    TrendingService
}

impl TrendingService<'_> {
    /// Trending movies, series and people together.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn all(
        &self,
        window: TimeWindow,
        params: &[QueryParam],
    ) -> Result<Paged<MediaSummary>> {
        self.pipeline
            .get_json(&format!("trending/all/{window}"), params)
            .await
    }

    /// Trending movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movies(
        &self,
        window: TimeWindow,
        params: &[QueryParam],
    ) -> Result<Paged<MovieSummary>> {
        self.pipeline
            .get_json(&format!("trending/movie/{window}"), params)
            .await
    }

    /// Trending series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self, window: TimeWindow, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline
            .get_json(&format!("trending/tv/{window}"), params)
            .await
    }

    /// Trending people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn people(
        &self,
        window: TimeWindow,
        params: &[QueryParam],
    ) -> Result<Paged<PersonSummary>> {
        self.pipeline
            .get_json(&format!("trending/person/{window}"), params)
            .await
    }
}

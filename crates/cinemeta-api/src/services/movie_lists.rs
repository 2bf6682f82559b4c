//! Curated movie lists: now playing, popular, top rated, upcoming.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{DatedPage, MovieSummary, Paged};

service! {
    /// Curated movie lists.
    MovieListsService
}

impl MovieListsService<'_> {
    /// Movies in theatres, with the date range the list covers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn now_playing(&self, params: &[QueryParam]) -> Result<DatedPage<MovieSummary>> {
        self.pipeline.get_json("movie/now_playing", params).await
    }

    /// Popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn popular(&self, params: &[QueryParam]) -> Result<Paged<MovieSummary>> {
        self.pipeline.get_json("movie/popular", params).await
    }

    /// Top rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn top_rated(&self, params: &[QueryParam]) -> Result<Paged<MovieSummary>> {
        self.pipeline.get_json("movie/top_rated", params).await
    }

    /// Upcoming releases, with the date range the list covers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn upcoming(&self, params: &[QueryParam]) -> Result<DatedPage<MovieSummary>> {
        self.pipeline.get_json("movie/upcoming", params).await
    }
}

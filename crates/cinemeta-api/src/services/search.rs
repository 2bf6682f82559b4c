//! `search/*` endpoints.
//!
//! The query text goes in `params` as `query`; typed builders such as
//! [`SearchTvParams`](crate::types::SearchTvParams) produce a ready list.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{
    CollectionSummary, CompanySummary, Keyword, MediaSummary, MovieSummary, Paged, PersonSummary,
    TvSummary,
};

service! {
    /// Text search across resource kinds.
    SearchService
}

impl SearchService<'_> {
    /// Searches collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn collection(&self, params: &[QueryParam]) -> Result<Paged<CollectionSummary>> {
        self.pipeline.get_json("search/collection", params).await
    }

    /// Searches companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn company(&self, params: &[QueryParam]) -> Result<Paged<CompanySummary>> {
        self.pipeline.get_json("search/company", params).await
    }

    /// Searches keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn keyword(&self, params: &[QueryParam]) -> Result<Paged<Keyword>> {
        self.pipeline.get_json("search/keyword", params).await
    }

    /// Searches movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie(&self, params: &[QueryParam]) -> Result<Paged<MovieSummary>> {
        self.pipeline.get_json("search/movie", params).await
    }

    /// Searches movies, series and people in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn multi(&self, params: &[QueryParam]) -> Result<Paged<MediaSummary>> {
        self.pipeline.get_json("search/multi", params).await
    }

    /// Searches people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn person(&self, params: &[QueryParam]) -> Result<Paged<PersonSummary>> {
        self.pipeline.get_json("search/person", params).await
    }

    /// Searches series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("search/tv", params).await
    }
}

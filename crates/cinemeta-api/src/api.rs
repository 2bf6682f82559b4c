//! `TmdbApi` trait and helpers built on it.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::client::TmdbClient;
use crate::error::{Error, Result};
use crate::params::QueryParam;
use crate::types::{
    MovieDetails, MovieSummary, Paged, SearchMovieParams, SearchTvParams, SeasonDetails,
    TvSeriesDetails, TvSummary,
};

/// The handful of lookups most callers need, behind a trait so they can be
/// stubbed without HTTP.
///
/// `trait_variant::make` generates the `Send`-bound [`TmdbApi`].
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Searches for TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paged<TvSummary>>;

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paged<MovieSummary>>;

    /// Fetches movie details.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64, language: &str) -> Result<MovieDetails>;

    /// Fetches TV series details including season list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64, language: &str) -> Result<TvSeriesDetails>;

    /// Fetches TV season details including episode list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        language: &str,
    ) -> Result<SeasonDetails>;
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn search_tv(&self, params: &SearchTvParams) -> Result<Paged<TvSummary>> {
        self.search().tv(&params.to_params()).await
    }

    #[instrument(skip_all)]
    async fn search_movie(&self, params: &SearchMovieParams) -> Result<Paged<MovieSummary>> {
        self.search().movie(&params.to_params()).await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64, language: &str) -> Result<MovieDetails> {
        self.movies()
            .details(movie_id, &[QueryParam::single("language", language)])
            .await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64, language: &str) -> Result<TvSeriesDetails> {
        self.tv_series()
            .details(series_id, &[QueryParam::single("language", language)])
            .await
    }

    #[instrument(skip_all)]
    async fn tv_season(
        &self,
        series_id: u64,
        season_number: u32,
        language: &str,
    ) -> Result<SeasonDetails> {
        self.tv_seasons()
            .details(
                series_id,
                season_number,
                &[QueryParam::single("language", language)],
            )
            .await
    }
}

/// Fetches a series and every season it lists, one request at a time.
///
/// Seasons are requested in the order the series details list them. The
/// first failing season aborts the walk.
///
/// # Errors
///
/// Returns the series lookup error as is, or [`Error::Season`] naming the
/// season whose lookup failed.
#[instrument(skip_all, fields(series_id = series_id))]
pub async fn fetch_series_with_seasons(
    api: &(impl LocalTmdbApi + Sync),
    series_id: u64,
    language: &str,
) -> Result<(TvSeriesDetails, Vec<SeasonDetails>)> {
    let series = api.tv_details(series_id, language).await?;

    let mut seasons = Vec::with_capacity(series.seasons.len());
    for summary in &series.seasons {
        let season_number = summary.season_number;
        let season = api
            .tv_season(series_id, season_number, language)
            .await
            .map_err(|source| Error::Season {
                series_id,
                season_number,
                source: Box::new(source),
            })?;
        seasons.push(season);
    }

    tracing::debug!(
        series_id,
        seasons = seasons.len(),
        "fetched series with seasons"
    );
    Ok((series, seasons))
}

//! `movie/{movie_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{
    AccountStates, AlternativeTitles, ChangeSet, Credits, ExternalIds, ImageSet, KeywordList,
    MovieDetails, MovieListMemberships, MovieSummary, Paged, ReleaseDates, ReviewPage,
    Translations, VideoList, WatchProviderAvailability,
};

service! {
    /// Movie details and sub-resources.
    MoviesService
}

impl MoviesService<'_> {
    /// Primary movie details.
    ///
    /// `append_to_response` may be passed in `params`; the appended objects
    /// are not part of [`MovieDetails`] and are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, movie_id: u64, params: &[QueryParam]) -> Result<MovieDetails> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}"), params)
            .await
    }

    /// Rating, watchlist and favorite state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn account_states(
        &self,
        movie_id: u64,
        params: &[QueryParam],
    ) -> Result<AccountStates> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/account_states"), params)
            .await
    }

    /// Alternative titles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn alternative_titles(
        &self,
        movie_id: u64,
        params: &[QueryParam],
    ) -> Result<AlternativeTitles> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/alternative_titles"), params)
            .await
    }

    /// Edit history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn changes(&self, movie_id: u64, params: &[QueryParam]) -> Result<ChangeSet> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/changes"), params)
            .await
    }

    /// Cast and crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn credits(&self, movie_id: u64, params: &[QueryParam]) -> Result<Credits> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/credits"), params)
            .await
    }

    /// IDs on other databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn external_ids(&self, movie_id: u64) -> Result<ExternalIds> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/external_ids"), &[])
            .await
    }

    /// Backdrops, logos and posters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, movie_id: u64, params: &[QueryParam]) -> Result<ImageSet> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/images"), params)
            .await
    }

    /// Keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn keywords(&self, movie_id: u64) -> Result<KeywordList> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/keywords"), &[])
            .await
    }

    /// Most recently created movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<MovieDetails> {
        self.pipeline.get_json("movie/latest", &[]).await
    }

    /// Lists the movie belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn lists(
        &self,
        movie_id: u64,
        params: &[QueryParam],
    ) -> Result<MovieListMemberships> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/lists"), params)
            .await
    }

    /// Recommended movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn recommendations(
        &self,
        movie_id: u64,
        params: &[QueryParam],
    ) -> Result<Paged<MovieSummary>> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/recommendations"), params)
            .await
    }

    /// Certified release dates per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn release_dates(&self, movie_id: u64) -> Result<ReleaseDates> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/release_dates"), &[])
            .await
    }

    /// User reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn reviews(&self, movie_id: u64, params: &[QueryParam]) -> Result<ReviewPage> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/reviews"), params)
            .await
    }

    /// Similar movies by keywords and genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn similar(
        &self,
        movie_id: u64,
        params: &[QueryParam],
    ) -> Result<Paged<MovieSummary>> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/similar"), params)
            .await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(&self, movie_id: u64) -> Result<Translations> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/translations"), &[])
            .await
    }

    /// Trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn videos(&self, movie_id: u64, params: &[QueryParam]) -> Result<VideoList> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/videos"), params)
            .await
    }

    /// Streaming, rental and purchase availability per region.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn watch_providers(&self, movie_id: u64) -> Result<WatchProviderAvailability> {
        self.pipeline
            .get_json(&format!("movie/{movie_id}/watch/providers"), &[])
            .await
    }
}

//! `tv/{series_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{
    AccountStates, AggregateCredits, AlternativeTitles, ChangeSet, ContentRatings, Credits,
    EpisodeGroups, ExternalIds, ImageSet, KeywordList, Paged, ReviewPage, ScreenedTheatrically,
    Translations, TvSeriesDetails, TvSummary, VideoList,
};

service! {
    /// Series details and sub-resources.
    TvSeriesService
}

impl TvSeriesService<'_> {
    /// Primary series details, including the season list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, series_id: u64, params: &[QueryParam]) -> Result<TvSeriesDetails> {
        self.pipeline
            .get_json(&format!("tv/{series_id}"), params)
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
        series_id: u64,
        params: &[QueryParam],
    ) -> Result<AccountStates> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/account_states"), params)
            .await
    }

    /// Cast and crew across every season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn aggregate_credits(
        &self,
        series_id: u64,
        params: &[QueryParam],
    ) -> Result<AggregateCredits> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/aggregate_credits"), params)
            .await
    }

    /// Alternative titles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn alternative_titles(&self, series_id: u64) -> Result<AlternativeTitles> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/alternative_titles"), &[])
            .await
    }

    /// Edit history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn changes(&self, series_id: u64, params: &[QueryParam]) -> Result<ChangeSet> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/changes"), params)
            .await
    }

    /// Content ratings per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn content_ratings(&self, series_id: u64) -> Result<ContentRatings> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/content_ratings"), &[])
            .await
    }

    /// Credits of the latest season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn credits(&self, series_id: u64, params: &[QueryParam]) -> Result<Credits> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/credits"), params)
            .await
    }

    /// Episode groups defined for the series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn episode_groups(&self, series_id: u64) -> Result<EpisodeGroups> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/episode_groups"), &[])
            .await
    }

    /// IDs on other databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn external_ids(&self, series_id: u64) -> Result<ExternalIds> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/external_ids"), &[])
            .await
    }

    /// Backdrops, logos and posters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, series_id: u64, params: &[QueryParam]) -> Result<ImageSet> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/images"), params)
            .await
    }

    /// Keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn keywords(&self, series_id: u64) -> Result<KeywordList> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/keywords"), &[])
            .await
    }

    /// Most recently created series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<TvSeriesDetails> {
        self.pipeline.get_json("tv/latest", &[]).await
    }

    /// Recommended series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn recommendations(
        &self,
        series_id: u64,
        params: &[QueryParam],
    ) -> Result<Paged<TvSummary>> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/recommendations"), params)
            .await
    }

    /// User reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn reviews(&self, series_id: u64, params: &[QueryParam]) -> Result<ReviewPage> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/reviews"), params)
            .await
    }

    /// Episodes screened in theatres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn screened_theatrically(&self, series_id: u64) -> Result<ScreenedTheatrically> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/screened_theatrically"), &[])
            .await
    }

    /// Similar series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn similar(
        &self,
        series_id: u64,
        params: &[QueryParam],
    ) -> Result<Paged<TvSummary>> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/similar"), params)
            .await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(&self, series_id: u64) -> Result<Translations> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/translations"), &[])
            .await
    }

    /// Videos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn videos(&self, series_id: u64, params: &[QueryParam]) -> Result<VideoList> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/videos"), params)
            .await
    }
}

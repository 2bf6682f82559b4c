//! `tv/{series_id}/season/{season_number}/episode/{episode_number}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{
    AccountStates, ChangeSet, Credits, EpisodeDetails, ExternalIds, ImageSet, Translations,
    VideoList,
};

service! {
    /// Single episodes.
    TvEpisodesService
}

fn episode_path(series_id: u64, season: u32, episode: u32) -> String {
    format!("tv/{series_id}/season/{season}/episode/{episode}")
}

impl TvEpisodesService<'_> {
    /// Episode details with crew and guest stars.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
        params: &[QueryParam],
    ) -> Result<EpisodeDetails> {
        self.pipeline
            .get_json(&episode_path(series_id, season, episode), params)
            .await
    }

    /// Rating state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn account_states(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
        params: &[QueryParam],
    ) -> Result<AccountStates> {
        let path = format!("{}/account_states", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, params).await
    }

    /// Edit history; keyed by the episode's own ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn changes(&self, episode_id: u64) -> Result<ChangeSet> {
        self.pipeline
            .get_json(&format!("tv/episode/{episode_id}/changes"), &[])
            .await
    }

    /// Cast, crew and guest stars.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn credits(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
        params: &[QueryParam],
    ) -> Result<Credits> {
        let path = format!("{}/credits", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, params).await
    }

    /// IDs on other databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn external_ids(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
    ) -> Result<ExternalIds> {
        let path = format!("{}/external_ids", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, &[]).await
    }

    /// Stills.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
        params: &[QueryParam],
    ) -> Result<ImageSet> {
        let path = format!("{}/images", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, params).await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
    ) -> Result<Translations> {
        let path = format!("{}/translations", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, &[]).await
    }

    /// Videos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn videos(
        &self,
        series_id: u64,
        season: u32,
        episode: u32,
        params: &[QueryParam],
    ) -> Result<VideoList> {
        let path = format!("{}/videos", episode_path(series_id, season, episode));
        self.pipeline.get_json(&path, params).await
    }
}

//! `tv/{series_id}/season/{season_number}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{
    AggregateCredits, ChangeSet, Credits, ExternalIds, ImageSet, SeasonAccountStates,
    SeasonDetails, Translations, VideoList,
};

service! {
    /// Seasons of a series.
    TvSeasonsService
}

impl TvSeasonsService<'_> {
    /// Season details with every episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(
        &self,
        series_id: u64,
        season: u32,
        params: &[QueryParam],
    ) -> Result<SeasonDetails> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}"), params)
            .await
    }

    /// Per-episode rating state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn account_states(
        &self,
        series_id: u64,
        season: u32,
        params: &[QueryParam],
    ) -> Result<SeasonAccountStates> {
        self.pipeline
            .get_json(
                &format!("tv/{series_id}/season/{season}/account_states"),
                params,
            )
            .await
    }

    /// Cast and crew across every episode of the season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn aggregate_credits(
        &self,
        series_id: u64,
        season: u32,
        params: &[QueryParam],
    ) -> Result<AggregateCredits> {
        self.pipeline
            .get_json(
                &format!("tv/{series_id}/season/{season}/aggregate_credits"),
                params,
            )
            .await
    }

    /// Edit history; keyed by the season's own ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn changes(&self, season_id: u64, params: &[QueryParam]) -> Result<ChangeSet> {
        self.pipeline
            .get_json(&format!("tv/season/{season_id}/changes"), params)
            .await
    }

    /// Season credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn credits(
        &self,
        series_id: u64,
        season: u32,
        params: &[QueryParam],
    ) -> Result<Credits> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}/credits"), params)
            .await
    }

    /// IDs on other databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn external_ids(&self, series_id: u64, season: u32) -> Result<ExternalIds> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}/external_ids"), &[])
            .await
    }

    /// Posters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(
        &self,
        series_id: u64,
        season: u32,
        params: &[QueryParam],
    ) -> Result<ImageSet> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}/images"), params)
            .await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(&self, series_id: u64, season: u32) -> Result<Translations> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}/translations"), &[])
            .await
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
        params: &[QueryParam],
    ) -> Result<VideoList> {
        self.pipeline
            .get_json(&format!("tv/{series_id}/season/{season}/videos"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::{client, mount_get};

    #[tokio::test]
    async fn test_season_details() {
        // Arrange
        let server = MockServer::start().await;
        let json = include_str!("../../../../fixtures/tmdb/tv_season_120089_1.json");
        Mock::given(method("GET"))
            .and(path("/3/tv/120089/season/1"))
            .and(query_param("language", "ja-JP"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let season = client
            .tv_seasons()
            .details(120_089, 1, &[QueryParam::single("language", "ja-JP")])
            .await
            .unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert_eq!(season.internal_id.as_deref(), Some("61b8e0f2b7abb5001c56d3f5"));
        assert_eq!(season.episodes.len(), 3);
        let first = season.episodes.first().unwrap();
        assert_eq!(first.episode.episode_number, 1);
        assert_eq!(first.episode.name, "オペレーション〈梟〉");
        assert_eq!(first.crew.first().unwrap().job, "Director");
    }

    #[tokio::test]
    async fn test_season_account_states_mixed_ratings() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/tv/120089/season/1/account_states",
            r#"{"id":200752,"results":[{"id":3527233,"episode_number":1,"rated":{"value":9.0}},{"id":3555734,"episode_number":2,"rated":false}]}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let states = client
            .tv_seasons()
            .account_states(120_089, 1, &[QueryParam::single("session_id", "s")])
            .await
            .unwrap();

        // Assert
        let ratings: Vec<Option<f64>> = states.results.iter().map(|r| r.rated.value()).collect();
        assert_eq!(ratings, vec![Some(9.0), None]);
    }

    #[tokio::test]
    async fn test_season_aggregate_credits() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/tv/120089/season/1/aggregate_credits",
            r#"{"id":200752,"cast":[{"id":1,"name":"Takuya Eguchi","roles":[{"credit_id":"c","character":"Loid Forger","episode_count":12}],"total_episode_count":12,"order":0}],"crew":[{"id":2,"name":"Kazuhiro Furuhashi","department":"Directing","jobs":[{"credit_id":"d","job":"Series Director","episode_count":12}],"total_episode_count":12}]}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let credits = client
            .tv_seasons()
            .aggregate_credits(120_089, 1, &[])
            .await
            .unwrap();

        // Assert
        let cast = credits.cast.first().unwrap();
        assert_eq!(cast.roles.first().unwrap().character, "Loid Forger");
        assert_eq!(credits.crew.first().unwrap().jobs.first().unwrap().job, "Series Director");
    }

    #[tokio::test]
    async fn test_season_changes_uses_season_id() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(&server, "/3/tv/season/200752/changes", r#"{"changes":[]}"#).await;
        let client = client(&server);

        // Act
        let changes = client.tv_seasons().changes(200_752, &[]).await.unwrap();

        // Assert
        assert!(changes.changes.is_empty());
    }

    #[tokio::test]
    async fn test_season_sub_resources() {
        // Arrange
        let server = MockServer::start().await;
        let base = "/3/tv/120089/season/1";
        mount_get(&server, &format!("{base}/credits"), r#"{"id":200752,"cast":[],"crew":[]}"#).await;
        mount_get(
            &server,
            &format!("{base}/external_ids"),
            r#"{"id":200752,"tvdb_id":1913040,"wikidata_id":null}"#,
        )
        .await;
        mount_get(
            &server,
            &format!("{base}/images"),
            r#"{"id":200752,"posters":[{"file_path":"/p.jpg","width":1000,"height":1500}]}"#,
        )
        .await;
        mount_get(
            &server,
            &format!("{base}/translations"),
            r#"{"id":200752,"translations":[{"iso_639_1":"ja","iso_3166_1":"JP","name":"日本語","english_name":"Japanese","data":{"name":"第1期","overview":""}}]}"#,
        )
        .await;
        mount_get(
            &server,
            &format!("{base}/videos"),
            r#"{"id":200752,"results":[{"id":"v","key":"k","site":"YouTube","type":"Opening Credits"}]}"#,
        )
        .await;
        let client = client(&server);
        let seasons = client.tv_seasons();

        // Act
        let credits = seasons.credits(120_089, 1, &[]).await.unwrap();
        let ids = seasons.external_ids(120_089, 1).await.unwrap();
        let images = seasons.images(120_089, 1, &[]).await.unwrap();
        let translations = seasons.translations(120_089, 1).await.unwrap();
        let videos = seasons.videos(120_089, 1, &[]).await.unwrap();

        // Assert
        assert!(credits.cast.is_empty());
        assert_eq!(ids.tvdb_id, Some(1_913_040));
        assert_eq!(images.posters.first().unwrap().height, 1500);
        assert_eq!(
            translations.translations.first().unwrap().data.name.as_deref(),
            Some("第1期")
        );
        assert_eq!(videos.results.first().unwrap().kind, "Opening Credits");
    }
}

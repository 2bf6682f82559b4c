//! Curated series lists: airing today, on the air, popular, top rated.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{Paged, TvSummary};

service! {
    /// Curated series lists.
    TvSeriesListsService
}

impl TvSeriesListsService<'_> {
    /// Series with an episode airing today (`timezone` param adjusts "today").
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn airing_today(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("tv/airing_today", params).await
    }

    /// Series with an episode airing in the next seven days.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn on_the_air(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("tv/on_the_air", params).await
    }

    /// Popular series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn popular(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("tv/popular", params).await
    }

    /// Top rated series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn top_rated(&self, params: &[QueryParam]) -> Result<Paged<TvSummary>> {
        self.pipeline.get_json("tv/top_rated", params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::{client, mount_get};

    const PAGE: &str = r#"{"page":2,"results":[{"id":120089,"name":"SPY×FAMILY"}],"total_pages":9,"total_results":170}"#;

    #[tokio::test]
    async fn test_airing_today_forwards_timezone() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/tv/airing_today"))
            .and(query_param("timezone", "Asia/Tokyo"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let page = client
            .tv_series_lists()
            .airing_today(&[
                QueryParam::single("timezone", "Asia/Tokyo"),
                QueryParam::single("page", 2),
            ])
            .await
            .unwrap();

        // Assert
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 9);
    }

    #[tokio::test]
    async fn test_other_series_lists() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(&server, "/3/tv/on_the_air", PAGE).await;
        mount_get(&server, "/3/tv/popular", PAGE).await;
        mount_get(&server, "/3/tv/top_rated", PAGE).await;
        let client = client(&server);
        let lists = client.tv_series_lists();

        // Act
        let on_the_air = lists.on_the_air(&[]).await.unwrap();
        let popular = lists.popular(&[]).await.unwrap();
        let top_rated = lists.top_rated(&[]).await.unwrap();

        // Assert
        for page in [on_the_air, popular, top_rated] {
            assert_eq!(page.results.first().unwrap().id, 120_089);
        }
    }
}

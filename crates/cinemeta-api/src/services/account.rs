//! `account/{account_id}` endpoints.
//!
//! Most of these need a `session_id` parameter, which callers pass like any
//! other query parameter.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::pipeline::path_segment;
use crate::types::{
    AccountDetails, ListSummary, MovieSummary, Paged, RatedEpisode, RatedMovie, RatedTv, TvSummary,
};

service! {
    /// Account details, favorites, ratings and watchlists.
    AccountService
}

impl AccountService<'_> {
    /// Account details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, account_id: &str, params: &[QueryParam]) -> Result<AccountDetails> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}"), params)
            .await
    }

    /// Favorite movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn favorite_movies(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<MovieSummary>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/favorite/movies"), params)
            .await
    }

    /// Favorite series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn favorite_tv(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<TvSummary>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/favorite/tv"), params)
            .await
    }

    /// Lists created by the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn lists(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<ListSummary>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/lists"), params)
            .await
    }

    /// Rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_movies(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedMovie>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/rated/movies"), params)
            .await
    }

    /// Rated series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_tv(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedTv>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/rated/tv"), params)
            .await
    }

    /// Rated episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_tv_episodes(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedEpisode>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/rated/tv/episodes"), params)
            .await
    }

    /// Movie watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn watchlist_movies(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<MovieSummary>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/watchlist/movies"), params)
            .await
    }

    /// Series watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn watchlist_tv(
        &self,
        account_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<TvSummary>> {
        let account_id = path_segment(account_id)?;
        self.pipeline
            .get_json(&format!("account/{account_id}/watchlist/tv"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::{client, mount_get};

    #[tokio::test]
    async fn test_details() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/account/548",
            r#"{"avatar":{"gravatar":{"hash":"c9e9fc152ee756a900db85757c29815d"},"tmdb":{"avatar_path":null}},"id":548,"iso_639_1":"en","iso_3166_1":"CA","name":"Travis Bell","include_adult":false,"username":"travisbell"}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let account = client.account().details("548", &[]).await.unwrap();

        // Assert
        assert_eq!(account.id, 548);
        assert_eq!(account.username, "travisbell");
        assert_eq!(account.avatar.gravatar.hash, "c9e9fc152ee756a900db85757c29815d");
        assert!(account.avatar.tmdb.avatar_path.is_none());
    }

    #[tokio::test]
    async fn test_rated_movies_forwards_session() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/account/548/rated/movies"))
            .and(query_param("session_id", "abc"))
            .and(query_param("sort_by", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"page":1,"results":[{"id":550,"title":"Fight Club","rating":8.5}],"total_pages":1,"total_results":1}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);
        let params = [
            QueryParam::single("session_id", "abc"),
            QueryParam::single("sort_by", "created_at.desc"),
        ];

        // Act
        let page = client
            .account()
            .rated_movies("548", &params)
            .await
            .unwrap();

        // Assert
        let rated = page.results.first().unwrap();
        assert_eq!(rated.movie.title, "Fight Club");
        assert_eq!(rated.rating, 8.5);
    }

    #[tokio::test]
    async fn test_watchlist_tv() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/account/548/watchlist/tv",
            r#"{"page":1,"results":[{"id":1399,"name":"Game of Thrones","origin_country":["US"]}],"total_pages":1,"total_results":1}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let page = client.account().watchlist_tv("548", &[]).await.unwrap();

        // Assert
        assert_eq!(page.total_results, 1);
        assert_eq!(page.results.first().unwrap().name, "Game of Thrones");
    }

    #[tokio::test]
    async fn test_lists() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/account/548/lists",
            r#"{"page":1,"results":[{"id":8210000,"name":"Best of 2022","description":"","favorite_count":0,"item_count":12,"iso_639_1":"en","list_type":"movie","poster_path":null}],"total_pages":1,"total_results":1}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let page = client.account().lists("548", &[]).await.unwrap();

        // Assert
        assert_eq!(page.results.first().unwrap().item_count, 12);
    }
}

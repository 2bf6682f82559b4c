//! `TmdbClient` - construction and service accessors.

use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use crate::pipeline::{Auth, AuthMode, RequestPipeline};
use crate::services::{
    AccountService, AuthenticationService, CertificationsService, ChangesService,
    CollectionsService, CompaniesService, ConfigurationService, CreditsService, DiscoverService,
    FindService, GenresService, GuestSessionsService, KeywordsService, ListsService,
    MovieListsService, MoviesService, NetworksService, PeopleListsService, PeopleService,
    ReviewsService, SearchService, TrendingService, TvEpisodeGroupsService, TvEpisodesService,
    TvSeasonsService, TvSeriesListsService, TvSeriesService, WatchProvidersService,
};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org";

/// Retry budget stored for bearer-token clients when none is configured.
///
/// API-key clients start at 0.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// User-Agent sent by the transport the builder creates itself.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Functional overrides applied, in order, on top of the defaults.
///
/// When two options touch the same field the later one wins.
#[derive(Debug, Clone)]
pub enum ClientOption {
    /// Sets the stored retry budget. Requests are still attempted once.
    Retries(u32),
    /// Replaces the HTTP transport.
    HttpClient(Client),
    /// Replaces the base URL (typically a local stub server).
    BaseUrl(Url),
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    auth: Auth,
    base_url: Option<Url>,
    http_client: Option<Client>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl TmdbClientBuilder {
    const fn new(auth: Auth) -> Self {
        let max_retries = match auth.mode() {
            AuthMode::ApiKeyInQuery => 0,
            AuthMode::BearerHeader => DEFAULT_MAX_RETRIES,
        };
        Self {
            auth,
            base_url: None,
            http_client: None,
            user_agent: None,
            max_retries,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Uses the given transport instead of building one.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the User-Agent of the default transport.
    ///
    /// Ignored when a transport is supplied with [`http_client`](Self::http_client).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the stored retry budget (default: 3).
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Applies one functional option.
    #[must_use]
    pub fn option(self, option: ClientOption) -> Self {
        match option {
            ClientOption::Retries(retries) => self.max_retries(retries),
            ClientOption::HttpClient(client) => self.http_client(client),
            ClientOption::BaseUrl(url) => self.base_url(url),
        }
    }

    /// Applies options in order.
    #[must_use]
    pub fn options(self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        options.into_iter().fold(self, Self::option)
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingApiKey`] / [`Error::MissingBearerToken`] for an empty credential.
    /// - [`Error::ClientBuild`] if the default transport cannot be created.
    pub fn build(self) -> Result<TmdbClient> {
        self.auth.validate()?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| Error::UrlConstruction {
                path: String::from(DEFAULT_BASE_URL),
                reason: e.to_string(),
            })?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .gzip(true)
                .build()
                .map_err(Error::ClientBuild)?,
        };

        tracing::debug!(
            auth_mode = ?self.auth.mode(),
            base_url = %base_url,
            max_retries = self.max_retries,
            "TMDB client configured"
        );

        Ok(TmdbClient {
            pipeline: Arc::new(RequestPipeline::new(
                http_client,
                base_url,
                self.auth,
                self.max_retries,
            )),
        })
    }
}

/// TMDB API client.
///
/// Cloning is cheap; clones share one [`RequestPipeline`]. Each accessor
/// returns a borrowed service bound to that pipeline.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    pipeline: Arc<RequestPipeline>,
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder(auth: Auth) -> TmdbClientBuilder {
        TmdbClientBuilder::new(auth)
    }

    /// Client authenticating with a v3 API key in the query string.
    ///
    /// # Errors
    ///
    /// [`Error::MissingApiKey`] if `api_key` is empty, or
    /// [`Error::ClientBuild`] if the default transport cannot be created.
    pub fn with_api_key(
        api_key: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        Self::builder(Auth::ApiKey(api_key.into()))
            .options(options)
            .build()
    }

    /// Client authenticating with a bearer token header.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBearerToken`] if `token` is empty, or
    /// [`Error::ClientBuild`] if the default transport cannot be created.
    pub fn with_bearer_token(
        token: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        Self::builder(Auth::Bearer(token.into()))
            .options(options)
            .build()
    }

    /// Shared request pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// `account/{account_id}` endpoints.
    #[must_use]
    pub fn account(&self) -> AccountService<'_> {
        AccountService::new(&self.pipeline)
    }

    /// `authentication` endpoints.
    #[must_use]
    pub fn authentication(&self) -> AuthenticationService<'_> {
        AuthenticationService::new(&self.pipeline)
    }

    /// `certification` endpoints.
    #[must_use]
    pub fn certifications(&self) -> CertificationsService<'_> {
        CertificationsService::new(&self.pipeline)
    }

    /// `{movie,tv,person}/changes` endpoints.
    #[must_use]
    pub fn changes(&self) -> ChangesService<'_> {
        ChangesService::new(&self.pipeline)
    }

    /// `collection/{id}` endpoints.
    #[must_use]
    pub fn collections(&self) -> CollectionsService<'_> {
        CollectionsService::new(&self.pipeline)
    }

    /// `company/{id}` endpoints.
    #[must_use]
    pub fn companies(&self) -> CompaniesService<'_> {
        CompaniesService::new(&self.pipeline)
    }

    /// `configuration` endpoints.
    #[must_use]
    pub fn configuration(&self) -> ConfigurationService<'_> {
        ConfigurationService::new(&self.pipeline)
    }

    /// `credit/{credit_id}` endpoint.
    #[must_use]
    pub fn credits(&self) -> CreditsService<'_> {
        CreditsService::new(&self.pipeline)
    }

    /// `discover` endpoints.
    #[must_use]
    pub fn discover(&self) -> DiscoverService<'_> {
        DiscoverService::new(&self.pipeline)
    }

    /// `find/{external_id}` endpoint.
    #[must_use]
    pub fn find(&self) -> FindService<'_> {
        FindService::new(&self.pipeline)
    }

    /// `genre` endpoints.
    #[must_use]
    pub fn genres(&self) -> GenresService<'_> {
        GenresService::new(&self.pipeline)
    }

    /// `guest_session/{id}` endpoints.
    #[must_use]
    pub fn guest_sessions(&self) -> GuestSessionsService<'_> {
        GuestSessionsService::new(&self.pipeline)
    }

    /// `keyword/{id}` endpoint.
    #[must_use]
    pub fn keywords(&self) -> KeywordsService<'_> {
        KeywordsService::new(&self.pipeline)
    }

    /// `list/{id}` endpoints.
    #[must_use]
    pub fn lists(&self) -> ListsService<'_> {
        ListsService::new(&self.pipeline)
    }

    /// Curated movie lists (`movie/popular`, ...).
    #[must_use]
    pub fn movie_lists(&self) -> MovieListsService<'_> {
        MovieListsService::new(&self.pipeline)
    }

    /// `movie/{id}` endpoints.
    #[must_use]
    pub fn movies(&self) -> MoviesService<'_> {
        MoviesService::new(&self.pipeline)
    }

    /// `network/{id}` endpoints.
    #[must_use]
    pub fn networks(&self) -> NetworksService<'_> {
        NetworksService::new(&self.pipeline)
    }

    /// `person/popular` endpoint.
    #[must_use]
    pub fn people_lists(&self) -> PeopleListsService<'_> {
        PeopleListsService::new(&self.pipeline)
    }

    /// `person/{id}` endpoints.
    #[must_use]
    pub fn people(&self) -> PeopleService<'_> {
        PeopleService::new(&self.pipeline)
    }

    /// `review/{id}` endpoint.
    #[must_use]
    pub fn reviews(&self) -> ReviewsService<'_> {
        ReviewsService::new(&self.pipeline)
    }

    /// `search` endpoints.
    #[must_use]
    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.pipeline)
    }

    /// `trending` endpoints.
    #[must_use]
    pub fn trending(&self) -> TrendingService<'_> {
        TrendingService::new(&self.pipeline)
    }

    /// `tv/episode_group/{id}` endpoint.
    #[must_use]
    pub fn tv_episode_groups(&self) -> TvEpisodeGroupsService<'_> {
        TvEpisodeGroupsService::new(&self.pipeline)
    }

    /// `tv/{id}/season/{n}/episode/{m}` endpoints.
    #[must_use]
    pub fn tv_episodes(&self) -> TvEpisodesService<'_> {
        TvEpisodesService::new(&self.pipeline)
    }

    /// `tv/{id}/season/{n}` endpoints.
    #[must_use]
    pub fn tv_seasons(&self) -> TvSeasonsService<'_> {
        TvSeasonsService::new(&self.pipeline)
    }

    /// Curated TV lists (`tv/popular`, ...).
    #[must_use]
    pub fn tv_series_lists(&self) -> TvSeriesListsService<'_> {
        TvSeriesListsService::new(&self.pipeline)
    }

    /// `tv/{id}` endpoints.
    #[must_use]
    pub fn tv_series(&self) -> TvSeriesService<'_> {
        TvSeriesService::new(&self.pipeline)
    }

    /// `watch/providers` endpoints.
    #[must_use]
    pub fn watch_providers(&self) -> WatchProvidersService<'_> {
        WatchProvidersService::new(&self.pipeline)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::ptr;

    use super::*;

    #[test]
    fn test_with_api_key_succeeds() {
        // Arrange & Act
        let client = TmdbClient::with_api_key("key", []).unwrap();

        // Assert
        assert_eq!(client.pipeline().auth_mode(), AuthMode::ApiKeyInQuery);
        assert_eq!(client.pipeline().base_url().as_str(), "https://api.themoviedb.org/");
        assert_eq!(client.pipeline().max_retries(), 0);
    }

    #[test]
    fn test_with_bearer_token_succeeds() {
        // Arrange & Act
        let client = TmdbClient::with_bearer_token("token", []).unwrap();

        // Assert
        assert_eq!(client.pipeline().auth_mode(), AuthMode::BearerHeader);
        assert_eq!(client.pipeline().max_retries(), DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_empty_api_key_fails() {
        // Arrange & Act
        let result = TmdbClient::with_api_key("", []);

        // Assert
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_empty_bearer_token_fails() {
        // Arrange & Act
        let result = TmdbClient::with_bearer_token(String::new(), []);

        // Assert
        assert!(matches!(result, Err(Error::MissingBearerToken)));
    }

    #[test]
    fn test_empty_credential_fails_before_options_are_used() {
        // Arrange
        let unroutable = Url::parse("http://127.0.0.1:1").unwrap();

        // Act
        let result = TmdbClient::with_api_key("", [ClientOption::BaseUrl(unroutable)]);

        // Assert
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_options_later_wins() {
        // Arrange
        let first = Url::parse("http://localhost:1111").unwrap();
        let second = Url::parse("http://localhost:2222").unwrap();

        // Act
        let client = TmdbClient::with_bearer_token(
            "token",
            [
                ClientOption::BaseUrl(first),
                ClientOption::Retries(7),
                ClientOption::BaseUrl(second.clone()),
                ClientOption::Retries(0),
            ],
        )
        .unwrap();

        // Assert
        assert_eq!(client.pipeline().base_url(), &second);
        assert_eq!(client.pipeline().max_retries(), 0);
    }

    #[test]
    fn test_default_retry_budget_depends_on_auth_mode() {
        // Arrange & Act
        let api_key = TmdbClient::builder(Auth::ApiKey(String::from("key")))
            .build()
            .unwrap();
        let bearer = TmdbClient::builder(Auth::Bearer(String::from("token")))
            .build()
            .unwrap();
        let api_key_with_option =
            TmdbClient::with_api_key("key", [ClientOption::Retries(4)]).unwrap();

        // Assert
        assert_eq!(api_key.pipeline().max_retries(), 0);
        assert_eq!(bearer.pipeline().max_retries(), DEFAULT_MAX_RETRIES);
        assert_eq!(api_key_with_option.pipeline().max_retries(), 4);
    }

    #[test]
    fn test_custom_http_client_option() {
        // Arrange
        let http = Client::builder().user_agent("custom/1.0").build().unwrap();

        // Act
        let result = TmdbClient::with_api_key("key", [ClientOption::HttpClient(http)]);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_setters() {
        // Arrange
        let url = Url::parse("http://localhost:8080").unwrap();

        // Act
        let client = TmdbClient::builder(Auth::Bearer(String::from("token")))
            .base_url(url.clone())
            .user_agent("test/0.0.0")
            .max_retries(5)
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.pipeline().base_url(), &url);
        assert_eq!(client.pipeline().max_retries(), 5);
    }

    #[test]
    fn test_all_services_share_one_pipeline() {
        // Arrange
        let client = TmdbClient::with_api_key("key", []).unwrap();
        let shared = client.pipeline();

        // Act
        let bound = [
            client.account().pipeline(),
            client.authentication().pipeline(),
            client.certifications().pipeline(),
            client.changes().pipeline(),
            client.collections().pipeline(),
            client.companies().pipeline(),
            client.configuration().pipeline(),
            client.credits().pipeline(),
            client.discover().pipeline(),
            client.find().pipeline(),
            client.genres().pipeline(),
            client.guest_sessions().pipeline(),
            client.keywords().pipeline(),
            client.lists().pipeline(),
            client.movie_lists().pipeline(),
            client.movies().pipeline(),
            client.networks().pipeline(),
            client.people_lists().pipeline(),
            client.people().pipeline(),
            client.reviews().pipeline(),
            client.search().pipeline(),
            client.trending().pipeline(),
            client.tv_episode_groups().pipeline(),
            client.tv_episodes().pipeline(),
            client.tv_seasons().pipeline(),
            client.tv_series_lists().pipeline(),
            client.tv_series().pipeline(),
            client.watch_providers().pipeline(),
        ];

        // Assert
        assert!(bound.iter().all(|p| ptr::eq(*p, shared)));
    }

    #[test]
    fn test_clone_shares_pipeline() {
        // Arrange
        let client = TmdbClient::with_bearer_token("token", []).unwrap();

        // Act
        let cloned = client.clone();

        // Assert
        assert!(ptr::eq(client.pipeline(), cloned.pipeline()));
    }
}

//! Authenticated request pipeline.
//!
//! Every service funnels through [`RequestPipeline`]: it resolves the versioned
//! URL, applies query parameters and authentication, executes the call and
//! turns non-2xx responses into [`ApiError`].

use std::fmt;
use std::future::Future;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::{ApiError, Error, Result, TransportError};
use crate::params::{QueryParam, QueryValues};

/// Version segment inserted between the base URL and every resource path.
pub const API_VERSION: &str = "3";

/// Bytes escaped when a caller value becomes one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escapes a caller-supplied identifier so it stays a single path segment.
///
/// `/`, `?`, `#` and `%` are percent-encoded, so the value can neither add
/// segments nor start a query or fragment.
///
/// # Errors
///
/// Returns [`Error::UrlConstruction`] for an empty value or a bare `.` /
/// `..`, which URL normalization would drop or use to climb out of the
/// version prefix.
pub fn path_segment(value: &str) -> Result<String> {
    if matches!(value, "" | "." | "..") {
        return Err(Error::UrlConstruction {
            path: String::from(value),
            reason: String::from("identifier is empty or a dot segment"),
        });
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Where the credential is placed on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `api_key` query parameter.
    ApiKeyInQuery,
    /// `Authorization: Bearer` header.
    BearerHeader,
}

/// Credential paired with its scheme.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// v3 API key, sent as `api_key=...`.
    ApiKey(String),
    /// v4 read access token, sent as a bearer header.
    Bearer(String),
}

impl Auth {
    /// Scheme this credential is sent with.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        match self {
            Self::ApiKey(_) => AuthMode::ApiKeyInQuery,
            Self::Bearer(_) => AuthMode::BearerHeader,
        }
    }

    /// Rejects empty credentials.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::ApiKey(key) if key.is_empty() => Err(Error::MissingApiKey),
            Self::Bearer(token) if token.is_empty() => Err(Error::MissingBearerToken),
            Self::ApiKey(_) | Self::Bearer(_) => Ok(()),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Self::Bearer(_) => f.write_str("Bearer(<redacted>)"),
        }
    }
}

/// Shared, immutable request pipeline.
///
/// Nothing here is mutated after construction, so one instance serves any
/// number of concurrent callers.
#[derive(Debug)]
pub struct RequestPipeline {
    /// HTTP transport.
    http_client: Client,
    /// Scheme and authority requests are resolved against.
    base_url: Url,
    /// Credential.
    auth: Auth,
    /// Stored retry budget. Not consulted.
    max_retries: u32,
}

impl RequestPipeline {
    pub(crate) const fn new(http_client: Client, base_url: Url, auth: Auth, max_retries: u32) -> Self {
        Self {
            http_client,
            base_url,
            auth,
            max_retries,
        }
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Authentication scheme in use.
    #[must_use]
    pub const fn auth_mode(&self) -> AuthMode {
        self.auth.mode()
    }

    /// Configured retry budget.
    ///
    /// Every call is a single attempt regardless of this value.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Resolves `{base}/3/{path}` with the encoded query string.
    ///
    /// Parameters are applied in order; in API-key mode `api_key` is set last
    /// and replaces any caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlConstruction`] when `path` contains control
    /// characters or malformed percent escapes, cannot be joined onto the
    /// base URL, or normalizes to somewhere outside `/3/`.
    pub fn resolve_url(&self, path: &str, params: &[QueryParam]) -> Result<Url> {
        let url_error = |reason: String| Error::UrlConstruction {
            path: String::from(path),
            reason,
        };

        check_path(path).map_err(url_error)?;
        let relative = path.trim_start_matches('/');
        let mut url = self
            .base_url
            .join(&format!("/{API_VERSION}/{relative}"))
            .map_err(|e| url_error(e.to_string()))?;
        if !url.path().starts_with(&format!("/{API_VERSION}/")) {
            return Err(url_error(format!("path escapes the /{API_VERSION}/ prefix")));
        }

        let mut query: QueryValues = params.iter().collect();
        if let Auth::ApiKey(key) = &self.auth {
            query.set("api_key", key.clone());
        }

        let encoded = query.encode();
        url.set_query((!encoded.is_empty()).then_some(encoded.as_str()));
        Ok(url)
    }

    /// Builds the outgoing request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlConstruction`] for a malformed path, or
    /// [`Error::Transport`] if `reqwest` rejects the request.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        params: &[QueryParam],
    ) -> Result<Request> {
        let url = self.resolve_url(path, params)?;

        let mut builder = self.http_client.request(method, url);
        if let Auth::Bearer(token) = &self.auth {
            builder = builder.bearer_auth(token);
        }
        let request = builder.build()?;

        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "TMDB API request"
        );
        Ok(request)
    }

    /// Performs one request and classifies the response.
    ///
    /// On 2xx the response is handed back unread. Dropping the returned
    /// future aborts the in-flight call.
    ///
    /// # Errors
    ///
    /// - [`Error::UrlConstruction`]: malformed path, nothing sent.
    /// - [`Error::Transport`]: connect, TLS, timeout or body read failure.
    /// - [`Error::Decode`]: non-2xx body that is not a TMDB error document.
    /// - [`Error::Api`]: non-2xx with a TMDB error document.
    #[instrument(skip_all, fields(%method, path))]
    pub async fn perform(
        &self,
        method: Method,
        path: &str,
        params: &[QueryParam],
    ) -> Result<Response> {
        let request = self.build_request(method, path, params)?;
        let response = self.http_client.execute(request).await?;
        check_response(response).await
    }

    /// Like [`perform`](Self::perform), but gives up as soon as `cancel`
    /// resolves.
    ///
    /// Only this call is affected; the pipeline stays usable.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Cancelled`] (wrapped in [`Error::Transport`])
    /// when cancelled, otherwise the same errors as `perform`.
    pub async fn perform_until<F>(
        &self,
        method: Method,
        path: &str,
        params: &[QueryParam],
        cancel: F,
    ) -> Result<Response>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                tracing::debug!(path, "TMDB API request cancelled");
                Err(TransportError::Cancelled.into())
            }
            result = self.perform(method, path, params) => result,
        }
    }

    /// GETs `path` and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`perform`](Self::perform); a success body that does not
    /// match `T` is [`Error::Decode`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[QueryParam],
    ) -> Result<T> {
        let response = self.perform(Method::GET, path, params).await?;
        decode_json(response).await
    }
}

/// Reads the whole body and decodes it as `T`.
///
/// # Errors
///
/// [`Error::Transport`] if the body cannot be read, [`Error::Decode`] if it
/// does not parse.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Passes 2xx through and turns anything else into an error.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::debug!(status = status.as_u16(), "TMDB API error response");
    let body = response.bytes().await?;
    let mut api_error: ApiError = serde_json::from_slice(&body)?;
    api_error.http_status = status.as_u16();
    Err(api_error.into())
}

/// Rejects what a URL parser would refuse in a path reference.
fn check_path(path: &str) -> std::result::Result<(), String> {
    if let Some(c) = path.chars().find(char::is_ascii_control) {
        return Err(format!("invalid control character {c:?} in path"));
    }
    for escape in path.split('%').skip(1) {
        let valid = escape.len() >= 2 && escape.bytes().take(2).all(|b| b.is_ascii_hexdigit());
        if !valid {
            let shown: String = escape.chars().take(2).collect();
            return Err(format!("invalid URL escape \"%{shown}\""));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use reqwest::header::AUTHORIZATION;
    use serde::Deserialize;
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

    use super::*;

    const NOT_FOUND_BODY: &str = r#"{"success":false,"status_code":34,"status_message":"The resource you requested could not be found."}"#;

    fn pipeline(auth: Auth, base_url: &str) -> RequestPipeline {
        RequestPipeline::new(Client::new(), Url::parse(base_url).unwrap(), auth, 3)
    }

    fn api_key() -> Auth {
        Auth::ApiKey(String::from("secret-key"))
    }

    fn bearer() -> Auth {
        Auth::Bearer(String::from("secret-token"))
    }

    #[derive(Debug, Deserialize)]
    struct Echo {
        path: String,
    }

    struct EchoPath;

    impl Respond for EchoPath {
        fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "path": request.url.path() }))
                .set_delay(Duration::from_millis(20))
        }
    }

    #[test]
    fn test_resolve_url_inserts_version_segment() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let url = pipeline.resolve_url("movie/550", &[]).unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/550");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_resolve_url_tolerates_leading_slash() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let with_slash = pipeline.resolve_url("/tv/1/season/2/episode/3", &[]).unwrap();
        let without = pipeline.resolve_url("tv/1/season/2/episode/3", &[]).unwrap();

        // Assert
        assert_eq!(with_slash, without);
        assert_eq!(with_slash.path(), "/3/tv/1/season/2/episode/3");
    }

    #[test]
    fn test_resolve_url_replaces_base_path() {
        // Arrange
        let pipeline = pipeline(bearer(), "http://localhost:8080/proxy/");

        // Act
        let url = pipeline.resolve_url("genre/movie/list", &[]).unwrap();

        // Assert
        assert_eq!(url.as_str(), "http://localhost:8080/3/genre/movie/list");
    }

    #[test]
    fn test_resolve_url_rejects_control_character() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let result = pipeline.resolve_url("movie/\n550", &[]);

        // Assert
        match result.unwrap_err() {
            Error::UrlConstruction { path, reason } => {
                assert_eq!(path, "movie/\n550");
                assert!(reason.contains("control character"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_url_rejects_bad_escape() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let trailing = pipeline.resolve_url("search/movie%", &[]);
        let non_hex = pipeline.resolve_url("movie/%zz", &[]);
        let valid = pipeline.resolve_url("keyword/%41", &[]);

        // Assert
        assert!(matches!(trailing, Err(Error::UrlConstruction { .. })));
        assert!(matches!(non_hex, Err(Error::UrlConstruction { .. })));
        assert!(valid.is_ok());
    }

    #[test]
    fn test_resolve_url_rejects_dot_segments_leaving_version() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let result = pipeline.resolve_url("review/../../movie/550", &[]);

        // Assert
        match result.unwrap_err() {
            Error::UrlConstruction { path, reason } => {
                assert_eq!(path, "review/../../movie/550");
                assert!(reason.contains("/3/"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let climbing = path_segment("../x").unwrap();
        let nested = path_segment("a/b").unwrap();
        let query_like = path_segment("id?x=1#frag").unwrap();
        let url = pipeline
            .resolve_url(&format!("review/{climbing}"), &[])
            .unwrap();

        // Assert
        assert_eq!(climbing, "..%2Fx");
        assert_eq!(nested, "a%2Fb");
        assert_eq!(query_like, "id%3Fx=1%23frag");
        assert_eq!(url.path(), "/3/review/..%2Fx");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_path_segment_keeps_plain_ids_and_escapes_percent() {
        // Arrange & Act
        let plain = path_segment("59cc634fc3a3682aa30065a3").unwrap();
        let imdb = path_segment("tt0137523").unwrap();
        let encoded_dots = path_segment("%2e%2e").unwrap();

        // Assert
        assert_eq!(plain, "59cc634fc3a3682aa30065a3");
        assert_eq!(imdb, "tt0137523");
        assert_eq!(encoded_dots, "%252e%252e");
    }

    #[test]
    fn test_path_segment_rejects_empty_and_dot_ids() {
        // Arrange & Act & Assert
        for value in ["", ".", ".."] {
            assert!(matches!(
                path_segment(value),
                Err(Error::UrlConstruction { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_url_rejects_cannot_be_base() {
        // Arrange
        let pipeline = pipeline(bearer(), "mailto:someone@example.com");

        // Act
        let result = pipeline.resolve_url("movie/550", &[]);

        // Assert
        assert!(matches!(result, Err(Error::UrlConstruction { .. })));
    }

    #[test]
    fn test_api_key_mode_uses_query_not_header() {
        // Arrange
        let pipeline = pipeline(api_key(), "https://api.themoviedb.org");

        // Act
        let request = pipeline
            .build_request(Method::GET, "movie/550", &[QueryParam::single("language", "en-US")])
            .unwrap();

        // Assert
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(
            request.url().query(),
            Some("api_key=secret-key&language=en-US")
        );
    }

    #[test]
    fn test_api_key_overrides_caller_param() {
        // Arrange
        let pipeline = pipeline(api_key(), "https://api.themoviedb.org");
        let params = [QueryParam::single("api_key", "caller-value")];

        // Act
        let url = pipeline.resolve_url("movie/550", &params).unwrap();

        // Assert
        let keys: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            keys,
            vec![(String::from("api_key"), String::from("secret-key"))]
        );
    }

    #[test]
    fn test_bearer_mode_uses_header_not_query() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");

        // Act
        let request = pipeline.build_request(Method::GET, "movie/550", &[]).unwrap();

        // Assert
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer secret-token"
        );
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_bearer_mode_preserves_caller_api_key_param() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");
        let params = [QueryParam::single("api_key", "caller-value")];

        // Act
        let url = pipeline.resolve_url("movie/550", &params).unwrap();

        // Assert
        assert_eq!(url.query(), Some("api_key=caller-value"));
    }

    #[test]
    fn test_params_applied_in_caller_order() {
        // Arrange
        let pipeline = pipeline(bearer(), "https://api.themoviedb.org");
        let params = [
            QueryParam::single("page", 3),
            QueryParam::multi("with_genres", [18, 35]),
            QueryParam::single("page", 5),
        ];

        // Act
        let url = pipeline.resolve_url("discover/movie", &params).unwrap();

        // Assert
        assert_eq!(url.query(), Some("page=5&with_genres=18&with_genres=35"));
    }

    #[test]
    fn test_build_request_emits_debug_event() {
        // Arrange
        let pipeline = pipeline(api_key(), "https://api.themoviedb.org");
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(Level::DEBUG).with_fields(
                    expect::msg("TMDB API request")
                        .and(expect::field("path").with_value(&"/3/movie/550")),
                ),
            )
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            pipeline.build_request(Method::GET, "movie/550", &[]).unwrap();
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_auth_debug_is_redacted() {
        // Arrange & Act
        let rendered = format!("{:?} {:?}", api_key(), bearer());

        // Assert
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_auth_validate_rejects_empty() {
        // Arrange & Act & Assert
        assert!(matches!(
            Auth::ApiKey(String::new()).validate(),
            Err(Error::MissingApiKey)
        ));
        assert!(matches!(
            Auth::Bearer(String::new()).validate(),
            Err(Error::MissingBearerToken)
        ));
        assert!(api_key().validate().is_ok());
        assert_eq!(bearer().mode(), AuthMode::BearerHeader);
    }

    #[tokio::test]
    async fn test_perform_success_returns_unread_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("api_key", "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":550}"#))
            .expect(1)
            .mount(&server)
            .await;
        let pipeline = pipeline(api_key(), &server.uri());

        // Act
        let response = pipeline
            .perform(Method::GET, "movie/550", &[])
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), r#"{"id":550}"#);
    }

    #[tokio::test]
    async fn test_perform_not_found_yields_api_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/0"))
            .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let error = pipeline
            .perform(Method::GET, "movie/0", &[])
            .await
            .unwrap_err();

        // Assert
        let api = error.as_api_error().unwrap();
        assert_eq!(api.status_code, 34);
        assert_eq!(
            api.status_message,
            "The resource you requested could not be found."
        );
        assert!(!api.success);
        assert_eq!(api.http_status, 404);
        assert!(!error.is_transport_error());
    }

    #[tokio::test]
    async fn test_perform_negative_status_code_yields_api_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/configuration"))
            .respond_with(ResponseTemplate::new(500).set_body_string(
                r#"{"success":false,"status_code":-1,"status_message":"Unknown failure."}"#,
            ))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let error = pipeline
            .perform(Method::GET, "configuration", &[])
            .await
            .unwrap_err();

        // Assert
        let api = error.as_api_error().unwrap();
        assert_eq!(api.status_code, -1);
        assert_eq!(api.http_status, 500);
    }

    #[tokio::test]
    async fn test_perform_non_json_error_yields_decode_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let error = pipeline
            .perform(Method::GET, "movie/550", &[])
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(error, Error::Decode(_)));
        assert!(!error.is_api_error());
    }

    #[tokio::test]
    async fn test_perform_unreachable_host_yields_transport_error() {
        // Arrange
        let pipeline = pipeline(bearer(), "http://127.0.0.1:1");

        // Act
        let error = pipeline
            .perform(Method::GET, "movie/550", &[])
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(
            error,
            Error::Transport(TransportError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_get_json_mismatched_body_yields_decode_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"not-a-path"}"#))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let result = pipeline.get_json::<Echo>("movie/550", &[]).await;

        // Assert
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn test_perform_until_cancelled_then_reusable() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/movie/fast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let cancelled = pipeline
            .perform_until(
                Method::GET,
                "movie/slow",
                &[],
                tokio::time::sleep(Duration::from_millis(50)),
            )
            .await;
        let after = pipeline.perform(Method::GET, "movie/fast", &[]).await;

        // Assert
        assert!(matches!(
            cancelled,
            Err(Error::Transport(TransportError::Cancelled))
        ));
        assert_eq!(after.unwrap().status(), 200);
        assert_eq!(pipeline.max_retries(), 3);
    }

    #[tokio::test]
    async fn test_perform_until_completes_before_cancel() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        let pipeline = pipeline(bearer(), &server.uri());

        // Act
        let result = pipeline
            .perform_until(
                Method::GET,
                "configuration",
                &[],
                tokio::time::sleep(Duration::from_secs(10)),
            )
            .await;

        // Assert
        assert_eq!(result.unwrap().status(), 200);
    }

    #[tokio::test]
    async fn test_concurrent_calls_do_not_cross_talk() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(EchoPath)
            .expect(2)
            .mount(&server)
            .await;
        let pipeline = pipeline(api_key(), &server.uri());

        // Act
        let (movie, tv) = tokio::join!(
            pipeline.get_json::<Echo>("movie/1", &[]),
            pipeline.get_json::<Echo>("tv/2", &[]),
        );

        // Assert
        assert_eq!(movie.unwrap().path, "/3/movie/1");
        assert_eq!(tv.unwrap().path, "/3/tv/2");
    }
}

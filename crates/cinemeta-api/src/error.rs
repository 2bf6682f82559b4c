//! Error taxonomy shared by the pipeline and every service.

use serde::Deserialize;
use thiserror::Error as ThisError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between building a client and decoding a body.
#[derive(Debug, ThisError)]
pub enum Error {
    /// API-key constructor was given an empty key.
    #[error("api key missing")]
    MissingApiKey,

    /// Bearer constructor was given an empty token.
    #[error("bearer token missing")]
    MissingBearerToken,

    /// The relative path could not be turned into a request URL.
    #[error("failed to build request URL for {path:?}: {reason}")]
    UrlConstruction {
        /// Path as supplied by the caller.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The HTTP exchange itself failed or was cancelled.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response body did not match the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered with a non-2xx status and a well-formed error body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reserved for query parameter validation. Nothing in this crate returns it.
    #[error("invalid query params")]
    InvalidQueryParams,

    /// The default HTTP transport could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A season fetch inside a multi-request helper failed.
    #[error("failed to fetch season {season_number} of series {series_id}")]
    Season {
        /// Series being assembled.
        series_id: u64,
        /// Season that failed.
        season_number: u32,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns `true` when the provider rejected the request.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        self.as_api_error().is_some()
    }

    /// Borrows the provider error, if this is one.
    ///
    /// Looks through [`Error::Season`] to the failure it wraps.
    #[must_use]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Season { source, .. } => source.as_api_error(),
            _ => None,
        }
    }

    /// Returns `true` for transport failures, cancellation included.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}

/// Failure below the HTTP status line.
#[derive(Debug, ThisError)]
pub enum TransportError {
    /// DNS, connect, TLS, timeout or body read failure reported by `reqwest`.
    #[error("HTTP transport failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The caller's cancellation future resolved before the call completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Error body returned by TMDB on non-2xx responses.
///
/// ```json
/// {"success": false, "status_code": 34, "status_message": "The resource you requested could not be found."}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ThisError)]
#[serde(default)]
#[error("TMDB API error (HTTP {http_status}): code={status_code}, message={status_message}")]
pub struct ApiError {
    /// TMDB status code (distinct from the HTTP status).
    pub status_code: i32,
    /// Human readable message.
    pub status_message: String,
    /// Provider success flag, `false` on errors.
    pub success: bool,
    /// HTTP status of the response the body arrived with.
    #[serde(skip)]
    pub http_status: u16,
}

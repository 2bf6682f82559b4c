//! Typed client for The Movie Database (TMDB) v3 REST API.
//!
//! A [`TmdbClient`] owns one [`RequestPipeline`](pipeline::RequestPipeline)
//! that every resource service borrows. The pipeline resolves
//! `{base}/3/{path}`, merges [`QueryParam`]s, attaches the credential
//! (`api_key` query parameter or bearer header), executes the call and turns
//! non-2xx answers into [`ApiError`].
//!
//! ```no_run
//! use cinemeta_api::{QueryParam, TmdbClient};
//!
//! # async fn run() -> cinemeta_api::Result<()> {
//! let client = TmdbClient::with_bearer_token("token", [])?;
//! let movie = client
//!     .movies()
//!     .details(550, &[QueryParam::single("language", "ja-JP")])
//!     .await?;
//! # let _ = movie;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
mod params;

pub mod pipeline;
pub mod services;
pub mod types;

pub use api::{LocalTmdbApi, TmdbApi, fetch_series_with_seasons};
pub use client::{
    ClientOption, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, TmdbClient, TmdbClientBuilder,
};
pub use error::{ApiError, Error, Result, TransportError};
pub use params::{QueryParam, QueryValues};
pub use pipeline::{API_VERSION, Auth, AuthMode};

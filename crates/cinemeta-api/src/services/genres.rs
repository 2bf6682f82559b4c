//! `genre/{movie,tv}/list` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::GenreList;

service! {
    /// Genre catalogs.
    GenresService
}

impl GenresService<'_> {
    /// Movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie_list(&self, params: &[QueryParam]) -> Result<GenreList> {
        self.pipeline.get_json("genre/movie/list", params).await
    }

    /// TV genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv_list(&self, params: &[QueryParam]) -> Result<GenreList> {
        self.pipeline.get_json("genre/tv/list", params).await
    }
}

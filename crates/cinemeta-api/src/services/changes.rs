//! Change feeds: IDs of records edited in a date window.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{ChangedEntry, Paged};

service! {
    /// Movie, TV and people change feeds.
    ChangesService
}

impl ChangesService<'_> {
    /// Movies changed in the window given by `start_date`/`end_date`.
    ///
    /// [`ChangesWindow::to_params`](crate::types::ChangesWindow::to_params)
    /// builds the window parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie(&self, params: &[QueryParam]) -> Result<Paged<ChangedEntry>> {
        self.pipeline.get_json("movie/changes", params).await
    }

    /// Series changed in the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self, params: &[QueryParam]) -> Result<Paged<ChangedEntry>> {
        self.pipeline.get_json("tv/changes", params).await
    }

    /// People changed in the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn people(&self, params: &[QueryParam]) -> Result<Paged<ChangedEntry>> {
        self.pipeline.get_json("person/changes", params).await
    }
}

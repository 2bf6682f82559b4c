//! `list/{list_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::pipeline::path_segment;
use crate::types::{ListDetails, ListItemStatus};

service! {
    /// User-curated lists.
    ListsService
}

impl ListsService<'_> {
    /// List with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, list_id: &str, params: &[QueryParam]) -> Result<ListDetails> {
        let list_id = path_segment(list_id)?;
        self.pipeline
            .get_json(&format!("list/{list_id}"), params)
            .await
    }

    /// Whether a movie is on the list; pass `movie_id` in `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn item_status(
        &self,
        list_id: &str,
        params: &[QueryParam],
    ) -> Result<ListItemStatus> {
        let list_id = path_segment(list_id)?;
        self.pipeline
            .get_json(&format!("list/{list_id}/item_status"), params)
            .await
    }
}

//! `find/{external_id}` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::pipeline::path_segment;
use crate::types::{ExternalSource, FindResults};

service! {
    /// Lookup by IDs from other databases (IMDb, TVDB, ...).
    FindService
}

impl FindService<'_> {
    /// Finds records by an external ID.
    ///
    /// `source` is sent as `external_source` and takes precedence over a
    /// caller-supplied parameter of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn by_id(
        &self,
        external_id: &str,
        source: ExternalSource,
        params: &[QueryParam],
    ) -> Result<FindResults> {
        let external_id = path_segment(external_id)?;
        let mut all = params.to_vec();
        all.push(QueryParam::single("external_source", source));
        self.pipeline
            .get_json(&format!("find/{external_id}"), &all)
            .await
    }
}

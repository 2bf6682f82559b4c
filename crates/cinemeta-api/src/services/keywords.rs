//! `keyword/{keyword_id}` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::types::Keyword;

service! {
    /// Keywords.
    KeywordsService
}

impl KeywordsService<'_> {
    /// Keyword by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, keyword_id: u64) -> Result<Keyword> {
        self.pipeline
            .get_json(&format!("keyword/{keyword_id}"), &[])
            .await
    }
}

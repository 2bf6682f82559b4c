//! `credit/{credit_id}` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::pipeline::path_segment;
use crate::types::CreditDetails;

service! {
    /// Individual cast or crew credits.
    CreditsService
}

impl CreditsService<'_> {
    /// Resolves a credit ID (as found on cast and crew entries).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, credit_id: &str) -> Result<CreditDetails> {
        let credit_id = path_segment(credit_id)?;
        self.pipeline
            .get_json(&format!("credit/{credit_id}"), &[])
            .await
    }
}

//! `collection/{collection_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{CollectionDetails, ImageSet, Translations};

service! {
    /// Movie collections.
    CollectionsService
}

impl CollectionsService<'_> {
    /// Collection with its movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(
        &self,
        collection_id: u64,
        params: &[QueryParam],
    ) -> Result<CollectionDetails> {
        self.pipeline
            .get_json(&format!("collection/{collection_id}"), params)
            .await
    }

    /// Collection images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, collection_id: u64, params: &[QueryParam]) -> Result<ImageSet> {
        self.pipeline
            .get_json(&format!("collection/{collection_id}/images"), params)
            .await
    }

    /// Collection translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(&self, collection_id: u64) -> Result<Translations> {
        self.pipeline
            .get_json(&format!("collection/{collection_id}/translations"), &[])
            .await
    }
}

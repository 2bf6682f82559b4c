//! `person/{person_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{ChangeSet, ExternalIds, ImageSet, PersonCredits, PersonDetails, Translations};

service! {
    /// People and their filmographies.
    PeopleService
}

impl PeopleService<'_> {
    /// Person details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, person_id: u64, params: &[QueryParam]) -> Result<PersonDetails> {
        self.pipeline
            .get_json(&format!("person/{person_id}"), params)
            .await
    }

    /// Edit history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn changes(&self, person_id: u64, params: &[QueryParam]) -> Result<ChangeSet> {
        self.pipeline
            .get_json(&format!("person/{person_id}/changes"), params)
            .await
    }

    /// Movie and TV credits combined.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn combined_credits(
        &self,
        person_id: u64,
        params: &[QueryParam],
    ) -> Result<PersonCredits> {
        self.pipeline
            .get_json(&format!("person/{person_id}/combined_credits"), params)
            .await
    }

    /// IDs on other databases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn external_ids(&self, person_id: u64) -> Result<ExternalIds> {
        self.pipeline
            .get_json(&format!("person/{person_id}/external_ids"), &[])
            .await
    }

    /// Profile images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, person_id: u64) -> Result<ImageSet> {
        self.pipeline
            .get_json(&format!("person/{person_id}/images"), &[])
            .await
    }

    /// Most recently created person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<PersonDetails> {
        self.pipeline.get_json("person/latest", &[]).await
    }

    /// Movie credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie_credits(
        &self,
        person_id: u64,
        params: &[QueryParam],
    ) -> Result<PersonCredits> {
        self.pipeline
            .get_json(&format!("person/{person_id}/movie_credits"), params)
            .await
    }

    /// TV credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv_credits(
        &self,
        person_id: u64,
        params: &[QueryParam],
    ) -> Result<PersonCredits> {
        self.pipeline
            .get_json(&format!("person/{person_id}/tv_credits"), params)
            .await
    }

    /// Biography translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn translations(&self, person_id: u64) -> Result<Translations> {
        self.pipeline
            .get_json(&format!("person/{person_id}/translations"), &[])
            .await
    }
}

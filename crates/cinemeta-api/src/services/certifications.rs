//! `certification` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::types::Certifications;

service! {
    /// Movie and TV rating certifications per country.
    CertificationsService
}

impl CertificationsService<'_> {
    /// Movie certifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn movie(&self) -> Result<Certifications> {
        self.pipeline.get_json("certification/movie/list", &[]).await
    }

    /// TV certifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn tv(&self) -> Result<Certifications> {
        self.pipeline.get_json("certification/tv/list", &[]).await
    }
}

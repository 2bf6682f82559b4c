//! `company/{company_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::types::{AlternativeNames, CompanyDetails, LogoSet};

service! {
    /// Production companies.
    CompaniesService
}

impl CompaniesService<'_> {
    /// Company details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, company_id: u64) -> Result<CompanyDetails> {
        self.pipeline
            .get_json(&format!("company/{company_id}"), &[])
            .await
    }

    /// Other names the company is known by.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn alternative_names(&self, company_id: u64) -> Result<AlternativeNames> {
        self.pipeline
            .get_json(&format!("company/{company_id}/alternative_names"), &[])
            .await
    }

    /// Company logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, company_id: u64) -> Result<LogoSet> {
        self.pipeline
            .get_json(&format!("company/{company_id}/images"), &[])
            .await
    }
}

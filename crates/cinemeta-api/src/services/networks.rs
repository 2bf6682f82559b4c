//! `network/{network_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::types::{AlternativeNames, LogoSet, NetworkDetails};

service! {
    /// Broadcast and streaming networks.
    NetworksService
}

impl NetworksService<'_> {
    /// Network details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, network_id: u64) -> Result<NetworkDetails> {
        self.pipeline
            .get_json(&format!("network/{network_id}"), &[])
            .await
    }

    /// Other names the network is known by.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn alternative_names(&self, network_id: u64) -> Result<AlternativeNames> {
        self.pipeline
            .get_json(&format!("network/{network_id}/alternative_names"), &[])
            .await
    }

    /// Network logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn images(&self, network_id: u64) -> Result<LogoSet> {
        self.pipeline
            .get_json(&format!("network/{network_id}/images"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::MockServer;

    use crate::services::test_support::{client, mount_get};

    #[tokio::test]
    async fn test_network_endpoints() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/network/1",
            r#"{"id":1,"name":"Fuji TV","headquarters":"Tokyo, Japan","origin_country":"JP","logo_path":"/yS5UJjsSdZXML0YikWTYYHLPKhQ.png"}"#,
        )
        .await;
        mount_get(
            &server,
            "/3/network/1/alternative_names",
            r#"{"id":1,"results":[{"name":"フジテレビ","type":""}]}"#,
        )
        .await;
        mount_get(&server, "/3/network/1/images", r#"{"id":1,"logos":[]}"#).await;
        let client = client(&server);
        let networks = client.networks();

        // Act
        let details = networks.details(1).await.unwrap();
        let names = networks.alternative_names(1).await.unwrap();
        let logos = networks.images(1).await.unwrap();

        // Assert
        assert_eq!(details.name, "Fuji TV");
        assert_eq!(details.origin_country.as_deref(), Some("JP"));
        assert_eq!(names.results.first().unwrap().name, "フジテレビ");
        assert!(logos.logos.is_empty());
    }
}

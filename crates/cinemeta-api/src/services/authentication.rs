//! `authentication` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::types::{GuestSession, KeyValidation, RequestToken};

service! {
    /// Guest sessions, request tokens and credential validation.
    AuthenticationService
}

impl AuthenticationService<'_> {
    /// Creates a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn create_guest_session(&self) -> Result<GuestSession> {
        self.pipeline
            .get_json("authentication/guest_session/new", &[])
            .await
    }

    /// Creates a request token for the user approval flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn create_request_token(&self) -> Result<RequestToken> {
        self.pipeline
            .get_json("authentication/token/new", &[])
            .await
    }

    /// Checks that the configured credential is accepted.
    ///
    /// # Errors
    ///
    /// An invalid credential surfaces as [`Error::Api`](crate::Error::Api)
    /// with status code 7.
    #[instrument(skip_all)]
    pub async fn validate_key(&self) -> Result<KeyValidation> {
        self.pipeline.get_json("authentication", &[]).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::services::test_support::{client, mount_get};

    #[tokio::test]
    async fn test_create_guest_session() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/authentication/guest_session/new",
            r#"{"success":true,"guest_session_id":"1ce82ec1223641636ad4a60b07de3581","expires_at":"2016-08-27 16:26:40 UTC"}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let session = client
            .authentication()
            .create_guest_session()
            .await
            .unwrap();

        // Assert
        assert!(session.success);
        assert_eq!(session.guest_session_id, "1ce82ec1223641636ad4a60b07de3581");
    }

    #[tokio::test]
    async fn test_create_request_token() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/authentication/token/new",
            r#"{"success":true,"expires_at":"2016-08-26 17:04:39 UTC","request_token":"ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd"}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let token = client
            .authentication()
            .create_request_token()
            .await
            .unwrap();

        // Assert
        assert_eq!(token.request_token, "ff5c7eeb5a8870efe3cd7fc5c282cffd26800ecd");
    }

    #[tokio::test]
    async fn test_validate_key_success() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/authentication",
            r#"{"success":true,"status_code":1,"status_message":"Success."}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let validation = client.authentication().validate_key().await.unwrap();

        // Assert
        assert!(validation.success);
        assert_eq!(validation.status_code, 1);
    }

    #[tokio::test]
    async fn test_validate_key_rejected() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/authentication"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#,
            ))
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let error = client.authentication().validate_key().await.unwrap_err();

        // Assert
        let api = error.as_api_error().unwrap();
        assert_eq!(api.status_code, 7);
        assert_eq!(api.http_status, 401);
    }
}

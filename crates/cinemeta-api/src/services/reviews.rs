//! `review/{review_id}` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::pipeline::path_segment;
use crate::types::Review;

service! {
    /// User reviews.
    ReviewsService
}

impl ReviewsService<'_> {
    /// Review by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, review_id: &str) -> Result<Review> {
        let review_id = path_segment(review_id)?;
        self.pipeline
            .get_json(&format!("review/{review_id}"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::MockServer;

    use crate::error::Error;
    use crate::services::test_support::{client, mount_get};

    #[tokio::test]
    async fn test_review_details() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/review/59cc634fc3a3682aa30065a3",
            r#"{"id":"59cc634fc3a3682aa30065a3","author":"Gimly","author_details":{"name":"","username":"Gimly","avatar_path":null,"rating":8.0},"content":"Solid.","iso_639_1":"en","media_id":550,"media_title":"Fight Club","media_type":"movie","url":"https://www.themoviedb.org/review/59cc634fc3a3682aa30065a3"}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let review = client
            .reviews()
            .details("59cc634fc3a3682aa30065a3")
            .await
            .unwrap();

        // Assert
        assert_eq!(review.author, "Gimly");
        assert_eq!(review.author_details.rating, Some(8.0));
        assert_eq!(review.media_id, Some(550));
        assert_eq!(review.media_type.as_deref(), Some("movie"));
    }

    #[tokio::test]
    async fn test_review_id_with_separators_stays_one_segment() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/review/..%2F..%2Fmovie%2F550",
            r#"{"id":"x","author":"Gimly","content":""}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let review = client.reviews().details("../../movie/550").await.unwrap();

        // Assert
        assert_eq!(review.author, "Gimly");
    }

    #[tokio::test]
    async fn test_review_dot_id_rejected_before_sending() {
        // Arrange
        let server = MockServer::start().await;
        let client = client(&server);

        // Act
        let result = client.reviews().details("..").await;

        // Assert
        assert!(matches!(result, Err(Error::UrlConstruction { .. })));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

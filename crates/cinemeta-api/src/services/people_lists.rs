//! `person/popular` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::types::{Paged, PersonSummary};

service! {
    /// Curated people lists.
    PeopleListsService
}

impl PeopleListsService<'_> {
    /// Popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn popular(&self, params: &[QueryParam]) -> Result<Paged<PersonSummary>> {
        self.pipeline.get_json("person/popular", params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::MockServer;

    use crate::services::test_support::{client, mount_get};
    use crate::types::MediaSummary;

    #[tokio::test]
    async fn test_popular_people_known_for() {
        // Arrange
        let server = MockServer::start().await;
        mount_get(
            &server,
            "/3/person/popular",
            r#"{"page":1,"results":[{"id":1245,"name":"Scarlett Johansson","known_for_department":"Acting","known_for":[{"media_type":"movie","id":24428,"title":"The Avengers"}]}],"total_pages":500,"total_results":10000}"#,
        )
        .await;
        let client = client(&server);

        // Act
        let page = client.people_lists().popular(&[]).await.unwrap();

        // Assert
        let person = page.results.first().unwrap();
        assert_eq!(person.known_for_department.as_deref(), Some("Acting"));
        assert!(matches!(
            person.known_for.first(),
            Some(MediaSummary::Movie(m)) if m.id == 24428
        ));
    }
}

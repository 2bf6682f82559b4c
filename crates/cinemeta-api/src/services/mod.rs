//! Resource services.
//!
//! Each service is a borrowed view of the client's
//! [`RequestPipeline`](crate::pipeline::RequestPipeline): it picks a path,
//! forwards the caller's parameters and decodes one shape.

/// Declares a service struct bound to a borrowed pipeline.
macro_rules! service {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            pipeline: &'a crate::pipeline::RequestPipeline,
        }

        impl<'a> $name<'a> {
            pub(crate) const fn new(pipeline: &'a crate::pipeline::RequestPipeline) -> Self {
                Self { pipeline }
            }

            /// Pipeline requests are sent through.
            #[must_use]
            pub const fn pipeline(&self) -> &'a crate::pipeline::RequestPipeline {
                self.pipeline
            }
        }
    };
}

mod account;
mod authentication;
mod certifications;
mod changes;
mod collections;
mod companies;
mod configuration;
mod credits;
mod discover;
mod find;
mod genres;
mod guest_sessions;
mod keywords;
mod lists;
mod movie_lists;
mod movies;
mod networks;
mod people;
mod people_lists;
mod reviews;
mod search;
mod trending;
mod tv_episode_groups;
mod tv_episodes;
mod tv_seasons;
mod tv_series;
mod tv_series_lists;
mod watch_providers;

pub use account::AccountService;
pub use authentication::AuthenticationService;
pub use certifications::CertificationsService;
pub use changes::ChangesService;
pub use collections::CollectionsService;
pub use companies::CompaniesService;
pub use configuration::ConfigurationService;
pub use credits::CreditsService;
pub use discover::DiscoverService;
pub use find::FindService;
pub use genres::GenresService;
pub use guest_sessions::GuestSessionsService;
pub use keywords::KeywordsService;
pub use lists::ListsService;
pub use movie_lists::MovieListsService;
pub use movies::MoviesService;
pub use networks::NetworksService;
pub use people::PeopleService;
pub use people_lists::PeopleListsService;
pub use reviews::ReviewsService;
pub use search::SearchService;
pub use trending::TrendingService;
pub use tv_episode_groups::TvEpisodeGroupsService;
pub use tv_episodes::TvEpisodesService;
pub use tv_seasons::TvSeasonsService;
pub use tv_series::TvSeriesService;
pub use tv_series_lists::TvSeriesListsService;
pub use watch_providers::WatchProvidersService;

#[cfg(test)]
pub(crate) mod test_support {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{ClientOption, TmdbClient};

    /// Bearer-authenticated client pointed at `server`.
    pub(crate) fn client(server: &MockServer) -> TmdbClient {
        TmdbClient::with_bearer_token(
            "test-token",
            [ClientOption::BaseUrl(server.uri().parse().unwrap())],
        )
        .unwrap()
    }

    /// Serves `body` once for `GET {route}`.
    pub(crate) async fn mount_get(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }
}

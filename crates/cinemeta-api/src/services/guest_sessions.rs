//! `guest_session/{guest_session_id}` endpoints.

use tracing::instrument;

use crate::error::Result;
use crate::params::QueryParam;
use crate::pipeline::path_segment;
use crate::types::{Paged, RatedEpisode, RatedMovie, RatedTv};

service! {
    /// Ratings made under a guest session.
    GuestSessionsService
}

impl GuestSessionsService<'_> {
    /// Movies rated by the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_movies(
        &self,
        guest_session_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedMovie>> {
        let guest_session_id = path_segment(guest_session_id)?;
        self.pipeline
            .get_json(
                &format!("guest_session/{guest_session_id}/rated/movies"),
                params,
            )
            .await
    }

    /// Series rated by the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_tv(
        &self,
        guest_session_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedTv>> {
        let guest_session_id = path_segment(guest_session_id)?;
        self.pipeline
            .get_json(&format!("guest_session/{guest_session_id}/rated/tv"), params)
            .await
    }

    /// Episodes rated by the guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn rated_tv_episodes(
        &self,
        guest_session_id: &str,
        params: &[QueryParam],
    ) -> Result<Paged<RatedEpisode>> {
        let guest_session_id = path_segment(guest_session_id)?;
        self.pipeline
            .get_json(
                &format!("guest_session/{guest_session_id}/rated/tv/episodes"),
                params,
            )
            .await
    }
}

//! `tv/episode_group/{tv_episode_group_id}` endpoint.

use tracing::instrument;

use crate::error::Result;
use crate::pipeline::path_segment;
use crate::types::EpisodeGroupDetails;

service! {
    /// Alternative episode orderings (broadcast, DVD, story arcs).
    TvEpisodeGroupsService
}

impl TvEpisodeGroupsService<'_> {
    /// Episode group with its ordered episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[instrument(skip_all)]
    pub async fn details(&self, episode_group_id: &str) -> Result<EpisodeGroupDetails> {
        let episode_group_id = path_segment(episode_group_id)?;
        self.pipeline
            .get_json(&format!("tv/episode_group/{episode_group_id}"), &[])
            .await
    }
}

use super::*;
use crate::endpoint::{CREATE_CLIP, GET_CLIPS, GET_VIDEOS};
use crate::query::QueryArgs;

/// Parameters of GET /helix/videos.
///
/// Look up by `ids` (one or more), or by a single `user_id` or `game_id`;
/// the remaining fields only apply to the latter two.
#[derive(Debug, Clone, Default)]
pub struct VideosFilter {
    pub ids: Vec<String>,
    pub game_id: Option<String>,
    pub user_id: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub first: Option<u32>,
    pub language: Option<String>,
    /// `all`, `day`, `week` or `month`.
    pub period: Option<String>,
    /// `time`, `trending` or `views`.
    pub sort: Option<String>,
    /// `all`, `upload`, `archive` or `highlight`.
    pub video_type: Option<String>,
}

impl VideosFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .multi("id", &self.ids)
            .scalar("game_id", self.game_id.as_deref())
            .scalar("user_id", self.user_id.as_deref())
            .scalar("after", self.after.as_deref())
            .scalar("before", self.before.as_deref())
            .scalar("first", self.first)
            .scalar("language", self.language.as_deref())
            .scalar("period", self.period.as_deref())
            .scalar("sort", self.sort.as_deref())
            .scalar("type", self.video_type.as_deref())
    }
}

/// Parameters of GET /helix/clips.
///
/// Look up by `ids`, or by a single `broadcaster_id` or `game_id` within
/// an optional creation window.
#[derive(Debug, Clone, Default)]
pub struct ClipsFilter {
    pub ids: Vec<String>,
    pub broadcaster_id: Option<String>,
    pub game_id: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub first: Option<u32>,
}

impl ClipsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .multi("id", &self.ids)
            .scalar("broadcaster_id", self.broadcaster_id.as_deref())
            .scalar("game_id", self.game_id.as_deref())
            .scalar("after", self.after.as_deref())
            .scalar("before", self.before.as_deref())
            .scalar("ended_at", self.ended_at.as_ref().map(rfc3339))
            .scalar("started_at", self.started_at.as_ref().map(rfc3339))
            .scalar("first", self.first)
    }
}

impl HelixClient {
    /// Get videos by id, user or game.
    pub async fn get_videos(&self, filter: &VideosFilter) -> Result<VideosResponse, HelixError> {
        self.call(&GET_VIDEOS, &filter.query_args(), None).await
    }

    /// Get clips by id, broadcaster or game.
    pub async fn get_clips(&self, filter: &ClipsFilter) -> Result<ClipsResponse, HelixError> {
        self.call(&GET_CLIPS, &filter.query_args(), None).await
    }

    /// Create a clip of the broadcaster's live stream.
    ///
    /// `has_delay` asks Twitch to account for the broadcast delay.
    pub async fn create_clip(
        &self,
        token: &str,
        broadcaster_id: &str,
        has_delay: Option<bool>,
    ) -> Result<CreatedClipResponse, HelixError> {
        let args = QueryArgs::new()
            .required("broadcaster_id", broadcaster_id)
            .scalar("has_delay", has_delay);
        self.call(&CREATE_CLIP, &args, Some(token)).await
    }
}

use super::*;
use crate::endpoint::{GET_STREAMS, GET_STREAMS_METADATA};
use crate::query::QueryArgs;

/// Parameters of GET /helix/streams. Every list accepts several values.
#[derive(Debug, Clone, Default)]
pub struct StreamsFilter {
    pub user_logins: Vec<String>,
    pub user_ids: Vec<String>,
    pub languages: Vec<String>,
    pub game_ids: Vec<String>,
    pub first: Option<u32>,
    pub community_ids: Vec<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl StreamsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .multi("user_login", &self.user_logins)
            .multi("user_id", &self.user_ids)
            .multi("language", &self.languages)
            .multi("game_id", &self.game_ids)
            .scalar("first", self.first)
            .multi("community_id", &self.community_ids)
            .scalar("before", self.before.as_deref())
            .scalar("after", self.after.as_deref())
    }
}

/// Parameters of GET /helix/streams/metadata.
#[derive(Debug, Clone, Default)]
pub struct StreamsMetadataFilter {
    pub after: Option<String>,
    pub community_ids: Vec<String>,
    pub before: Option<String>,
    pub first: Option<u32>,
    pub game_ids: Vec<String>,
    pub languages: Vec<String>,
    pub user_ids: Vec<String>,
    pub user_logins: Vec<String>,
}

impl StreamsMetadataFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("after", self.after.as_deref())
            .multi("community_id", &self.community_ids)
            .scalar("before", self.before.as_deref())
            .scalar("first", self.first)
            .multi("game_id", &self.game_ids)
            .multi("language", &self.languages)
            .multi("user_id", &self.user_ids)
            .multi("user_login", &self.user_logins)
    }
}

impl HelixClient {
    /// Get one page of live streams, sorted by viewers descending.
    pub async fn get_streams(
        &self,
        filter: &StreamsFilter,
    ) -> Result<StreamsResponse, HelixError> {
        self.call(&GET_STREAMS, &filter.query_args(), None).await
    }

    /// Get game-specific metadata (Overwatch, Hearthstone) of live streams.
    pub async fn get_streams_metadata(
        &self,
        filter: &StreamsMetadataFilter,
    ) -> Result<StreamsMetadataResponse, HelixError> {
        self.call(&GET_STREAMS_METADATA, &filter.query_args(), None).await
    }
}

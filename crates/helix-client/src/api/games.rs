use super::*;
use crate::endpoint::{GET_GAMES, GET_TOP_GAMES};
use crate::query::QueryArgs;

/// Optional parameters of GET /helix/games/top.
#[derive(Debug, Clone, Default)]
pub struct TopGamesFilter {
    pub first: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl TopGamesFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("first", self.first)
            .scalar("before", self.before.as_deref())
            .scalar("after", self.after.as_deref())
    }
}

impl HelixClient {
    /// Get games by id and/or name.
    pub async fn get_games<S: AsRef<str>>(
        &self,
        ids: &[S],
        names: &[S],
    ) -> Result<GamesResponse, HelixError> {
        let args = QueryArgs::new().multi("id", ids).multi("name", names);
        self.call(&GET_GAMES, &args, None).await
    }

    /// Get games sorted by current viewers. One page; the cursor is returned.
    pub async fn get_top_games(
        &self,
        filter: &TopGamesFilter,
    ) -> Result<TopGamesResponse, HelixError> {
        self.call(&GET_TOP_GAMES, &filter.query_args(), None).await
    }
}

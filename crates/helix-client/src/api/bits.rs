use super::*;
use crate::endpoint::GET_BITS_LEADERBOARD;
use crate::query::QueryArgs;

/// Parameters of GET /helix/bits/leaderboard.
#[derive(Debug, Clone, Default)]
pub struct BitsLeaderboardFilter {
    /// 1..=100, Twitch defaults to 10.
    pub count: Option<u32>,
    /// `day`, `week`, `month`, `year` or `all`.
    pub period: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

impl BitsLeaderboardFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("count", self.count)
            .scalar("period", self.period.as_deref())
            .scalar("started_at", self.started_at.as_ref().map(rfc3339))
            .scalar("user_id", self.user_id.as_deref())
    }
}

impl HelixClient {
    /// Get the bits leaderboard of the broadcaster owning `token`.
    pub async fn get_bits_leaderboard(
        &self,
        token: &str,
        filter: &BitsLeaderboardFilter,
    ) -> Result<BitsLeaderboardResponse, HelixError> {
        self.call(&GET_BITS_LEADERBOARD, &filter.query_args(), Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_query_order() {
        let filter = BitsLeaderboardFilter {
            count: Some(2),
            period: Some("week".into()),
            user_id: Some("12345".into()),
            ..Default::default()
        };
        let q = GET_BITS_LEADERBOARD.query(&filter.query_args()).unwrap();
        assert_eq!(q, "?count=2&period=week&user_id=12345");
    }

    #[test]
    fn leaderboard_response_deserializes() {
        let body = r#"{
          "data": [
            {"user_id": "158010205", "user_name": "TundraCowboy", "rank": 1, "score": 12543},
            {"user_id": "7168163", "user_name": "Topramens", "rank": 2, "score": 6900}
          ],
          "date_range": {
            "started_at": "2018-02-05T08:00:00Z",
            "ended_at": "2018-02-12T08:00:00Z"
          },
          "total": 2
        }"#;

        let parsed: BitsLeaderboardResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.data[0].score, 12543);
        assert_eq!(parsed.data[1].rank, 2);
        assert_eq!(parsed.date_range.started_at, "2018-02-05T08:00:00Z");
    }
}

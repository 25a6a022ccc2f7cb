use super::*;
use crate::endpoint::{GET_EXTENSION_ANALYTICS, GET_GAME_ANALYTICS};
use crate::query::QueryArgs;

/// Parameters of GET /helix/analytics/games.
///
/// `started_at` and `ended_at` must be given together.
#[derive(Debug, Clone, Default)]
pub struct GameAnalyticsFilter {
    pub after: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
    pub first: Option<u32>,
    pub game_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub report_type: Option<String>,
}

impl GameAnalyticsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("after", self.after.as_deref())
            .scalar("ended_at", self.ended_at.as_ref().map(rfc3339))
            .scalar("first", self.first)
            .scalar("game_id", self.game_id.as_deref())
            .scalar("started_at", self.started_at.as_ref().map(rfc3339))
            .scalar("type", self.report_type.as_deref())
    }
}

/// Parameters of GET /helix/analytics/extensions.
#[derive(Debug, Clone, Default)]
pub struct ExtensionAnalyticsFilter {
    pub after: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
    pub extension_id: Option<String>,
    pub first: Option<u32>,
    pub started_at: Option<DateTime<Utc>>,
    pub report_type: Option<String>,
}

impl ExtensionAnalyticsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("after", self.after.as_deref())
            .scalar("ended_at", self.ended_at.as_ref().map(rfc3339))
            .scalar("extension_id", self.extension_id.as_deref())
            .scalar("first", self.first)
            .scalar("started_at", self.started_at.as_ref().map(rfc3339))
            .scalar("type", self.report_type.as_deref())
    }
}

impl HelixClient {
    /// Get download links for game analytics reports.
    pub async fn get_game_analytics(
        &self,
        token: &str,
        filter: &GameAnalyticsFilter,
    ) -> Result<GameAnalyticsResponse, HelixError> {
        self.call(&GET_GAME_ANALYTICS, &filter.query_args(), Some(token)).await
    }

    /// Get download links for extension analytics reports.
    pub async fn get_extension_analytics(
        &self,
        token: &str,
        filter: &ExtensionAnalyticsFilter,
    ) -> Result<ExtensionAnalyticsResponse, HelixError> {
        self.call(&GET_EXTENSION_ANALYTICS, &filter.query_args(), Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn game_analytics_query_order() {
        let filter = GameAnalyticsFilter {
            game_id: Some("493057".into()),
            started_at: Some(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap()),
            ended_at: Some(Utc.with_ymd_and_hms(2018, 3, 1, 0, 0, 0).unwrap()),
            report_type: Some("overview_v2".into()),
            ..Default::default()
        };
        let q = GET_GAME_ANALYTICS.query(&filter.query_args()).unwrap();
        assert_eq!(
            q,
            "?ended_at=2018-03-01T00:00:00Z&game_id=493057&started_at=2018-01-01T00:00:00Z&type=overview_v2"
        );
    }

    #[test]
    fn extension_analytics_query_without_window() {
        let filter = ExtensionAnalyticsFilter {
            extension_id: Some("abcd".into()),
            first: Some(5),
            ..Default::default()
        };
        let q = GET_EXTENSION_ANALYTICS.query(&filter.query_args()).unwrap();
        assert_eq!(q, "?extension_id=abcd&first=5");
    }

    #[test]
    fn game_report_maps_uppercase_url() {
        let body = r#"{
          "data": [{
            "game_id": "493057",
            "URL": "https://twitch-piper-reports.s3-us-west-2.amazonaws.com/games/66170/overview/15183",
            "type": "overview_v2",
            "date_range": {
              "started_at": "2018-01-01T00:00:00Z",
              "ended_at": "2018-03-01T00:00:00Z"
            }
          }],
          "pagination": {}
        }"#;

        let parsed: GameAnalyticsResponse = serde_json::from_str(body).unwrap();
        let report = &parsed.data[0];
        assert!(report.url.starts_with("https://"));
        assert_eq!(report.report_type, "overview_v2");
        assert_eq!(report.date_range.ended_at, "2018-03-01T00:00:00Z");
        assert!(parsed.pagination.cursor.is_none());
    }

    #[test]
    fn extension_report_deserializes() {
        let body = r#"{
          "data": [{
            "extension_id": "efgh",
            "URL": "https://example.com/report.csv",
            "type": "overview_v1",
            "date_range": {"started_at": "2018-03-01T00:00:00Z", "ended_at": "2018-06-01T00:00:00Z"}
          }]
        }"#;

        let parsed: ExtensionAnalyticsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].extension_id, "efgh");
        assert_eq!(parsed.data[0].date_range.started_at, "2018-03-01T00:00:00Z");
    }
}

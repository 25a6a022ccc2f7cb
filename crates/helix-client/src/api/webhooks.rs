use super::*;
use crate::endpoint::GET_WEBHOOK_SUBSCRIPTIONS;
use crate::query::QueryArgs;

/// Optional parameters of GET /helix/webhooks/subscriptions.
#[derive(Debug, Clone, Default)]
pub struct WebhookSubscriptionsFilter {
    pub after: Option<String>,
    pub first: Option<u32>,
}

impl WebhookSubscriptionsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("after", self.after.as_deref())
            .scalar("first", self.first)
    }
}

impl HelixClient {
    /// Get the webhook subscriptions of the application, one page at a time.
    ///
    /// Requires an app access token.
    pub async fn get_webhook_subscriptions(
        &self,
        token: &str,
        filter: &WebhookSubscriptionsFilter,
    ) -> Result<WebhookSubscriptionsResponse, HelixError> {
        self.call(&GET_WEBHOOK_SUBSCRIPTIONS, &filter.query_args(), Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_query() {
        let filter = WebhookSubscriptionsFilter {
            after: Some("cur".into()),
            first: Some(10),
        };
        let q = GET_WEBHOOK_SUBSCRIPTIONS.query(&filter.query_args()).unwrap();
        assert_eq!(q, "?after=cur&first=10");
    }

    #[test]
    fn webhook_response_deserializes() {
        let body = r#"{
          "total": 1,
          "data": [{
            "topic": "https://api.twitch.tv/helix/streams?user_id=123",
            "callback": "http://example.com/your_callback",
            "expires_at": "2018-07-30T20:00:00Z"
          }],
          "pagination": {"cursor": "eyJiIjpudWxsLCJhIjoiIn0"}
        }"#;

        let parsed: WebhookSubscriptionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total, 1);
        assert!(parsed.data[0].topic.contains("user_id=123"));
        assert_eq!(parsed.data[0].expires_at, "2018-07-30T20:00:00Z");
    }
}

use super::*;
use crate::endpoint::{GET_BROADCASTER_SUBSCRIBERS, GET_BROADCASTER_SUBSCRIPTIONS};
use crate::query::QueryArgs;

impl HelixClient {
    /// Check which of `user_ids` subscribe to the broadcaster.
    ///
    /// Users that are not subscribed are absent from `data`.
    pub async fn get_broadcaster_subscribers<S: AsRef<str>>(
        &self,
        token: &str,
        broadcaster_id: &str,
        user_ids: &[S],
    ) -> Result<SubscribersResponse, HelixError> {
        let args = QueryArgs::new()
            .required("broadcaster_id", broadcaster_id)
            .multi("user_id", user_ids);
        self.call(&GET_BROADCASTER_SUBSCRIBERS, &args, Some(token)).await
    }

    /// Get one page of the broadcaster's subscriptions.
    pub async fn get_broadcaster_subscriptions(
        &self,
        token: &str,
        broadcaster_id: &str,
    ) -> Result<SubscriptionsResponse, HelixError> {
        let args = QueryArgs::new().required("broadcaster_id", broadcaster_id);
        self.call(&GET_BROADCASTER_SUBSCRIPTIONS, &args, Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_query_lists_each_user() {
        let args = QueryArgs::new()
            .required("broadcaster_id", "123")
            .multi("user_id", &["1", "2"]);
        assert_eq!(
            GET_BROADCASTER_SUBSCRIBERS.query(&args).unwrap(),
            "?broadcaster_id=123&user_id=1&user_id=2"
        );
    }

    #[test]
    fn subscription_response_deserializes() {
        let body = r#"{
          "data": [{
            "broadcaster_id": "123",
            "broadcaster_name": "test_user",
            "is_gift": true,
            "tier": "1000",
            "plan_name": "The Ninjas",
            "user_id": "123",
            "user_name": "snoirf"
          }],
          "pagination": { "cursor": "xxxx" }
        }"#;

        let parsed: SubscriptionsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data[0].is_gift);
        assert_eq!(parsed.data[0].tier, "1000");
        assert_eq!(parsed.pagination.cursor.as_deref(), Some("xxxx"));
    }

    #[test]
    fn subscriber_pagination_accepts_token_key() {
        let body = r#"{"data": [], "pagination": {"token": "next"}}"#;
        let parsed: SubscribersResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.pagination.cursor.as_deref(), Some("next"));
    }
}

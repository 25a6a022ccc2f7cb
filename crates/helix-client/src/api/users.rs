use super::*;
use crate::endpoint::{GET_USER_FOLLOWS, GET_USERS, UPDATE_DESCRIPTION};
use crate::query::QueryArgs;

/// Optional parameters of GET /helix/users/follows.
#[derive(Debug, Clone, Default)]
pub struct UserFollowsFilter {
    pub first: Option<u32>,
    pub after: Option<String>,
    pub from_id: Option<String>,
    pub to_id: Option<String>,
}

impl UserFollowsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("first", self.first)
            .scalar("after", self.after.as_deref())
            .scalar("from_id", self.from_id.as_deref())
            .scalar("to_id", self.to_id.as_deref())
    }
}

pub(super) fn users_args<S: AsRef<str>>(ids: &[S], logins: &[S]) -> QueryArgs {
    QueryArgs::new().multi("id", ids).multi("login", logins)
}

impl HelixClient {
    /// Get users by id and/or login.
    ///
    /// A user that does not exist is simply missing from `data`.
    pub async fn get_users<S: AsRef<str>>(
        &self,
        ids: &[S],
        logins: &[S],
    ) -> Result<UsersResponse, HelixError> {
        self.call(&GET_USERS, &users_args(ids, logins), None).await
    }

    /// Get one page of follow relationships.
    pub async fn get_user_follows(
        &self,
        filter: &UserFollowsFilter,
    ) -> Result<FollowsResponse, HelixError> {
        self.call(&GET_USER_FOLLOWS, &filter.query_args(), None).await
    }

    /// Update the description of the user owning `token`.
    pub async fn update_description(
        &self,
        token: &str,
        description: &str,
    ) -> Result<UsersResponse, HelixError> {
        let args = QueryArgs::new().required("description", description);
        self.call(&UPDATE_DESCRIPTION, &args, Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_query_by_single_id() {
        let ids = vec!["156900877".to_string()];
        let q = GET_USERS.query(&users_args(ids.as_slice(), &[])).unwrap();
        assert_eq!(q, "?id=156900877");
    }

    #[test]
    fn users_query_by_ids_and_login() {
        let ids = ["156900877", "55706186"];
        let q = GET_USERS.query(&users_args(&ids, &["ninja"])).unwrap();
        assert_eq!(q, "?id=156900877&id=55706186&login=ninja");
    }

    #[test]
    fn follows_query_order() {
        let filter = UserFollowsFilter {
            first: Some(100),
            after: None,
            from_id: Some("23161357".into()),
            to_id: Some("12826".into()),
        };
        let q = GET_USER_FOLLOWS.query(&filter.query_args()).unwrap();
        assert_eq!(q, "?first=100&from_id=23161357&to_id=12826");
    }

    #[test]
    fn follows_response_deserializes_total_and_cursor() {
        let body = r#"{
          "total": 12345,
          "data": [{
            "from_id": "171003792",
            "from_name": "IIIsutha067III",
            "to_id": "23161357",
            "to_name": "LIRIK",
            "followed_at": "2017-08-22T22:55:24Z"
          }],
          "pagination": { "cursor": "eyJiIjpudWxsLCJhIjoiMTUwMzQ0MTc3NjQyNDQyMjAwMCJ9" }
        }"#;

        let parsed: FollowsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total, 12345);
        assert_eq!(parsed.data[0].to_name, "LIRIK");
        assert!(parsed.pagination.cursor.is_some());
    }

    #[test]
    fn user_response_maps_type_field() {
        let body = r#"{
          "data": [{
            "id": "44322889",
            "login": "dallas",
            "display_name": "dallas",
            "type": "staff",
            "broadcaster_type": "",
            "description": "Just a gamer playing games and chatting. :)",
            "profile_image_url": "https://static-cdn.jtvnw.net/jtv_user_pictures/dallas-profile_image-1a2c906ee2c35f12-300x300.png",
            "offline_image_url": "https://static-cdn.jtvnw.net/jtv_user_pictures/dallas-channel_offline_image-1a2c906ee2c35f12-1920x1080.png",
            "view_count": 191836881
          }]
        }"#;

        let parsed: UsersResponse = serde_json::from_str(body).unwrap();
        let user = &parsed.data[0];
        assert_eq!(user.user_type, "staff");
        assert_eq!(user.view_count, 191836881);
        assert!(user.offline_image_url.contains("offline"));
    }
}

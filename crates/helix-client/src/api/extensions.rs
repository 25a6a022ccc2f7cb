use super::*;
use crate::endpoint::{GET_ACTIVE_USER_EXTENSIONS, GET_USER_EXTENSIONS, UPDATE_USER_EXTENSIONS};
use crate::query::QueryArgs;

impl HelixClient {
    /// List every extension installed by the user owning `token`.
    pub async fn get_user_extensions(
        &self,
        token: &str,
    ) -> Result<UserExtensionsResponse, HelixError> {
        self.call(&GET_USER_EXTENSIONS, &QueryArgs::new(), Some(token)).await
    }

    /// Get the active extensions of `user_id`, or of the token owner when
    /// `None`.
    pub async fn get_active_user_extensions(
        &self,
        token: &str,
        user_id: Option<&str>,
    ) -> Result<ActiveUserExtensionsResponse, HelixError> {
        let args = QueryArgs::new().scalar("user_id", user_id);
        self.call(&GET_ACTIVE_USER_EXTENSIONS, &args, Some(token)).await
    }

    /// Activate, deactivate or move extensions of the token owner.
    ///
    /// Returns the resulting slot layout.
    pub async fn update_user_extensions(
        &self,
        token: &str,
        request: &UpdateUserExtensionsRequest,
    ) -> Result<ActiveUserExtensionsResponse, HelixError> {
        self.call_json(&UPDATE_USER_EXTENSIONS, &QueryArgs::new(), Some(token), request).await
    }
}

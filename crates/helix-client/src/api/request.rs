use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;
use crate::auth::auth_header;
use crate::endpoint::Endpoint;
use crate::query::QueryArgs;

/// Status and body of one completed HTTP exchange.
pub(super) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HelixClient {
    /// Perform the HTTP exchange for an endpoint without judging the status.
    ///
    /// Exactly one auth header is attached, chosen by the endpoint entry.
    /// The body must match the entry's declared [`crate::endpoint::BodyKind`].
    pub(super) async fn send(
        &self,
        endpoint: &Endpoint,
        args: &QueryArgs,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<RawResponse, HelixError> {
        endpoint.check_body(body.as_deref())?;
        let url = endpoint.url(&self.base_url, args)?;
        let (header, value) = auth_header(endpoint.name, endpoint.auth, &self.client_id, token)?;
        let method = endpoint.method.as_reqwest();

        tracing::debug!(endpoint = endpoint.name, %method, url = %url, "Sending Helix request");

        let mut request = self.http.request(method, &url).header(header, value);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        tracing::debug!(
            endpoint = endpoint.name,
            status = status.as_u16(),
            bytes = body.len(),
            "Helix response received"
        );

        Ok(RawResponse { status, body })
    }

    /// Send a request and decode a successful response through the
    /// endpoint's payload codec.
    pub(super) async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &QueryArgs,
        token: Option<&str>,
    ) -> Result<T, HelixError> {
        self.call_raw_body(endpoint, args, token, None).await
    }

    /// Like [`Self::call`] with a JSON body encoded through the endpoint's codec.
    pub(super) async fn call_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &QueryArgs,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, HelixError> {
        let encoded = endpoint.encode_body(Some(body))?;
        self.call_raw_body(endpoint, args, token, encoded).await
    }

    async fn call_raw_body<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        args: &QueryArgs,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<T, HelixError> {
        let resp = self.send(endpoint, args, token, body).await?;

        if !resp.status.is_success() {
            return Err(HelixError::ApiError {
                status: resp.status.as_u16(),
                message: resp.body,
            });
        }

        Ok(endpoint.codec.decode(&resp.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{UPDATE_DESCRIPTION, UPDATE_USER_EXTENSIONS};

    fn unreachable_client() -> HelixClient {
        HelixClient::new("cid").with_base_url("http://127.0.0.1:1/helix")
    }

    #[tokio::test]
    async fn body_on_bodyless_endpoint_is_rejected_before_sending() {
        let args = QueryArgs::new().required("description", "hi");
        let err = unreachable_client()
            .send(&UPDATE_DESCRIPTION, &args, Some("tok"), Some(r#"{"x":1}"#.into()))
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            HelixError::UnexpectedBody {
                endpoint: "update_description"
            }
        ));
    }

    #[tokio::test]
    async fn json_endpoint_without_body_is_rejected_before_sending() {
        let err = unreachable_client()
            .call::<ActiveUserExtensionsResponse>(
                &UPDATE_USER_EXTENSIONS,
                &QueryArgs::new(),
                Some("tok"),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HelixError::MissingBody {
                endpoint: "update_user_extensions"
            }
        ));
    }
}

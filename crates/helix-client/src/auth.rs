//! Authentication header selection.
//!
//! Every endpoint declares exactly one requirement. App-identifier endpoints
//! send `Client-ID`; bearer endpoints send `Authorization: Bearer <token>`.
//! Never both, never neither.

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

use crate::HelixError;

pub const CLIENT_ID_HEADER: HeaderName = HeaderName::from_static("client-id");

/// Credential an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Application identifier only.
    ClientId,
    /// Per-user bearer token supplied with the call.
    Bearer,
}

/// Build the single header for a call.
///
/// `token` is ignored for [`AuthRequirement::ClientId`]; it must be present
/// and non-empty for [`AuthRequirement::Bearer`].
pub fn auth_header(
    endpoint: &'static str,
    requirement: AuthRequirement,
    client_id: &str,
    token: Option<&str>,
) -> Result<(HeaderName, HeaderValue), HelixError> {
    match requirement {
        AuthRequirement::ClientId => Ok((
            CLIENT_ID_HEADER,
            HeaderValue::from_str(client_id)?,
        )),
        AuthRequirement::Bearer => {
            let token = token
                .filter(|t| !t.is_empty())
                .ok_or(HelixError::AuthRequired { endpoint })?;
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            Ok((AUTHORIZATION, value))
        }
    }
}

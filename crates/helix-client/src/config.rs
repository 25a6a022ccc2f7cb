//! Client configuration loaded from the environment.

use std::time::Duration;

use crate::HelixError;
use crate::api::HELIX_BASE;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings needed to build a [`crate::HelixClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub user_id: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            user_id: None,
            base_url: HELIX_BASE.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Read `TWITCH_CLIENT_ID`, `TWITCH_USER_ID`, `HELIX_BASE_URL` and
    /// `HELIX_TIMEOUT_SECS`. Unset or empty values fall back to defaults.
    pub fn from_env() -> Result<Self, HelixError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, HelixError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> String { lookup(key).unwrap_or_default().trim().to_string() };

        let config = Self {
            client_id: g("TWITCH_CLIENT_ID"),
            user_id: {
                let id = g("TWITCH_USER_ID");
                if id.is_empty() { None } else { Some(id) }
            },
            base_url: {
                let url = g("HELIX_BASE_URL");
                if url.is_empty() { HELIX_BASE.into() } else { url }
            },
            timeout_secs: parse_u64(&g("HELIX_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty client id or an unparsable base URL.
    pub fn validate(&self) -> Result<(), HelixError> {
        if self.client_id.trim().is_empty() {
            return Err(HelixError::Config("TWITCH_CLIENT_ID is not set".into()));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(HelixError::Config("HELIX_TIMEOUT_SECS must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_fill_missing_values() {
        let config = ClientConfig::from_lookup(lookup(&[("TWITCH_CLIENT_ID", "cid")])).unwrap();
        assert_eq!(config.client_id, "cid");
        assert_eq!(config.user_id, None);
        assert_eq!(config.base_url, HELIX_BASE);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_read() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TWITCH_CLIENT_ID", " cid "),
            ("TWITCH_USER_ID", "44322889"),
            ("HELIX_BASE_URL", "http://127.0.0.1:9000/helix"),
            ("HELIX_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.client_id, "cid");
        assert_eq!(config.user_id.as_deref(), Some("44322889"));
        assert_eq!(config.base_url, "http://127.0.0.1:9000/helix");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TWITCH_CLIENT_ID", "cid"),
            ("HELIX_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn missing_client_id_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, HelixError::Config(_)));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = ClientConfig {
            client_id: "cid".into(),
            base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HelixError::UrlParse(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig {
            client_id: "cid".into(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HelixError::Config(_))));
    }
}

//! Twitch Helix REST API client library.
//!
//! Provides one typed call per Helix endpoint. Query strings are assembled
//! from a declarative endpoint registry, the single required auth header is
//! attached per endpoint, and payloads whose field names are not valid Rust
//! identifiers are normalized before decoding.

pub mod api;
pub mod auth;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod query;

pub use api::HelixClient;
pub use auth::AuthRequirement;
pub use codec::PayloadCodec;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use query::{ParamValue, QueryArgs, build_query};

/// Unified error type for the helix-client crate.
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Twitch API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Bearer token required for {endpoint}")]
    AuthRequired { endpoint: &'static str },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Parameter `{param}` is not declared by {endpoint}")]
    UndeclaredParam {
        endpoint: &'static str,
        param: &'static str,
    },

    #[error("Parameter `{param}` has the wrong arity for {endpoint}")]
    ParamKind {
        endpoint: &'static str,
        param: &'static str,
    },

    #[error("{endpoint} does not take a request body")]
    UnexpectedBody { endpoint: &'static str },

    #[error("{endpoint} requires a request body")]
    MissingBody { endpoint: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

//! Twitch Helix REST API client.
//!
//! One method per endpoint. Every method hands its arguments to the
//! endpoint registry, which fixes parameter order, auth header and payload
//! codec; dispatch and decoding are shared in `request.rs`.

mod analytics;
mod bits;
mod extensions;
mod games;
mod request;
mod streams;
mod subscriptions;
mod tags;
mod users;
mod videos;
mod webhooks;

pub mod models;

pub use analytics::{ExtensionAnalyticsFilter, GameAnalyticsFilter};
pub use bits::BitsLeaderboardFilter;
pub use games::TopGamesFilter;
pub use models::{
    ActiveExtensions, ActiveExtensionsUpdate, ActiveUserExtensionsResponse, BitsLeaderboardEntry,
    BitsLeaderboardResponse, BroadcasterSubscription, Clip, ClipsResponse, ComponentSlot,
    ComponentSlotUpdate, ComponentSlots, ComponentSlotsUpdate, CreatedClip, CreatedClipResponse,
    DateRange, ExtensionAnalyticsReport, ExtensionAnalyticsResponse, ExtensionSlot,
    ExtensionSlotUpdate, Follow, FollowsResponse, Game, GameAnalyticsReport, GameAnalyticsResponse,
    GamesResponse, HearthstoneHero, HearthstoneMetadata, HearthstonePlayer, LocalizedText,
    OverlaySlots, OverlaySlotsUpdate, OverwatchBroadcaster, OverwatchHero, OverwatchMetadata,
    Pagination, PanelSlots, PanelSlotsUpdate, Stream, StreamMetadata, StreamTag,
    StreamTagsResponse, StreamsMetadataResponse, StreamsResponse, Subscriber, SubscribersResponse,
    SubscriptionsResponse, TagReplaceOutcome, TagReplaceRequest, TopGamesResponse,
    UpdateUserExtensionsRequest, User, UserExtension, UserExtensionsResponse, UsersResponse, Video,
    VideosResponse, WebhookSubscription, WebhookSubscriptionsResponse,
};
pub use streams::{StreamsFilter, StreamsMetadataFilter};
pub use tags::AllStreamTagsFilter;
pub use users::UserFollowsFilter;
pub use videos::{ClipsFilter, VideosFilter};
pub use webhooks::WebhookSubscriptionsFilter;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::HelixError;
use crate::config::ClientConfig;

pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";

/// Twitch Helix API client.
///
/// Holds only immutable identifiers; bearer tokens are passed per call and
/// never stored. Safe to share across tasks.
#[derive(Debug, Clone)]
pub struct HelixClient {
    pub(super) http: reqwest::Client,
    pub(super) client_id: String,
    pub(super) user_id: Option<String>,
    pub(super) base_url: String,
}

impl HelixClient {
    /// Client against the public Helix base URL with default transport settings.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: client_id.into(),
            user_id: None,
            base_url: HELIX_BASE.to_string(),
        }
    }

    /// Build a client from validated configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HelixError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        tracing::info!(
            base_url = %config.base_url,
            has_user_id = config.user_id.is_some(),
            "Helix client configured"
        );

        Ok(Self {
            http,
            client_id: config.client_id.clone(),
            user_id: config.user_id.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Attach the end-user identifier this client acts for.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Point the client at a different base URL (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// End-user identifier, if one was configured. Not sent by any call.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// RFC 3339 with second precision and a `Z` suffix, as Helix expects.
pub(super) fn rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

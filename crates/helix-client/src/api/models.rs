use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::deserialize_tag_id;

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cursor block returned by paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, alias = "token")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub started_at: String,
    pub ended_at: String,
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Game from GET /helix/games and /helix/games/top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Game>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopGamesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Game>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// User from GET /helix/users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<User>,
}

/// Follow relationship from GET /helix/users/follows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Follow {
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub to_name: String,
    pub followed_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowsResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Follow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Stream tags
// ---------------------------------------------------------------------------

/// Per-locale strings of a stream tag.
///
/// Wire keys are `bg-bg`, `en-us`, ...; they only match these fields after
/// the tag payload's hyphens have been flattened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub bg_bg: String,
    pub cs_cz: String,
    pub da_dk: String,
    pub de_de: String,
    pub el_gr: String,
    pub en_us: String,
    pub es_es: String,
    pub es_mx: String,
    pub fi_fi: String,
    pub fr_fr: String,
    pub hu_hu: String,
    pub it_it: String,
    pub ja_jp: String,
    pub ko_kr: String,
    pub nl_nl: String,
    pub no_no: String,
    pub pl_pl: String,
    pub pt_br: String,
    pub pt_pt: String,
    pub ro_ro: String,
    pub ru_ru: String,
    pub sk_sk: String,
    pub sv_se: String,
    pub th_th: String,
    pub tr_tr: String,
    pub vi_vn: String,
    pub zh_cn: String,
    pub zh_tw: String,
}

/// Stream tag from GET /helix/streams/tags and /helix/tags/streams.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamTag {
    #[serde(deserialize_with = "deserialize_tag_id")]
    pub tag_id: String,
    pub is_auto: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub localization_names: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub localization_descriptions: LocalizedText,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamTagsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<StreamTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Request body for PUT /helix/streams/tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagReplaceRequest {
    pub tag_ids: Vec<String>,
}

/// Result of PUT /helix/streams/tags.
///
/// Only `204 No Content` counts as success; every other status collapses
/// into failure. The raw status is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagReplaceOutcome {
    pub status: u16,
}

impl TagReplaceOutcome {
    pub fn is_success(&self) -> bool {
        self.status == 204
    }

    /// `"Success"` or `"Failed"`.
    pub fn as_str(&self) -> &'static str {
        if self.is_success() { "Success" } else { "Failed" }
    }
}

impl std::fmt::Display for TagReplaceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Videos, clips, streams
// ---------------------------------------------------------------------------

/// Video from GET /helix/videos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub published_at: String,
    pub url: String,
    pub thumbnail_url: String,
    pub viewable: String,
    pub view_count: u64,
    pub language: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideosResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Video>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Clip from GET /helix/clips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub creator_id: String,
    pub creator_name: String,
    pub video_id: String,
    pub game_id: String,
    pub language: String,
    pub title: String,
    pub view_count: u64,
    pub created_at: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Clip>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Newly created clip from POST /helix/clips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedClip {
    pub id: String,
    pub edit_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatedClipResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<CreatedClip>,
}

/// Live stream from GET /helix/streams.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub game_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub community_ids: Vec<String>,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: String,
    pub language: String,
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Stream>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverwatchHero {
    pub role: String,
    pub name: String,
    pub ability: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverwatchBroadcaster {
    pub hero: OverwatchHero,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverwatchMetadata {
    pub broadcaster: OverwatchBroadcaster,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthstoneHero {
    #[serde(rename = "type")]
    pub hero_type: String,
    pub class: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthstonePlayer {
    pub hero: HearthstoneHero,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthstoneMetadata {
    pub broadcaster: HearthstonePlayer,
    pub opponent: HearthstonePlayer,
}

/// Game-specific stream metadata from GET /helix/streams/metadata.
///
/// The game blocks are `null` for streams not playing that game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamMetadata {
    pub user_id: String,
    pub user_name: String,
    pub game_id: String,
    pub overwatch: Option<OverwatchMetadata>,
    pub hearthstone: Option<HearthstoneMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamsMetadataResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<StreamMetadata>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

/// Entry from GET /helix/subscriptions filtered by user ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscriber {
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub is_gift: bool,
    pub tier: String,
    pub plan_name: String,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscribersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Subscriber>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Entry from GET /helix/subscriptions for a whole channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcasterSubscription {
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub is_gift: bool,
    pub tier: String,
    pub plan_name: String,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<BroadcasterSubscription>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Analytics, bits, webhooks
// ---------------------------------------------------------------------------

/// Game analytics report link from GET /helix/analytics/games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameAnalyticsReport {
    pub game_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameAnalyticsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<GameAnalyticsReport>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Extension analytics report link from GET /helix/analytics/extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionAnalyticsReport {
    pub extension_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionAnalyticsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<ExtensionAnalyticsReport>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Bits leaderboard entry from GET /helix/bits/leaderboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BitsLeaderboardEntry {
    pub user_id: String,
    pub user_name: String,
    pub rank: u32,
    pub score: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BitsLeaderboardResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<BitsLeaderboardEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_range: DateRange,
    #[serde(default)]
    pub total: u64,
}

/// Webhook subscription from GET /helix/webhooks/subscriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSubscription {
    pub topic: String,
    pub callback: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookSubscriptionsResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<WebhookSubscription>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Extensions
// ---------------------------------------------------------------------------

/// Installed extension from GET /helix/users/extensions/list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserExtension {
    pub id: String,
    pub version: String,
    pub name: String,
    pub can_activate: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub extension_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserExtensionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<UserExtension>,
}

/// Panel or overlay slot. Inactive slots carry only `active: false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionSlot {
    pub active: bool,
    pub id: String,
    pub version: String,
    pub name: String,
}

/// Component slot, positioned on the video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSlot {
    pub active: bool,
    pub id: String,
    pub version: String,
    pub name: String,
    pub x: i64,
    pub y: i64,
}

/// Wire keys `"1"`..`"3"` arrive here as `one`..`three`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSlots {
    pub one: ExtensionSlot,
    pub two: ExtensionSlot,
    pub three: ExtensionSlot,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySlots {
    pub one: ExtensionSlot,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSlots {
    pub one: ComponentSlot,
    pub two: ComponentSlot,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveExtensions {
    pub panel: PanelSlots,
    pub overlay: OverlaySlots,
    pub component: ComponentSlots,
}

/// Response of GET and PUT /helix/users/extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveUserExtensionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ActiveExtensions,
}

/// Panel or overlay slot to update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionSlotUpdate {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Component slot to update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSlotUpdate {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelSlotsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<ExtensionSlotUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<ExtensionSlotUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three: Option<ExtensionSlotUpdate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlaySlotsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<ExtensionSlotUpdate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSlotsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<ComponentSlotUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<ComponentSlotUpdate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveExtensionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelSlotsUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlaySlotsUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentSlotsUpdate>,
}

/// Request body for PUT /helix/users/extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserExtensionsRequest {
    pub data: ActiveExtensionsUpdate,
}

//! Declarative Helix endpoint registry.
//!
//! Each entry fixes the path, method, auth requirement, parameter emission
//! order and payload codec of one REST operation. Operations only supply
//! argument values; the entry decides how they reach the wire.

use reqwest::Method;
use serde::Serialize;

use crate::HelixError;
use crate::auth::AuthRequirement;
use crate::codec::PayloadCodec;
use crate::query::{ParamValue, QueryArgs, build_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Scalar,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

const fn one(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Scalar,
    }
}

const fn many(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Multi,
    }
}

/// Whether an endpoint carries a JSON request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Json,
    /// Body sent only when there is something to send.
    OptionalJson,
}

#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub auth: AuthRequirement,
    /// Emission order of query parameters.
    pub params: &'static [ParamSpec],
    pub body: BodyKind,
    pub codec: PayloadCodec,
}

impl Endpoint {
    /// Query-string suffix for the given arguments, in declared order.
    pub fn query(&self, args: &QueryArgs) -> Result<String, HelixError> {
        for name in args.names() {
            let spec = self
                .params
                .iter()
                .find(|p| p.name == name)
                .ok_or(HelixError::UndeclaredParam {
                    endpoint: self.name,
                    param: name,
                })?;
            let kind_matches = matches!(
                (spec.kind, args.get(name)),
                (ParamKind::Scalar, Some(ParamValue::Scalar(_)))
                    | (ParamKind::Multi, Some(ParamValue::Multi(_)))
            );
            if !kind_matches {
                return Err(HelixError::ParamKind {
                    endpoint: self.name,
                    param: spec.name,
                });
            }
        }

        Ok(build_query(
            self.params.iter().map(|p| (p.name, args.get(p.name))),
        ))
    }

    /// Check a request body against the declared [`BodyKind`].
    pub fn check_body(&self, body: Option<&str>) -> Result<(), HelixError> {
        match (self.body, body) {
            (BodyKind::None, Some(_)) => Err(HelixError::UnexpectedBody {
                endpoint: self.name,
            }),
            (BodyKind::Json, None) => Err(HelixError::MissingBody {
                endpoint: self.name,
            }),
            _ => Ok(()),
        }
    }

    /// Serialize a request body through the endpoint codec.
    pub fn encode_body<B: Serialize>(
        &self,
        body: Option<&B>,
    ) -> Result<Option<String>, HelixError> {
        let encoded = body.map(|b| self.codec.encode(b)).transpose()?;
        self.check_body(encoded.as_deref())?;
        Ok(encoded)
    }

    /// Full request URL: base + path + query suffix.
    pub fn url(&self, base: &str, args: &QueryArgs) -> Result<String, HelixError> {
        let query = self.query(args)?;
        Ok(format!("{}{}{query}", base.trim_end_matches('/'), self.path))
    }
}

pub static GET_GAMES: Endpoint = Endpoint {
    name: "get_games",
    method: HttpMethod::Get,
    path: "/games",
    auth: AuthRequirement::ClientId,
    params: &[many("id"), many("name")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_TOP_GAMES: Endpoint = Endpoint {
    name: "get_top_games",
    method: HttpMethod::Get,
    path: "/games/top",
    auth: AuthRequirement::ClientId,
    params: &[one("first"), one("before"), one("after")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_USERS: Endpoint = Endpoint {
    name: "get_users",
    method: HttpMethod::Get,
    path: "/users",
    auth: AuthRequirement::ClientId,
    params: &[many("id"), many("login")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_STREAM_TAGS: Endpoint = Endpoint {
    name: "get_stream_tags",
    method: HttpMethod::Get,
    path: "/streams/tags",
    auth: AuthRequirement::ClientId,
    params: &[one("broadcaster_id")],
    body: BodyKind::None,
    codec: PayloadCodec::TagIds,
};

pub static GET_ALL_STREAM_TAGS: Endpoint = Endpoint {
    name: "get_all_stream_tags",
    method: HttpMethod::Get,
    path: "/tags/streams",
    auth: AuthRequirement::ClientId,
    params: &[one("first"), many("tag_id"), one("after")],
    body: BodyKind::None,
    codec: PayloadCodec::TagIds,
};

pub static GET_USER_FOLLOWS: Endpoint = Endpoint {
    name: "get_user_follows",
    method: HttpMethod::Get,
    path: "/users/follows",
    auth: AuthRequirement::ClientId,
    params: &[one("first"), one("after"), one("from_id"), one("to_id")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_VIDEOS: Endpoint = Endpoint {
    name: "get_videos",
    method: HttpMethod::Get,
    path: "/videos",
    auth: AuthRequirement::ClientId,
    params: &[
        many("id"),
        one("game_id"),
        one("user_id"),
        one("after"),
        one("before"),
        one("first"),
        one("language"),
        one("period"),
        one("sort"),
        one("type"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_CLIPS: Endpoint = Endpoint {
    name: "get_clips",
    method: HttpMethod::Get,
    path: "/clips",
    auth: AuthRequirement::ClientId,
    params: &[
        many("id"),
        one("broadcaster_id"),
        one("game_id"),
        one("after"),
        one("before"),
        one("ended_at"),
        one("started_at"),
        one("first"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_STREAMS: Endpoint = Endpoint {
    name: "get_streams",
    method: HttpMethod::Get,
    path: "/streams",
    auth: AuthRequirement::ClientId,
    params: &[
        many("user_login"),
        many("user_id"),
        many("language"),
        many("game_id"),
        one("first"),
        many("community_id"),
        one("before"),
        one("after"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static UPDATE_DESCRIPTION: Endpoint = Endpoint {
    name: "update_description",
    method: HttpMethod::Put,
    path: "/users",
    auth: AuthRequirement::Bearer,
    params: &[one("description")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_BROADCASTER_SUBSCRIBERS: Endpoint = Endpoint {
    name: "get_broadcaster_subscribers",
    method: HttpMethod::Get,
    path: "/subscriptions",
    auth: AuthRequirement::Bearer,
    params: &[one("broadcaster_id"), many("user_id")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_BROADCASTER_SUBSCRIPTIONS: Endpoint = Endpoint {
    name: "get_broadcaster_subscriptions",
    method: HttpMethod::Get,
    path: "/subscriptions",
    auth: AuthRequirement::Bearer,
    params: &[one("broadcaster_id")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static CREATE_CLIP: Endpoint = Endpoint {
    name: "create_clip",
    method: HttpMethod::Post,
    path: "/clips",
    auth: AuthRequirement::Bearer,
    params: &[one("broadcaster_id"), one("has_delay")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_GAME_ANALYTICS: Endpoint = Endpoint {
    name: "get_game_analytics",
    method: HttpMethod::Get,
    path: "/analytics/games",
    auth: AuthRequirement::Bearer,
    params: &[
        one("after"),
        one("ended_at"),
        one("first"),
        one("game_id"),
        one("started_at"),
        one("type"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_USER_EXTENSIONS: Endpoint = Endpoint {
    name: "get_user_extensions",
    method: HttpMethod::Get,
    path: "/users/extensions/list",
    auth: AuthRequirement::Bearer,
    params: &[],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_ACTIVE_USER_EXTENSIONS: Endpoint = Endpoint {
    name: "get_active_user_extensions",
    method: HttpMethod::Get,
    path: "/users/extensions",
    auth: AuthRequirement::Bearer,
    params: &[one("user_id")],
    body: BodyKind::None,
    codec: PayloadCodec::SlotNumerals,
};

pub static GET_EXTENSION_ANALYTICS: Endpoint = Endpoint {
    name: "get_extension_analytics",
    method: HttpMethod::Get,
    path: "/analytics/extensions",
    auth: AuthRequirement::Bearer,
    params: &[
        one("after"),
        one("ended_at"),
        one("extension_id"),
        one("first"),
        one("started_at"),
        one("type"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static GET_STREAMS_METADATA: Endpoint = Endpoint {
    name: "get_streams_metadata",
    method: HttpMethod::Get,
    path: "/streams/metadata",
    auth: AuthRequirement::ClientId,
    params: &[
        one("after"),
        many("community_id"),
        one("before"),
        one("first"),
        many("game_id"),
        many("language"),
        many("user_id"),
        many("user_login"),
    ],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static UPDATE_USER_EXTENSIONS: Endpoint = Endpoint {
    name: "update_user_extensions",
    method: HttpMethod::Put,
    path: "/users/extensions",
    auth: AuthRequirement::Bearer,
    params: &[],
    body: BodyKind::Json,
    codec: PayloadCodec::SlotNumerals,
};

pub static GET_BITS_LEADERBOARD: Endpoint = Endpoint {
    name: "get_bits_leaderboard",
    method: HttpMethod::Get,
    path: "/bits/leaderboard",
    auth: AuthRequirement::Bearer,
    params: &[one("count"), one("period"), one("started_at"), one("user_id")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

pub static REPLACE_STREAM_TAGS: Endpoint = Endpoint {
    name: "replace_stream_tags",
    method: HttpMethod::Put,
    path: "/streams/tags",
    auth: AuthRequirement::Bearer,
    params: &[one("broadcaster_id")],
    body: BodyKind::OptionalJson,
    codec: PayloadCodec::Plain,
};

pub static GET_WEBHOOK_SUBSCRIPTIONS: Endpoint = Endpoint {
    name: "get_webhook_subscriptions",
    method: HttpMethod::Get,
    path: "/webhooks/subscriptions",
    auth: AuthRequirement::Bearer,
    params: &[one("after"), one("first")],
    body: BodyKind::None,
    codec: PayloadCodec::Plain,
};

/// Every endpoint the client exposes.
pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_GAMES,
    &GET_TOP_GAMES,
    &GET_USERS,
    &GET_STREAM_TAGS,
    &GET_ALL_STREAM_TAGS,
    &GET_USER_FOLLOWS,
    &GET_VIDEOS,
    &GET_CLIPS,
    &GET_STREAMS,
    &UPDATE_DESCRIPTION,
    &GET_BROADCASTER_SUBSCRIBERS,
    &GET_BROADCASTER_SUBSCRIPTIONS,
    &CREATE_CLIP,
    &GET_GAME_ANALYTICS,
    &GET_USER_EXTENSIONS,
    &GET_ACTIVE_USER_EXTENSIONS,
    &GET_EXTENSION_ANALYTICS,
    &GET_STREAMS_METADATA,
    &UPDATE_USER_EXTENSIONS,
    &GET_BITS_LEADERBOARD,
    &REPLACE_STREAM_TAGS,
    &GET_WEBHOOK_SUBSCRIPTIONS,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const BASE: &str = "https://api.twitch.tv/helix";

    #[test]
    fn names_are_unique_and_params_not_repeated() {
        let mut names = HashSet::new();
        for e in ENDPOINTS {
            assert!(names.insert(e.name), "duplicate endpoint {}", e.name);
            let mut params = HashSet::new();
            for p in e.params {
                assert!(params.insert(p.name), "{} repeats {}", e.name, p.name);
            }
            assert!(e.path.starts_with('/'), "{}", e.name);
        }
        assert_eq!(ENDPOINTS.len(), 22);
    }

    #[test]
    fn get_users_by_single_id() {
        let ids = vec!["156900877".to_string()];
        let args = QueryArgs::new().multi("id", &ids);
        assert_eq!(GET_USERS.query(&args).unwrap(), "?id=156900877");
        assert_eq!(GET_USERS.auth, AuthRequirement::ClientId);
    }

    #[test]
    fn get_users_by_ids_and_login() {
        let args = QueryArgs::new()
            .multi("login", &["ninja"])
            .multi("id", &["156900877", "55706186"]);
        assert_eq!(
            GET_USERS.url(BASE, &args).unwrap(),
            "https://api.twitch.tv/helix/users?id=156900877&id=55706186&login=ninja"
        );
    }

    #[test]
    fn top_games_without_arguments_has_no_query() {
        assert_eq!(GET_TOP_GAMES.query(&QueryArgs::new()).unwrap(), "");
        assert_eq!(
            GET_TOP_GAMES.url(&format!("{BASE}/"), &QueryArgs::new()).unwrap(),
            "https://api.twitch.tv/helix/games/top"
        );
    }

    #[test]
    fn emission_follows_declared_order_not_insertion_order() {
        let args = QueryArgs::new()
            .required("after", "cur")
            .multi("user_login", &["a", "b"])
            .required("first", 10)
            .multi("game_id", &["33214"]);
        assert_eq!(
            GET_STREAMS.query(&args).unwrap(),
            "?user_login=a&user_login=b&game_id=33214&first=10&after=cur"
        );
    }

    #[test]
    fn subscribers_without_user_ids_has_no_trailing_separator() {
        let args = QueryArgs::new()
            .required("broadcaster_id", "123")
            .multi("user_id", &Vec::<String>::new());
        assert_eq!(
            GET_BROADCASTER_SUBSCRIBERS.query(&args).unwrap(),
            "?broadcaster_id=123"
        );
    }

    #[test]
    fn undeclared_param_is_rejected() {
        let args = QueryArgs::new().required("cursor", "x");
        let err = GET_TOP_GAMES.query(&args).unwrap_err();
        assert!(matches!(
            err,
            HelixError::UndeclaredParam {
                endpoint: "get_top_games",
                param: "cursor"
            }
        ));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let args = QueryArgs::new().required("id", "1");
        let err = GET_GAMES.query(&args).unwrap_err();
        assert!(matches!(err, HelixError::ParamKind { param: "id", .. }));
    }

    #[test]
    fn codecs_are_declared_only_where_needed() {
        let coded: Vec<_> = ENDPOINTS
            .iter()
            .filter(|e| e.codec != PayloadCodec::Plain)
            .map(|e| (e.name, e.codec))
            .collect();
        assert_eq!(
            coded,
            [
                ("get_stream_tags", PayloadCodec::TagIds),
                ("get_all_stream_tags", PayloadCodec::TagIds),
                ("get_active_user_extensions", PayloadCodec::SlotNumerals),
                ("update_user_extensions", PayloadCodec::SlotNumerals),
            ]
        );
    }

    #[test]
    fn bodies_are_declared_only_on_writes() {
        for e in ENDPOINTS {
            if e.body != BodyKind::None {
                assert_eq!(e.method, HttpMethod::Put, "{}", e.name);
                assert_eq!(e.auth, AuthRequirement::Bearer, "{}", e.name);
            }
        }
        assert_eq!(REPLACE_STREAM_TAGS.body, BodyKind::OptionalJson);
        assert_eq!(UPDATE_USER_EXTENSIONS.body, BodyKind::Json);
    }

    #[test]
    fn body_is_rejected_where_none_is_declared() {
        let err = UPDATE_DESCRIPTION.check_body(Some("{}")).unwrap_err();
        assert!(matches!(
            err,
            HelixError::UnexpectedBody {
                endpoint: "update_description"
            }
        ));
        assert!(GET_USERS.check_body(None).is_ok());
    }

    #[test]
    fn json_endpoints_require_a_body() {
        let err = UPDATE_USER_EXTENSIONS.check_body(None).unwrap_err();
        assert!(matches!(
            err,
            HelixError::MissingBody {
                endpoint: "update_user_extensions"
            }
        ));
        assert!(UPDATE_USER_EXTENSIONS.check_body(Some("{}")).is_ok());
    }

    #[test]
    fn optional_body_accepts_either() {
        assert!(REPLACE_STREAM_TAGS.check_body(None).is_ok());
        assert!(REPLACE_STREAM_TAGS.check_body(Some("{}")).is_ok());
    }

    #[test]
    fn encode_body_applies_codec_and_kind() {
        let body = serde_json::json!({"panel": {"one": {"active": true}}});
        assert_eq!(
            UPDATE_USER_EXTENSIONS.encode_body(Some(&body)).unwrap().as_deref(),
            Some(r#"{"panel":{"1":{"active":true}}}"#)
        );
        assert_eq!(REPLACE_STREAM_TAGS.encode_body::<()>(None).unwrap(), None);
        assert!(matches!(
            GET_GAMES.encode_body(Some(&body)),
            Err(HelixError::UnexpectedBody { .. })
        ));
    }
}

//! Field-name normalization for payloads Rust structs cannot mirror directly.
//!
//! Two text-level transforms are applied to raw JSON, not to a parsed tree:
//!
//! - Slot numerals: the extension endpoints key their slots `"1"`, `"2"`,
//!   `"3"`. Every occurrence of those exact quoted tokens is rewritten to
//!   `"one"`, `"two"`, `"three"` before decoding, and back before sending.
//! - Tag identifiers: tag payloads carry locale keys such as `en-us`. Every
//!   `-` in the text becomes `_` before decoding; the tag id field alone is
//!   restored afterwards by [`restore_tag_id`].
//!
//! Both rewrite any matching substring anywhere in the payload, including
//! inside values.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

const SLOT_NUMERALS: [(&str, &str); 3] = [
    ("\"1\"", "\"one\""),
    ("\"2\"", "\"two\""),
    ("\"3\"", "\"three\""),
];

/// Rewrite quoted slot numerals to their word form.
pub fn numerals_to_words(json: &str) -> String {
    SLOT_NUMERALS
        .iter()
        .fold(json.to_string(), |acc, (numeral, word)| {
            acc.replace(numeral, word)
        })
}

/// Inverse of [`numerals_to_words`].
pub fn words_to_numerals(json: &str) -> String {
    SLOT_NUMERALS
        .iter()
        .fold(json.to_string(), |acc, (numeral, word)| {
            acc.replace(word, numeral)
        })
}

/// Replace every hyphen in the payload with an underscore.
pub fn hyphens_to_underscores(json: &str) -> String {
    json.replace('-', "_")
}

/// Restore hyphens in a decoded tag id. Idempotent.
pub fn restore_tag_id(tag_id: &str) -> String {
    tag_id.replace('_', "-")
}

/// `deserialize_with` adapter applying [`restore_tag_id`] to one field.
/// `null` decodes as an empty id.
pub fn deserialize_tag_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|id| restore_tag_id(&id)).unwrap_or_default())
}

/// Payload normalization declared by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadCodec {
    /// Raw payload is decoded as-is.
    Plain,
    /// Slot numerals ↔ words, on responses and request bodies.
    SlotNumerals,
    /// Hyphens flattened on responses; tag ids restored per record.
    TagIds,
}

impl PayloadCodec {
    /// Transform a raw response body into its decodable form.
    pub fn to_readable<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            PayloadCodec::Plain => Cow::Borrowed(raw),
            PayloadCodec::SlotNumerals => Cow::Owned(numerals_to_words(raw)),
            PayloadCodec::TagIds => Cow::Owned(hyphens_to_underscores(raw)),
        }
    }

    /// Transform a serialized request body into its wire form.
    ///
    /// Tag payloads are never sent with flattened hyphens, so only the
    /// numeral codec rewrites bodies.
    pub fn to_wire<'a>(&self, body: &'a str) -> Cow<'a, str> {
        match self {
            PayloadCodec::SlotNumerals => Cow::Owned(words_to_numerals(body)),
            PayloadCodec::Plain | PayloadCodec::TagIds => Cow::Borrowed(body),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.to_readable(raw))
    }

    pub fn encode<T: Serialize>(&self, body: &T) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(body)?;
        Ok(self.to_wire(&json).into_owned())
    }
}

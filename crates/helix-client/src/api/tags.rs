use super::*;
use crate::endpoint::{GET_ALL_STREAM_TAGS, GET_STREAM_TAGS, REPLACE_STREAM_TAGS};
use crate::query::QueryArgs;

/// Optional parameters of GET /helix/tags/streams.
#[derive(Debug, Clone, Default)]
pub struct AllStreamTagsFilter {
    pub first: Option<u32>,
    pub tag_ids: Vec<String>,
    pub after: Option<String>,
}

impl AllStreamTagsFilter {
    pub(super) fn query_args(&self) -> QueryArgs {
        QueryArgs::new()
            .scalar("first", self.first)
            .multi("tag_id", &self.tag_ids)
            .scalar("after", self.after.as_deref())
    }
}

/// JSON body for a tag replacement; `None` clears every tag.
pub(super) fn tag_replace_body<S: AsRef<str>>(
    tag_ids: &[S],
) -> Result<Option<String>, HelixError> {
    let request = (!tag_ids.is_empty()).then(|| TagReplaceRequest {
        tag_ids: tag_ids.iter().map(|t| t.as_ref().to_string()).collect(),
    });
    REPLACE_STREAM_TAGS.encode_body(request.as_ref())
}

impl HelixClient {
    /// Get the tags applied to a broadcaster's stream.
    pub async fn get_stream_tags(
        &self,
        broadcaster_id: &str,
    ) -> Result<StreamTagsResponse, HelixError> {
        let args = QueryArgs::new().required("broadcaster_id", broadcaster_id);
        self.call(&GET_STREAM_TAGS, &args, None).await
    }

    /// Get one page of all stream tags defined by Twitch.
    pub async fn get_all_stream_tags(
        &self,
        filter: &AllStreamTagsFilter,
    ) -> Result<StreamTagsResponse, HelixError> {
        self.call(&GET_ALL_STREAM_TAGS, &filter.query_args(), None).await
    }

    /// Replace the manual tags of a stream.
    ///
    /// An empty `tag_ids` sends no body, which removes every manual tag.
    /// Any status other than `204 No Content` is reported as a failed
    /// outcome rather than an error; transport failures are still errors.
    pub async fn replace_stream_tags<S: AsRef<str>>(
        &self,
        token: &str,
        broadcaster_id: &str,
        tag_ids: &[S],
    ) -> Result<TagReplaceOutcome, HelixError> {
        let args = QueryArgs::new().required("broadcaster_id", broadcaster_id);
        let body = tag_replace_body(tag_ids)?;
        let resp = self.send(&REPLACE_STREAM_TAGS, &args, Some(token), body).await?;
        Ok(TagReplaceOutcome {
            status: resp.status.as_u16(),
        })
    }
}

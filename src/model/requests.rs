/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::{AppError, PocketResult};
use crate::presentation::action::Action;
use crate::presentation::filter::{ContentType, DetailType, Favorite, Sort, State};
use crate::presentation::serialization::join_tags;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of the request token call
#[derive(Debug, Clone, Serialize)]
pub struct RequestTokenRequest<'a> {
    /// Application consumer key
    pub consumer_key: &'a str,
    /// Where the consent page sends the user back
    pub redirect_uri: &'a str,
}

/// Body of the access token call
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenRequest<'a> {
    /// Application consumer key
    pub consumer_key: &'a str,
    /// Request token approved by the user
    pub code: &'a str,
}

/// Wraps an operation body with the credentials every item call carries
///
/// The inner body is flattened, so the JSON stays a single object.
#[derive(Debug, Clone, Serialize)]
pub struct Authenticated<'a, T: Serialize> {
    /// Operation specific fields
    #[serde(flatten)]
    pub body: &'a T,
    /// Application consumer key
    pub consumer_key: &'a str,
    /// User access token
    pub access_token: &'a str,
}

/// Input of the `add` endpoint
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AddRequest {
    /// URL to save, required
    pub url: String,
    /// Title used when the page cannot be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Comma-separated tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Tweet id when the URL comes from a tweet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<String>,
}

impl AddRequest {
    /// Creates a request saving `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Some(join_tags(tags));
        self
    }

    /// Set the tweet id
    #[must_use]
    pub fn with_tweet_id(mut self, tweet_id: impl Into<String>) -> Self {
        self.tweet_id = Some(tweet_id.into());
        self
    }

    /// Checks the URL is present
    pub fn validate(&self) -> PocketResult<()> {
        if self.url.trim().is_empty() {
            return Err(AppError::InvalidInput("url is required to add an item".to_string()));
        }
        Ok(())
    }
}

/// Body of the `send` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ModifyRequest<'a> {
    /// Actions applied in order
    pub actions: &'a [Action],
}

/// Input of the `get` endpoint
///
/// Every filter is optional; unset filters are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct RetrieveRequest {
    /// Read state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    /// Favorite flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<Favorite>,
    /// Tag name, or `_untagged_`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Content type
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    /// Amount of data per item
    #[serde(rename = "detailType", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<DetailType>,
    /// Text searched in titles and URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Domain filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Only items changed since this unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Offset used with `count` for paging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl RetrieveRequest {
    /// Creates a request without filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read state
    #[must_use]
    pub fn with_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the favorite flag
    #[must_use]
    pub fn with_favorite(mut self, favorite: Favorite) -> Self {
        self.favorite = Some(favorite);
        self
    }

    /// Set the tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Only untagged items
    #[must_use]
    pub fn untagged(self) -> Self {
        self.with_tag(crate::constants::UNTAGGED)
    }

    /// Set the content type
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the detail type
    #[must_use]
    pub fn with_detail_type(mut self, detail_type: DetailType) -> Self {
        self.detail_type = Some(detail_type);
        self
    }

    /// Set the search text
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Only items changed since `since`
    #[must_use]
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since.timestamp());
        self
    }

    /// Set the count
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the offset
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::serialization::{
    map_or_empty_seq, null_as_default, number_or_string, parse_unix_timestamp,
    string_or_number,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Publisher information attached to an item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainMetadata {
    /// Publisher name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Logo URL
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
    /// Greyscale logo URL
    #[serde(deserialize_with = "null_as_default")]
    pub greyscale_logo: String,
}

/// Item returned by the `add` endpoint
///
/// Counters and flags are kept as the strings the API sends.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Pocket item id
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Normalised URL
    #[serde(deserialize_with = "null_as_default")]
    pub normal_url: String,
    /// Id of the resolved item
    #[serde(deserialize_with = "string_or_number")]
    pub resolved_id: String,
    /// Extended item id
    #[serde(deserialize_with = "string_or_number")]
    pub extended_item_id: String,
    /// URL after following redirects
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_url: String,
    /// Domain id
    #[serde(deserialize_with = "string_or_number")]
    pub domain_id: String,
    /// Origin domain id
    #[serde(deserialize_with = "string_or_number")]
    pub origin_domain_id: String,
    /// HTTP code returned when the page was fetched
    #[serde(deserialize_with = "string_or_number")]
    pub response_code: String,
    /// Mime type of the page
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    /// Content length in bytes
    #[serde(deserialize_with = "string_or_number")]
    pub content_length: String,
    /// Character encoding
    #[serde(deserialize_with = "null_as_default")]
    pub encoding: String,
    /// When the URL was resolved
    #[serde(deserialize_with = "null_as_default")]
    pub date_resolved: String,
    /// Publication date reported by the page
    #[serde(deserialize_with = "null_as_default")]
    pub date_published: String,
    /// Page title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// First lines of the article
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// Word count
    #[serde(deserialize_with = "string_or_number")]
    pub word_count: String,
    /// Whether the page redirected within its own domain
    #[serde(deserialize_with = "string_or_number")]
    pub innerdomain_redirect: String,
    /// Whether the page requires a login
    #[serde(deserialize_with = "string_or_number")]
    pub login_required: String,
    /// 0, 1 if the item has images, 2 if it is an image
    #[serde(deserialize_with = "string_or_number")]
    pub has_image: String,
    /// 0, 1 if the item has videos, 2 if it is a video
    #[serde(deserialize_with = "string_or_number")]
    pub has_video: String,
    /// Whether the page is an index page
    #[serde(deserialize_with = "string_or_number")]
    pub is_index: String,
    /// Whether the page is an article
    #[serde(deserialize_with = "string_or_number")]
    pub is_article: String,
    /// Whether the parser used a fallback
    #[serde(deserialize_with = "string_or_number")]
    pub used_fallback: String,
    /// Detected language
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    /// When the page was first parsed
    #[serde(deserialize_with = "string_or_number")]
    pub time_first_parsed: String,
    /// Authors, shape varies between payloads
    pub authors: serde_json::Value,
    /// Images, shape varies between payloads
    pub images: serde_json::Value,
    /// Videos, shape varies between payloads
    pub videos: serde_json::Value,
    /// Normalised resolved URL
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_normal_url: String,
    /// Publisher information
    #[serde(deserialize_with = "null_as_default")]
    pub domain_metadata: DomainMetadata,
    /// Estimated reading time in minutes
    #[serde(deserialize_with = "number_or_string")]
    pub time_to_read: i64,
    /// URL as submitted
    #[serde(deserialize_with = "null_as_default")]
    pub given_url: String,
}

/// Author of a retrieved item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Item the author belongs to
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Author id
    #[serde(deserialize_with = "string_or_number")]
    pub author_id: String,
    /// Author name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Author page
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Lead image of a retrieved item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Item the image belongs to
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    /// Width in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub width: String,
    /// Height in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
}

/// One entry of the `images` map of a retrieved item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesItem {
    /// Item the image belongs to
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Image id within the item
    #[serde(deserialize_with = "string_or_number")]
    pub image_id: String,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    /// Width in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub width: String,
    /// Height in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
    /// Image credit
    #[serde(deserialize_with = "null_as_default")]
    pub credit: String,
    /// Image caption
    #[serde(deserialize_with = "null_as_default")]
    pub caption: String,
}

/// One entry of the `videos` map of a retrieved item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    /// Item the video belongs to
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Video id within the item
    #[serde(deserialize_with = "string_or_number")]
    pub video_id: String,
    /// Video URL
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    /// Width in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub width: String,
    /// Height in pixels
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
    /// Provider type
    #[serde(rename = "type", deserialize_with = "string_or_number")]
    pub kind: String,
    /// Provider video id
    #[serde(deserialize_with = "null_as_default")]
    pub vid: String,
    /// Length in seconds
    #[serde(deserialize_with = "string_or_number")]
    pub length: String,
}

/// Tag attached to a retrieved item
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Item the tag belongs to
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Tag name
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
}

/// Status of a saved item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// In the list
    Unread,
    /// Archived
    Archived,
    /// Pending deletion
    Deleted,
}

/// Entry of the `list` map returned by the `get` endpoint
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    /// Pocket item id
    #[serde(deserialize_with = "string_or_number")]
    pub item_id: String,
    /// Id of the resolved item
    #[serde(deserialize_with = "string_or_number")]
    pub resolved_id: String,
    /// URL as saved
    #[serde(deserialize_with = "null_as_default")]
    pub given_url: String,
    /// Title as saved
    #[serde(deserialize_with = "null_as_default")]
    pub given_title: String,
    /// "0" or "1"
    #[serde(deserialize_with = "string_or_number")]
    pub favorite: String,
    /// "0" unread, "1" archived, "2" deleted
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
    /// Unix timestamp, as a string
    #[serde(deserialize_with = "string_or_number")]
    pub time_added: String,
    /// Unix timestamp, as a string
    #[serde(deserialize_with = "string_or_number")]
    pub time_updated: String,
    /// Unix timestamp, as a string, "0" when unread
    #[serde(deserialize_with = "string_or_number")]
    pub time_read: String,
    /// Unix timestamp, as a string, "0" when not favorited
    #[serde(deserialize_with = "string_or_number")]
    pub time_favorited: String,
    /// Position in the sorted result
    #[serde(deserialize_with = "number_or_string")]
    pub sort_id: i64,
    /// Title found when resolving the page
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_title: String,
    /// URL after following redirects
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_url: String,
    /// First lines of the article
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// "0" or "1"
    #[serde(deserialize_with = "string_or_number")]
    pub is_article: String,
    /// "0" or "1"
    #[serde(deserialize_with = "string_or_number")]
    pub is_index: String,
    /// "0", "1" has videos, "2" is a video
    #[serde(deserialize_with = "string_or_number")]
    pub has_video: String,
    /// "0", "1" has images, "2" is an image
    #[serde(deserialize_with = "string_or_number")]
    pub has_image: String,
    /// Word count
    #[serde(deserialize_with = "string_or_number")]
    pub word_count: String,
    /// Detected language
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    /// Authors keyed by author id
    #[serde(deserialize_with = "map_or_empty_seq")]
    pub authors: HashMap<String, Author>,
    /// Lead image
    #[serde(deserialize_with = "null_as_default")]
    pub image: Image,
    /// Images keyed by image id
    #[serde(deserialize_with = "map_or_empty_seq")]
    pub images: HashMap<String, ImagesItem>,
    /// Videos keyed by video id
    #[serde(deserialize_with = "map_or_empty_seq")]
    pub videos: HashMap<String, Video>,
    /// Tags keyed by name
    #[serde(deserialize_with = "map_or_empty_seq")]
    pub tags: HashMap<String, Tag>,
    /// Publisher information
    #[serde(deserialize_with = "null_as_default")]
    pub domain_metadata: DomainMetadata,
    /// Estimated listening time in seconds
    #[serde(deserialize_with = "number_or_string")]
    pub listen_duration_estimate: i64,
    /// Estimated reading time in minutes
    #[serde(deserialize_with = "number_or_string")]
    pub time_to_read: i64,
}

impl ListItem {
    /// Whether the item is marked as favorite
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.favorite.trim() == "1"
    }

    /// Decoded item status
    #[must_use]
    pub fn item_status(&self) -> Option<ItemStatus> {
        match self.status.trim() {
            "0" => Some(ItemStatus::Unread),
            "1" => Some(ItemStatus::Archived),
            "2" => Some(ItemStatus::Deleted),
            _ => None,
        }
    }

    /// Word count, if the API sent a number
    #[must_use]
    pub fn word_count(&self) -> Option<u32> {
        self.word_count.trim().parse().ok()
    }

    /// Title to show: the resolved one, falling back to the given one
    #[must_use]
    pub fn title(&self) -> &str {
        if self.resolved_title.is_empty() {
            &self.given_title
        } else {
            &self.resolved_title
        }
    }

    /// When the item was saved
    #[must_use]
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        parse_unix_timestamp(&self.time_added)
    }

    /// When the item was last changed
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        parse_unix_timestamp(&self.time_updated)
    }

    /// When the item was archived
    #[must_use]
    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        parse_unix_timestamp(&self.time_read)
    }

    /// When the item was favorited
    #[must_use]
    pub fn favorited_at(&self) -> Option<DateTime<Utc>> {
        parse_unix_timestamp(&self.time_favorited)
    }

    /// Tag names, sorted
    #[must_use]
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

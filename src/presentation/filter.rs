/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Read state filter
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Only unread items
    #[default]
    Unread,
    /// Only archived items
    Archive,
    /// Both
    All,
}

/// Favorite filter, sent as `0` or `1`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "u8", try_from = "u8")]
pub enum Favorite {
    /// Only items not marked as favorite
    Unfavorited,
    /// Only favorites
    Favorited,
}

impl From<Favorite> for u8 {
    fn from(value: Favorite) -> Self {
        match value {
            Favorite::Unfavorited => 0,
            Favorite::Favorited => 1,
        }
    }
}

impl TryFrom<u8> for Favorite {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Favorite::Unfavorited),
            1 => Ok(Favorite::Favorited),
            other => Err(format!("invalid favorite flag: {other}")),
        }
    }
}

/// Content type filter
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Articles
    Article,
    /// Videos or articles with embedded videos
    Video,
    /// Images
    Image,
}

/// Sort order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Newest first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// Alphabetically by title
    Title,
    /// Alphabetically by URL
    Site,
}

/// Amount of data returned per item
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    /// Title and URL only
    #[default]
    Simple,
    /// Everything, including tags, images, authors and videos
    Complete,
}

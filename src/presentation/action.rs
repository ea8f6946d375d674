/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Actions accepted by the `send` endpoint
//!
//! Each action is serialized as a flat object with an `"action"`
//! discriminator, e.g. `{"action":"archive","item_id":"229279689"}`.

use crate::error::{AppError, PocketResult};
use crate::presentation::serialization::join_tags;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator of an [`Action`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Save a new item
    Add,
    /// Move an item to the archive
    Archive,
    /// Move an archived item back to the list
    Readd,
    /// Mark as favorite
    Favorite,
    /// Remove the favorite mark
    Unfavorite,
    /// Delete permanently
    Delete,
    /// Add tags to an item
    TagsAdd,
    /// Remove tags from an item
    TagsRemove,
    /// Replace all the tags of an item
    TagsReplace,
    /// Remove all the tags of an item
    TagsClear,
    /// Rename a tag everywhere
    TagRename,
    /// Delete a tag everywhere
    TagDelete,
}

impl ActionType {
    /// Name sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Add => "add",
            ActionType::Archive => "archive",
            ActionType::Readd => "readd",
            ActionType::Favorite => "favorite",
            ActionType::Unfavorite => "unfavorite",
            ActionType::Delete => "delete",
            ActionType::TagsAdd => "tags_add",
            ActionType::TagsRemove => "tags_remove",
            ActionType::TagsReplace => "tags_replace",
            ActionType::TagsClear => "tags_clear",
            ActionType::TagRename => "tag_rename",
            ActionType::TagDelete => "tag_delete",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of the `add` action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddAction {
    /// Existing item to add again, alternative to `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Tweet id when the item comes from a tweet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    /// Comma-separated tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Unix timestamp of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Title to store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL to save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Payload of the actions that target a single item without extra data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAction {
    /// Target item
    pub item_id: String,
    /// Unix timestamp of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Payload of the actions that change the tags of an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagsAction {
    /// Target item
    pub item_id: String,
    /// Comma-separated tags
    pub tags: String,
    /// Unix timestamp of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Payload of the `tag_rename` action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagRenameAction {
    /// Current name
    pub old_tag: String,
    /// New name
    pub new_tag: String,
    /// Unix timestamp of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// Payload of the `tag_delete` action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagDeleteAction {
    /// Tag to delete
    pub tag: String,
    /// Unix timestamp of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

/// A single entry of a modify batch
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Save a new item
    Add(AddAction),
    /// Move an item to the archive
    Archive(ItemAction),
    /// Move an archived item back to the list
    Readd(ItemAction),
    /// Mark as favorite
    Favorite(ItemAction),
    /// Remove the favorite mark
    Unfavorite(ItemAction),
    /// Delete permanently
    Delete(ItemAction),
    /// Add tags to an item
    TagsAdd(TagsAction),
    /// Remove tags from an item
    TagsRemove(TagsAction),
    /// Replace all the tags of an item
    TagsReplace(TagsAction),
    /// Remove all the tags of an item
    TagsClear(ItemAction),
    /// Rename a tag everywhere
    TagRename(TagRenameAction),
    /// Delete a tag everywhere
    TagDelete(TagDeleteAction),
}

fn item(item_id: impl Into<String>) -> ItemAction {
    ItemAction {
        item_id: item_id.into(),
        time: None,
    }
}

fn tagged<I, S>(item_id: impl Into<String>, tags: I) -> TagsAction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TagsAction {
        item_id: item_id.into(),
        tags: join_tags(tags),
        time: None,
    }
}

impl Action {
    /// Saves `url`
    pub fn add(url: impl Into<String>) -> Self {
        Action::Add(AddAction {
            url: Some(url.into()),
            ..Default::default()
        })
    }

    /// Archives an item
    pub fn archive(item_id: impl Into<String>) -> Self {
        Action::Archive(item(item_id))
    }

    /// Moves an archived item back to the list
    pub fn readd(item_id: impl Into<String>) -> Self {
        Action::Readd(item(item_id))
    }

    /// Marks an item as favorite
    pub fn favorite(item_id: impl Into<String>) -> Self {
        Action::Favorite(item(item_id))
    }

    /// Removes the favorite mark
    pub fn unfavorite(item_id: impl Into<String>) -> Self {
        Action::Unfavorite(item(item_id))
    }

    /// Deletes an item
    pub fn delete(item_id: impl Into<String>) -> Self {
        Action::Delete(item(item_id))
    }

    /// Adds tags to an item
    pub fn tags_add<I, S>(item_id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Action::TagsAdd(tagged(item_id, tags))
    }

    /// Removes tags from an item
    pub fn tags_remove<I, S>(item_id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Action::TagsRemove(tagged(item_id, tags))
    }

    /// Replaces the tags of an item
    pub fn tags_replace<I, S>(item_id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Action::TagsReplace(tagged(item_id, tags))
    }

    /// Removes every tag of an item
    pub fn tags_clear(item_id: impl Into<String>) -> Self {
        Action::TagsClear(item(item_id))
    }

    /// Renames a tag on every item
    pub fn tag_rename(old_tag: impl Into<String>, new_tag: impl Into<String>) -> Self {
        Action::TagRename(TagRenameAction {
            old_tag: old_tag.into(),
            new_tag: new_tag.into(),
            time: None,
        })
    }

    /// Deletes a tag from every item
    pub fn tag_delete(tag: impl Into<String>) -> Self {
        Action::TagDelete(TagDeleteAction {
            tag: tag.into(),
            time: None,
        })
    }

    /// Sets the time the action happened
    #[must_use]
    pub fn with_time(mut self, at: DateTime<Utc>) -> Self {
        let ts = Some(at.timestamp());
        match &mut self {
            Action::Add(a) => a.time = ts,
            Action::Archive(a)
            | Action::Readd(a)
            | Action::Favorite(a)
            | Action::Unfavorite(a)
            | Action::Delete(a)
            | Action::TagsClear(a) => a.time = ts,
            Action::TagsAdd(a) | Action::TagsRemove(a) | Action::TagsReplace(a) => a.time = ts,
            Action::TagRename(a) => a.time = ts,
            Action::TagDelete(a) => a.time = ts,
        }
        self
    }

    /// Sets the title of an `add` action, ignored otherwise
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        if let Action::Add(a) = &mut self {
            a.title = Some(title.into());
        }
        self
    }

    /// Sets the tags of an `add` action, ignored otherwise
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Action::Add(a) = &mut self {
            a.tags = Some(join_tags(tags));
        }
        self
    }

    /// Discriminator of this action
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Add(_) => ActionType::Add,
            Action::Archive(_) => ActionType::Archive,
            Action::Readd(_) => ActionType::Readd,
            Action::Favorite(_) => ActionType::Favorite,
            Action::Unfavorite(_) => ActionType::Unfavorite,
            Action::Delete(_) => ActionType::Delete,
            Action::TagsAdd(_) => ActionType::TagsAdd,
            Action::TagsRemove(_) => ActionType::TagsRemove,
            Action::TagsReplace(_) => ActionType::TagsReplace,
            Action::TagsClear(_) => ActionType::TagsClear,
            Action::TagRename(_) => ActionType::TagRename,
            Action::TagDelete(_) => ActionType::TagDelete,
        }
    }

    /// Checks the fields the API requires for this action
    ///
    /// An `add` needs a URL or an existing item id.
    pub fn validate(&self) -> PocketResult<()> {
        let blank = |s: &Option<String>| s.as_deref().is_none_or(|v| v.trim().is_empty());
        match self {
            Action::Add(a) if blank(&a.url) && blank(&a.item_id) => Err(AppError::InvalidInput(
                "add action requires a url or an item_id".to_string(),
            )),
            Action::TagRename(a) if a.old_tag.trim().is_empty() || a.new_tag.trim().is_empty() => {
                Err(AppError::InvalidInput(
                    "tag_rename action requires old_tag and new_tag".to_string(),
                ))
            }
            Action::TagDelete(a) if a.tag.trim().is_empty() => Err(AppError::InvalidInput(
                "tag_delete action requires a tag".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

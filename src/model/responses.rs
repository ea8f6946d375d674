/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::SUCCESS_STATUS;
use crate::presentation::item::{Item, ListItem};
use crate::presentation::serialization::{map_or_empty_seq, null_as_default, number_or_string};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of the request token call
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct RequestTokenResponse {
    /// The request token
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Opaque state echoed back by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Response of the access token call
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Token to send with every item call
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,
    /// Pocket username of the user that approved the app
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

/// Response of the `add` endpoint
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct AddResponse {
    /// The saved item
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: Item,
    /// 1 on success
    #[serde(default, deserialize_with = "number_or_string")]
    pub status: i64,
}

impl AddResponse {
    /// Whether the API reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Result of a single action, in the order the actions were sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    /// Plain success flag
    Flag(bool),
    /// Item created by an `add` action
    Item(Box<Item>),
    /// Anything else the API may send back
    Other(serde_json::Value),
}

impl ActionResult {
    /// Whether the action succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            ActionResult::Flag(ok) => *ok,
            ActionResult::Item(_) => true,
            ActionResult::Other(v) => !v.is_null(),
        }
    }
}

/// Error reported for a single action
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionError {
    /// Human readable message
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Error category
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Numeric error code
    #[serde(deserialize_with = "number_or_string")]
    pub code: i64,
}

/// Response of the `send` endpoint
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct ModifyResponse {
    /// One entry per action sent
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_results: Vec<ActionResult>,
    /// One entry per action sent, null when the action succeeded
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub action_errors: Vec<Option<ActionError>>,
    /// 1 on success
    #[serde(default, deserialize_with = "number_or_string")]
    pub status: i64,
}

impl ModifyResponse {
    /// Whether the API reported success for the batch
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Errors paired with the index of the action that caused them
    pub fn failed_actions(&self) -> impl Iterator<Item = (usize, &ActionError)> {
        self.action_errors
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (i, e)))
    }
}

/// Search metadata returned with retrieve results
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMeta {
    /// Kind of search performed
    #[serde(deserialize_with = "null_as_default")]
    pub search_type: String,
}

/// Response of the `get` endpoint
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveResponse {
    /// 1 on success, 2 when there are no results
    #[serde(deserialize_with = "number_or_string")]
    pub status: i64,
    /// 1 when every field is present
    #[serde(deserialize_with = "number_or_string")]
    pub complete: i64,
    /// Search metadata
    #[serde(deserialize_with = "null_as_default")]
    pub search_meta: SearchMeta,
    /// Server time, to pass as `since` on the next call
    #[serde(deserialize_with = "number_or_string")]
    pub since: i64,
    /// Items keyed by item id
    #[serde(deserialize_with = "map_or_empty_seq")]
    pub list: HashMap<String, ListItem>,
    /// Error message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RetrieveResponse {
    /// Whether the API reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Items ordered by `sort_id`, the order requested through `sort`
    #[must_use]
    pub fn items(&self) -> Vec<&ListItem> {
        let mut items: Vec<&ListItem> = self.list.values().collect();
        items.sort_by_key(|item| item.sort_id);
        items
    }
}

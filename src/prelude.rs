/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Pocket Client Prelude
//!
//! Brings the client, the service traits and the request/response models
//! into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use pocket_client::prelude::*;
//!
//! let request = RetrieveRequest::new()
//!     .with_state(State::Unread)
//!     .with_detail_type(DetailType::Complete)
//!     .with_count(10);
//! assert_eq!(request.count, Some(10));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, ErrorCode, PocketError, PocketResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::auth::Session;
pub use crate::application::client::Client;
pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::items::ItemService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{AddRequest, RetrieveRequest};
pub use crate::model::responses::{
    AccessTokenResponse, ActionError, ActionResult, AddResponse, ModifyResponse,
    RequestTokenResponse, RetrieveResponse, SearchMeta,
};
pub use crate::presentation::action::{Action, ActionType};
pub use crate::presentation::filter::{ContentType, DetailType, Favorite, Sort, State};
pub use crate::presentation::item::{
    Author, DomainMetadata, Image, ImagesItem, Item, ItemStatus, ListItem, Tag, Video,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};

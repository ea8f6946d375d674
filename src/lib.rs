/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Pocket Client
//!
//! A client for the Pocket v3 REST API. It covers the OAuth-like handshake
//! used to obtain an access token and the three item endpoints:
//!
//! - `add` saves a single URL
//! - `send` applies a batch of modify actions
//! - `get` retrieves saved items with filters
//!
//! Every call is a single JSON `POST`. Non-200 responses are turned into an
//! [`error::PocketError`] built from the `X-Error` and `X-Error-Code` headers.
//!
//! ## Example
//!
//! ```ignore
//! use pocket_client::prelude::*;
//!
//! let client = Client::with_consumer_key("1234-abcd1234abcd1234abcd1234")?;
//! client.auth_app("https://example.com/callback").await?;
//! println!("open {}", client.auth_url("https://example.com/callback").await?);
//!
//! // once the user approved the request token
//! client.auth_user().await?;
//! let saved = client.add(&AddRequest::new("https://example.com/article")).await?;
//! ```

/// Application layer: client, authentication and service traits
pub mod application;

/// Endpoint paths, header names and defaults
pub mod constants;

/// Error types returned by the client
pub mod error;

/// Request and response envelopes sent over the wire
pub mod model;

/// Convenient re-exports of the most used types
pub mod prelude;

/// Domain types: items, actions and retrieve filters
pub mod presentation;

/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

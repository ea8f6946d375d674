/// Authentication handshake and token storage
pub mod auth;
/// Pocket API client and request dispatch
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
/// Add, modify and retrieve operations
pub mod items;

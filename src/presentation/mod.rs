/// Modify actions sent to the `send` endpoint
pub mod action;
/// Retrieve filters
pub mod filter;
/// Saved item models
pub mod item;
/// Serialization utilities for API payloads
pub mod serialization;

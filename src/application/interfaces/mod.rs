/// Authentication service interface
pub mod auth;
/// Item service interface
pub mod items;

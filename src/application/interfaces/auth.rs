use crate::error::PocketResult;
use crate::model::responses::AccessTokenResponse;
use async_trait::async_trait;

/// Interface for the OAuth-like handshake
///
/// The flow is:
/// 1. [`auth_app`](AuthService::auth_app) obtains and stores a request token
/// 2. the user opens [`auth_url`](AuthService::auth_url) and approves the app
/// 3. [`auth_user`](AuthService::auth_user) exchanges the request token for
///    an access token and stores it
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Asks the API for a new request token without storing it
    ///
    /// # Arguments
    /// * `redirect_uri` - Where the consent page sends the user back
    async fn generate_request_token(&self, redirect_uri: &str) -> PocketResult<String>;

    /// Obtains a request token and stores it on the client
    async fn auth_app(&self, redirect_uri: &str) -> PocketResult<()>;

    /// Currently stored request token, empty when unset
    async fn request_token(&self) -> String;

    /// Replaces the stored request token
    async fn set_request_token(&self, request_token: String);

    /// Exchanges the stored request token for an access token without storing it
    async fn generate_access_token(&self) -> PocketResult<AccessTokenResponse>;

    /// Exchanges the stored request token and stores the access token
    async fn auth_user(&self) -> PocketResult<()>;

    /// Currently stored access token, empty when unset
    async fn access_token(&self) -> String;

    /// Replaces the stored access token
    async fn set_access_token(&self, access_token: String);

    /// Builds the consent page URL for the stored request token
    ///
    /// # Arguments
    /// * `redirect_uri` - Where the consent page sends the user back
    async fn auth_url(&self, redirect_uri: &str) -> PocketResult<String>;
}

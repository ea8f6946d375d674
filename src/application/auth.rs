/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication for the Pocket API
//!
//! Pocket uses a two step handshake:
//! - a request token is obtained with the consumer key and a redirect URI
//! - once the user approved it on the consent page, the request token is
//!   exchanged for a long lived access token

use crate::application::client::Client;
use crate::application::interfaces::auth::AuthService;
use crate::constants::{
    ACCESS_TOKEN_PATH, AUTH_PATH, REDIRECT_URI_QUERY_PARAM, REQUEST_TOKEN_PATH,
    REQUEST_TOKEN_QUERY_PARAM,
};
use crate::error::PocketResult;
use crate::model::requests::{AccessTokenRequest, RequestTokenRequest};
use crate::model::responses::{AccessTokenResponse, RequestTokenResponse};
use async_trait::async_trait;
use tracing::{debug, info};

/// Tokens held by a client
///
/// Unset tokens are empty strings and are sent as such; the API answers
/// with the matching error code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Token returned by the first step of the handshake
    pub request_token: String,
    /// Token returned once the user approved the request token
    pub access_token: String,
}

impl Session {
    /// Checks if an access token is available
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        !self.access_token.is_empty()
    }
}

#[async_trait]
impl AuthService for Client {
    async fn generate_request_token(&self, redirect_uri: &str) -> PocketResult<String> {
        debug!("Requesting a request token, redirect uri: {}", redirect_uri);

        let body = RequestTokenRequest {
            consumer_key: self.consumer_key(),
            redirect_uri,
        };
        let response: RequestTokenResponse = self.post(REQUEST_TOKEN_PATH, &body).await?;
        Ok(response.code)
    }

    async fn auth_app(&self, redirect_uri: &str) -> PocketResult<()> {
        let request_token = self.generate_request_token(redirect_uri).await?;
        self.session.write().await.request_token = request_token;

        info!("✓ Request token obtained");
        Ok(())
    }

    async fn request_token(&self) -> String {
        self.session.read().await.request_token.clone()
    }

    async fn set_request_token(&self, request_token: String) {
        self.session.write().await.request_token = request_token;
    }

    async fn generate_access_token(&self) -> PocketResult<AccessTokenResponse> {
        let code = self.request_token().await;
        debug!("Exchanging request token for an access token");

        let body = AccessTokenRequest {
            consumer_key: self.consumer_key(),
            code: &code,
        };
        self.post(ACCESS_TOKEN_PATH, &body).await
    }

    async fn auth_user(&self) -> PocketResult<()> {
        let response = self.generate_access_token().await?;
        self.session.write().await.access_token = response.access_token;

        info!("✓ Access token obtained for user: {}", response.username);
        Ok(())
    }

    async fn access_token(&self) -> String {
        self.session.read().await.access_token.clone()
    }

    async fn set_access_token(&self, access_token: String) {
        self.session.write().await.access_token = access_token;
    }

    async fn auth_url(&self, redirect_uri: &str) -> PocketResult<String> {
        let request_token = self.request_token().await;

        let mut url = self.endpoint(AUTH_PATH);
        // keys in lexical order
        url.query_pairs_mut()
            .clear()
            .append_pair(REDIRECT_URI_QUERY_PARAM, redirect_uri)
            .append_pair(REQUEST_TOKEN_QUERY_PARAM, &request_token);

        Ok(url.into())
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, PocketResult};
use crate::model::http::{deadline, make_http_request, parse_response};
use reqwest::Client as HttpInternalClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// Client for the Pocket API
///
/// Holds the consumer key, the tokens obtained through the handshake, the
/// base URL and the HTTP transport. Tokens sit behind a lock so every
/// operation takes `&self` and the client can be shared across tasks.
///
/// Operations live on the [`AuthService`](crate::application::interfaces::auth::AuthService)
/// and [`ItemService`](crate::application::interfaces::items::ItemService) traits.
///
/// Cloning is cheap and the clone shares the tokens; [`Client::timed`] uses
/// this to give a single call its own deadline.
#[derive(Clone)]
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    base_url: Url,
    timeout: Option<Duration>,
    pub(crate) session: Arc<RwLock<Session>>,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use; an access token from the config is stored
    /// * `Err(AppError)` - If the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: Config) -> PocketResult<Self> {
        let base_url = parse_base_url(&config.rest_api.base_url)?;
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;
        let session = Session {
            request_token: String::new(),
            access_token: config.credentials.access_token.clone().unwrap_or_default(),
        };

        Ok(Self {
            http_client,
            timeout: config.timeout(),
            config: Arc::new(config),
            base_url,
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Creates a client for `consumer_key` with default settings
    pub fn with_consumer_key(consumer_key: impl Into<String>) -> PocketResult<Self> {
        Self::new(Config::with_consumer_key(consumer_key))
    }

    /// Points the client at another base URL
    pub fn with_base_url(mut self, base_url: &str) -> PocketResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replaces the HTTP transport
    #[must_use]
    pub fn with_http_client(mut self, http_client: HttpInternalClient) -> Self {
        self.http_client = http_client;
        self
    }

    /// Sets the deadline applied to every request, `Duration::ZERO` for none
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = deadline(timeout);
        self
    }

    /// Handle for calls that need their own deadline
    ///
    /// The returned client shares the tokens and the transport with `self`,
    /// so a token stored through either is seen by both.
    ///
    /// ```ignore
    /// let page = client.timed(Duration::from_secs(30)).retrieve(&request).await?;
    /// ```
    #[must_use]
    pub fn timed(&self, timeout: Duration) -> Self {
        self.clone().with_timeout(timeout)
    }

    /// Deadline applied to every request, `None` when disabled
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Application consumer key
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.config.credentials.consumer_key
    }

    /// Base URL every path is joined to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Configuration the client was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the stored tokens
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Joins `path` to the base URL, keeping any path prefix of the base
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }

    /// Makes a POST request to `path` and decodes the JSON answer
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g. "/v3/get")
    /// * `body` - Request body to serialize as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - API error from the response headers, or a transport/JSON error
    pub async fn post<B: Serialize + Sync + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> PocketResult<T> {
        self.post_with_timeout(path, body, None).await
    }

    /// Same as [`Client::post`], with a deadline for this request only
    ///
    /// `Some(Duration::ZERO)` disables the deadline; `None` keeps the
    /// client-wide one.
    pub async fn post_with_timeout<B: Serialize + Sync + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> PocketResult<T> {
        let timeout = timeout.map_or(self.timeout, deadline);
        let url = self.endpoint(path);
        let response = make_http_request(&self.http_client, url, body, timeout).await?;
        let parsed = parse_response(response).await?;
        debug!("Decoded response from {}", path);
        Ok(parsed)
    }
}

fn parse_base_url(raw: &str) -> PocketResult<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(AppError::InvalidInput(format!(
            "base url cannot carry a path: {raw}"
        )));
    }
    Ok(url)
}

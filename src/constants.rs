/// Default base URL of the Pocket API
pub const DEFAULT_BASE_URL: &str = "https://getpocket.com/";
/// Path used to obtain a request token
pub const REQUEST_TOKEN_PATH: &str = "/v3/oauth/request";
/// Path used to exchange an approved request token for an access token
pub const ACCESS_TOKEN_PATH: &str = "/v3/oauth/authorize";
/// Path of the user-consent page the user is redirected to
pub const AUTH_PATH: &str = "/auth/authorize";
/// Path used to save a single item
pub const ADD_PATH: &str = "/v3/add";
/// Path used to apply a batch of modify actions
pub const MODIFY_PATH: &str = "/v3/send";
/// Path used to retrieve saved items
pub const RETRIEVE_PATH: &str = "/v3/get";

/// Query parameter carrying the request token on the consent URL
pub const REQUEST_TOKEN_QUERY_PARAM: &str = "request_token";
/// Query parameter carrying the redirect URI on the consent URL
pub const REDIRECT_URI_QUERY_PARAM: &str = "redirect_uri";

/// Response header holding the human readable error message
pub const ERROR_HEADER: &str = "X-Error";
/// Response header holding the numeric Pocket error code
pub const ERROR_CODE_HEADER: &str = "X-Error-Code";
/// Header asking the API to answer with JSON instead of form encoding
pub const ACCEPT_HEADER: &str = "X-Accept";
/// Value sent in the `Content-Type` header of every request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF8";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// User agent string used to identify this client to the Pocket API
pub const USER_AGENT: &str = concat!("pocket-client/", env!("CARGO_PKG_VERSION"));

/// Special tag value used to retrieve only untagged items
pub const UNTAGGED: &str = "_untagged_";
/// `status` value returned by the API when a call succeeded
pub const SUCCESS_STATUS: i64 = 1;

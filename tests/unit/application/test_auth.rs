use crate::common::{
    ACCESS_TOKEN, AUTH_APP_ERRORS, AUTH_USER_ERRORS, CONSUMER_KEY, REDIRECT_URL, REQUEST_TOKEN,
    assert_api_error,
};
use mockito::{Matcher, Server};
use pocket_client::prelude::*;
use serde_json::json;

async fn client_for(server_url: &str) -> Client {
    Client::with_consumer_key(CONSUMER_KEY)
        .unwrap()
        .with_base_url(server_url)
        .unwrap()
}

#[tokio::test]
async fn auth_app_maps_documented_errors() {
    for &(code, message, status) in AUTH_APP_ERRORS {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/oauth/request")
            .with_status(status as usize)
            .with_header("X-Error-Code", code)
            .with_header("X-Error", message)
            .create_async()
            .await;

        let client = client_for(&server.url()).await;
        let result = client.auth_app(REDIRECT_URL).await;

        assert_api_error(result, (code, message, status));
        assert_eq!(client.request_token().await, "");
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn auth_app_stores_request_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/oauth/request")
        .match_header("x-accept", "application/json")
        .match_header("content-type", "application/json; charset=UTF8")
        .match_body(Matcher::Json(json!({
            "consumer_key": CONSUMER_KEY,
            "redirect_uri": REDIRECT_URL,
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(json!({ "code": REQUEST_TOKEN }).to_string())
        .create_async()
        .await;

    let client = client_for(&server.url()).await;
    client.auth_app(REDIRECT_URL).await.expect("auth app");

    assert_eq!(client.request_token().await, REQUEST_TOKEN);
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_request_token_does_not_store_it() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/oauth/request")
        .with_status(200)
        .with_body(r#"{"code":"fresh-token","state":null}"#)
        .create_async()
        .await;

    let client = client_for(&server.url()).await;
    let token = client.generate_request_token(REDIRECT_URL).await.unwrap();

    assert_eq!(token, "fresh-token");
    assert_eq!(client.request_token().await, "");
}

#[tokio::test]
async fn auth_user_maps_documented_errors() {
    for &(code, message, status) in AUTH_USER_ERRORS {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/oauth/authorize")
            .with_status(status as usize)
            .with_header("X-Error-Code", code)
            .with_header("X-Error", message)
            .create_async()
            .await;

        let client = client_for(&server.url()).await;
        client.set_request_token(REQUEST_TOKEN.to_string()).await;
        let result = client.auth_user().await;

        assert_api_error(result, (code, message, status));
        assert_eq!(client.access_token().await, "");
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn auth_user_exchanges_request_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/oauth/authorize")
        .match_body(Matcher::Json(json!({
            "consumer_key": CONSUMER_KEY,
            "code": REQUEST_TOKEN,
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(json!({ "access_token": ACCESS_TOKEN, "username": "pocketuser" }).to_string())
        .create_async()
        .await;

    let client = client_for(&server.url()).await;
    client.set_request_token(REQUEST_TOKEN.to_string()).await;
    client.auth_user().await.expect("auth user");

    assert_eq!(client.access_token().await, ACCESS_TOKEN);
    assert!(client.session().await.is_authorized());
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_access_token_returns_username() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/oauth/authorize")
        .with_status(200)
        .with_body(r#"{"access_token":"5678defg-5678-defg-5678-defg56","username":"pocketuser"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url()).await;
    let response = client.generate_access_token().await.unwrap();

    assert_eq!(response.access_token, "5678defg-5678-defg-5678-defg56");
    assert_eq!(response.username, "pocketuser");
    assert_eq!(client.access_token().await, "");
}

#[tokio::test]
async fn auth_url_sorts_query_keys() {
    let client = Client::with_consumer_key(CONSUMER_KEY).unwrap();
    client.set_request_token(REQUEST_TOKEN.to_string()).await;

    let url = client.auth_url(REDIRECT_URL).await.unwrap();
    assert_eq!(
        url,
        "https://getpocket.com/auth/authorize?redirect_uri=google.com&request_token=request-token"
    );
}

#[tokio::test]
async fn auth_url_escapes_redirect_uri() {
    let client = Client::with_consumer_key(CONSUMER_KEY)
        .unwrap()
        .with_base_url("https://proxy.local/pocket/")
        .unwrap();
    client.set_request_token("abc".to_string()).await;

    let url = client
        .auth_url("https://example.com/done?x=1")
        .await
        .unwrap();
    assert_eq!(
        url,
        "https://proxy.local/pocket/auth/authorize?redirect_uri=https%3A%2F%2Fexample.com%2Fdone%3Fx%3D1&request_token=abc"
    );
}

#[test]
fn session_defaults_to_empty_tokens() {
    let client = Client::with_consumer_key(CONSUMER_KEY).unwrap();
    let session = tokio_test::block_on(client.session());
    assert_eq!(session, Session::default());
    assert!(!session.is_authorized());
}

use crate::common::{ACCESS_TOKEN, CONSUMER_KEY, authorized_client};
use mockito::Server;
use pocket_client::prelude::*;
use std::io::Write;
use std::time::Duration;

#[test]
fn client_from_config_keeps_settings() {
    let config = Config {
        credentials: Credentials {
            consumer_key: CONSUMER_KEY.to_string(),
            access_token: Some(ACCESS_TOKEN.to_string()),
        },
        rest_api: RestApiConfig {
            base_url: "http://localhost:9000/".to_string(),
            timeout: 12,
        },
    };

    let client = Client::new(config.clone()).expect("client");
    assert_eq!(client.consumer_key(), CONSUMER_KEY);
    assert_eq!(client.base_url().as_str(), "http://localhost:9000/");
    assert_eq!(client.config(), &config);

    let session = tokio_test::block_on(client.session());
    assert_eq!(session.access_token, ACCESS_TOKEN);
    assert!(session.request_token.is_empty());
}

#[test]
fn client_rejects_invalid_base_url() {
    let mut config = Config::with_consumer_key(CONSUMER_KEY);
    config.rest_api.base_url = "::not-a-url".to_string();

    match Client::new(config) {
        Err(AppError::Url(_)) => (),
        other => panic!("Expected url error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn non_200_without_headers_gives_empty_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/get")
        .with_status(503)
        .create_async()
        .await;

    let client = authorized_client(&server).await;
    let err = client
        .retrieve(&RetrieveRequest::new())
        .await
        .expect_err("should fail");

    let api = err.as_pocket().expect("api error");
    assert_eq!(api.status.as_u16(), 503);
    assert!(api.code.is_empty());
    assert!(api.message.is_empty());
    assert_eq!(api.kind(), None);
}

#[tokio::test]
async fn other_success_statuses_are_errors() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/get")
        .with_status(201)
        .with_body(r#"{"status":1}"#)
        .create_async()
        .await;

    let client = authorized_client(&server).await;
    let err = client.retrieve(&RetrieveRequest::new()).await.unwrap_err();
    assert_eq!(err.as_pocket().map(|e| e.status.as_u16()), Some(201));
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/oauth/request")
        .with_status(200)
        .with_body("code=abc")
        .create_async()
        .await;

    let client = authorized_client(&server).await;
    match client.generate_request_token("app://done").await {
        Err(AppError::Json(_)) => (),
        other => panic!("Expected json error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = Client::with_consumer_key(CONSUMER_KEY)
        .unwrap()
        .with_base_url("http://127.0.0.1:9")
        .unwrap()
        .with_timeout(Duration::from_secs(2));

    match client.generate_request_token("app://done").await {
        Err(AppError::Network(_)) => (),
        other => panic!("Expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn generic_post_decodes_into_any_type() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/stats")
        .with_status(200)
        .with_body(r#"{"count_list":"12","count_archive":"3"}"#)
        .create_async()
        .await;

    let client = authorized_client(&server).await;
    let stats: serde_json::Value = client
        .post("/v3/stats", &serde_json::json!({ "consumer_key": CONSUMER_KEY }))
        .await
        .unwrap();
    assert_eq!(stats["count_list"], "12");
}

#[tokio::test]
async fn zero_timeout_waits_for_the_answer() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/oauth/request")
        .with_status(200)
        .with_body(r#"{"code":"x"}"#)
        .create_async()
        .await;

    let client = Client::with_consumer_key(CONSUMER_KEY)
        .unwrap()
        .with_base_url(&server.url())
        .unwrap()
        .with_timeout(Duration::ZERO);

    assert_eq!(client.timeout(), None);
    let token = client.generate_request_token("app://done").await.unwrap();
    assert_eq!(token, "x");
}

#[tokio::test]
async fn zero_timeout_from_config_waits_for_the_answer() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/oauth/request")
        .with_status(200)
        .with_body(r#"{"code":"y"}"#)
        .create_async()
        .await;

    let mut config = Config::with_consumer_key(CONSUMER_KEY);
    config.rest_api.base_url = server.url();
    config.rest_api.timeout = 0;
    let client = Client::new(config).unwrap();

    assert_eq!(client.generate_request_token("app://done").await.unwrap(), "y");
}

#[tokio::test]
async fn per_call_deadline_only_applies_to_that_call() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/get")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(800));
            w.write_all(br#"{"status":1,"list":[]}"#)
        })
        .create_async()
        .await;

    let client = authorized_client(&server).await;

    match client
        .timed(Duration::from_millis(100))
        .retrieve(&RetrieveRequest::new())
        .await
    {
        Err(AppError::Network(_)) => (),
        other => panic!("Expected a timeout, got {:?}", other),
    }

    let response = client.retrieve(&RetrieveRequest::new()).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn post_with_timeout_overrides_the_client_deadline() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v3/stats")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(800));
            w.write_all(br#"{"count_list":"1"}"#)
        })
        .create_async()
        .await;

    let client = authorized_client(&server).await;
    let body = serde_json::json!({ "consumer_key": CONSUMER_KEY });

    let slow: PocketResult<serde_json::Value> = client
        .post_with_timeout("/v3/stats", &body, Some(Duration::from_millis(100)))
        .await;
    assert!(matches!(slow, Err(AppError::Network(_))));

    let stats: serde_json::Value = client
        .post_with_timeout("/v3/stats", &body, None)
        .await
        .unwrap();
    assert_eq!(stats["count_list"], "1");
}

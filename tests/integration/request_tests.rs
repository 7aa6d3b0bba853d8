use super::common::{TEST_TOKEN, authenticated_client};
use mockito::Server;
use reqwest::Method;
use serde_json::{Value, json};
use timesolv_client::prelude::*;

#[tokio::test]
async fn test_request_sends_bearer_and_json_headers() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let mock = server
        .mock("POST", "/clientSearch")
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Clients":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let response: Value = client
        .request(Method::POST, "clientSearch", Some(&json!({"PageNumber": 1})))
        .await
        .unwrap();

    assert_eq!(response, json!({"Clients": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_without_payload() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let _mock = server
        .mock("GET", "/ping")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let response: Value = client.get("/ping").await.unwrap();
    assert_eq!(response["ok"], json!(true));
}

#[tokio::test]
async fn test_non_json_search_response_is_decode_error() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let _mock = server
        .mock("POST", "/taskcodeSearch")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    match client.get_task_codes().await {
        Err(AppError::Decode { url, body, .. }) => {
            assert!(url.ends_with("/taskcodeSearch"));
            assert_eq!(body, "not json at all");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_collection_of_wrong_type_is_decode_error() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let _mock = server
        .mock("POST", "/firmUserSearch")
        .with_status(200)
        .with_body(r#"{"FirmUsers":"none"}"#)
        .create_async()
        .await;

    match client.get_firm_users().await {
        Err(AppError::Decode { url, body, .. }) => {
            assert!(url.ends_with("/firmUserSearch"));
            assert!(body.contains("none"));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_http_status_error() {
    let mut server = Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    let _mock = server
        .mock("POST", "/clientSearch")
        .with_status(401)
        .with_body(r#"{"Message":"Authorization has been denied"}"#)
        .create_async()
        .await;

    let err = client.get_clients().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert!(err.to_string().contains("Authorization has been denied"));
}

mod common;

use common::{TOKEN, client, mock_login_ok};
use httpmock::prelude::*;
use librelink_client::{CONNECTIONS_PATH, LOGIN_PATH, PRODUCT, VERSION_APP};
use librelink_core::LibreError;
use librelink_core::connector::{Authenticator, LibreConnector};
use serde_json::json;

#[tokio::test]
async fn login_posts_credentials_with_vendor_headers() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(LOGIN_PATH)
                .header("product", PRODUCT)
                .header("version", VERSION_APP)
                .json_body(json!({ "email": "me@example.com", "password": "pw" }));
            then.status(200).json_body(json!({
                "status": 0,
                "data": { "authTicket": { "token": TOKEN } }
            }));
        })
        .await;

    let c = client(&server);
    assert!(!c.is_authenticated());
    c.login("me@example.com", "pw").await.unwrap();
    m.assert_async().await;
    assert!(c.is_authenticated());
}

#[tokio::test]
async fn login_does_not_send_authorization_header() {
    let server = MockServer::start_async().await;
    let with_auth = server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH).header_exists("authorization");
            then.status(500);
        })
        .await;
    mock_login_ok(&server).await;

    let c = client(&server);
    c.login("a", "b").await.unwrap();
    c.login("a", "b").await.unwrap();
    assert_eq!(with_auth.hits_async().await, 0);
}

#[tokio::test]
async fn status_two_is_authentication_error_and_no_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({ "status": 2, "error": { "message": "notAuthenticated" } }));
        })
        .await;

    let c = client(&server);
    let err = c.login("me", "wrong").await.unwrap_err();
    assert_eq!(err, LibreError::Authentication);
    assert!(!c.is_authenticated());
}

#[tokio::test]
async fn failed_relogin_clears_previous_token() {
    let server = MockServer::start_async().await;
    let mut ok = mock_login_ok(&server).await;
    let c = client(&server);
    c.login("me", "pw").await.unwrap();
    assert!(c.is_authenticated());

    ok.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({ "status": 2 }));
        })
        .await;
    assert!(c.login("me", "pw").await.unwrap_err().is_auth());
    assert!(!c.is_authenticated());
}

#[tokio::test]
async fn status_zero_without_token_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({ "status": 4, "data": { "step": { "type": "tou" } } }));
        })
        .await;

    let c = client(&server);
    let err = c.login("me", "pw").await.unwrap_err();
    assert!(matches!(err, LibreError::Api(_)), "got {err:?}");
    assert!(!c.is_authenticated());
}

#[tokio::test]
async fn login_rejected_with_http_401_is_authentication() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(401);
        })
        .await;
    let err = client(&server).login("me", "pw").await.unwrap_err();
    assert_eq!(err, LibreError::Authentication);
}

#[tokio::test]
async fn logout_forgets_token() {
    let server = MockServer::start_async().await;
    mock_login_ok(&server).await;
    let never = server
        .mock_async(|when, then| {
            when.method(GET).path(CONNECTIONS_PATH);
            then.status(200).json_body(json!({ "status": 0, "data": [] }));
        })
        .await;

    let c = client(&server);
    c.login("me", "pw").await.unwrap();
    c.logout().await;
    assert!(!c.is_authenticated());
    let err = c.request(CONNECTIONS_PATH, None, true).await.unwrap_err();
    assert!(err.is_auth());
    assert_eq!(never.hits_async().await, 0);
}

#[tokio::test]
async fn connector_exposes_both_roles() {
    let server = MockServer::start_async().await;
    let c = client(&server);
    assert_eq!(c.name(), "librelink-client");
    assert!(c.as_authenticator().is_some());
    assert!(c.as_connections_provider().is_some());
}

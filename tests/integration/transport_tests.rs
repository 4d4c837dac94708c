use crate::common::{Harness, START_PATH, api_base};
use admin_http::constants::{FORM_URLENCODED_UTF8, RESOURCE_NOT_FOUND_MESSAGE};
use admin_http::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use std::error::Error;
use std::time::Duration;
use tokio::net::TcpListener;

/// Base URL of a server that accepts connections and never answers
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });
    format!("http://{addr}/admin/api")
}

#[tokio::test]
async fn get_carries_token_and_resolves_on_200() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/api/users")
        .match_header("authorization", "tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1}]"#)
        .create_async()
        .await;

    let harness = Harness::logged_in("tok-123");
    let client = harness.client(&api_base(&server));

    let response = client.get("/users").await.expect("200 resolves");

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), r#"[{"id":1}]"#);
    assert_eq!(response.headers.get("content-type").unwrap(), "application/json");
    assert!(response.url.ends_with("/admin/api/users"));
    mock.assert_async().await;
}

#[tokio::test]
async fn anonymous_request_has_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/api/public")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    client.get("/public").await.expect("200 resolves");
    mock.assert_async().await;
}

#[tokio::test]
async fn query_pairs_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/api/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("status".into(), "open orders".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    client
        .get_with_query("/orders", &[("page", "2"), ("status", "open orders")])
        .await
        .expect("200 resolves");
    mock.assert_async().await;
}

#[tokio::test]
async fn post_form_uses_default_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/admin/api/login")
        .match_header("content-type", FORM_URLENCODED_UTF8)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "admin".into()),
            Matcher::UrlEncoded("password".into(), "s3cr3t&more".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"token":"fresh"}"#)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    let response = client
        .post(
            "/login",
            &json!({"username": "admin", "password": "s3cr3t&more"}),
        )
        .await
        .expect("200 resolves");

    assert_eq!(response.json::<serde_json::Value>().unwrap()["token"], "fresh");
    mock.assert_async().await;
}

#[tokio::test]
async fn post_without_body_has_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/admin/api/logout")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let harness = Harness::logged_in("tok-123");
    let client = harness.client(&api_base(&server));

    let outcome = client.request(HttpRequest::post("/logout")).await;

    assert!(outcome.is_resolved());
    mock.assert_async().await;
}

#[tokio::test]
async fn post_json_keeps_json_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/admin/api/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "ops"})))
        .with_status(200)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    client
        .post_json("/users", &json!({"name": "ops"}))
        .await
        .expect("200 resolves");
    mock.assert_async().await;
}

#[tokio::test]
async fn created_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/admin/api/users")
        .with_status(201)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    let rejection = client
        .post_json("/users", &json!({"name": "ops"}))
        .await
        .expect_err("201 is not 200");

    assert_eq!(rejection.status(), Some(StatusCode::CREATED));
    assert!(harness.notifier.notifications().is_empty());
}

#[tokio::test]
async fn unauthorized_redirects_with_return_path() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/admin/api/me")
        .with_status(401)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    let rejection = client.get("/me").await.expect_err("401 rejects");

    assert_eq!(rejection.status(), Some(StatusCode::UNAUTHORIZED));
    let current = harness.navigator.current().unwrap();
    assert_eq!(current.path, "/login");
    assert_eq!(current.query_value("redirect"), Some(START_PATH));
}

#[tokio::test]
async fn forbidden_clears_session_and_redirects_later() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/admin/api/me")
        .match_header("authorization", "expired")
        .with_status(403)
        .with_body(r#"{"message":"token expired"}"#)
        .create_async()
        .await;

    let harness = Harness::logged_in("expired");
    let client = harness.client(&api_base(&server));

    let rejection = client.get("/me").await.expect_err("403 rejects");

    assert_eq!(rejection.response().unwrap().message().as_deref(), Some("token expired"));
    assert_eq!(harness.session.token(), None);
    assert_eq!(harness.storage.get_item("token"), None);
    assert_eq!(harness.notifier.notifications().len(), 1);
    assert_eq!(harness.navigator.current_full_path(), START_PATH);

    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(harness.navigator.current().unwrap().path, "/login");
}

#[tokio::test]
async fn not_found_shows_notification() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/admin/api/users/404")
        .with_status(404)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    client.get("/users/404").await.expect_err("404 rejects");

    let notifications = harness.notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, RESOURCE_NOT_FOUND_MESSAGE);
    assert_eq!(harness.navigator.current_full_path(), START_PATH);
}

#[tokio::test]
async fn server_error_is_rejected_with_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/admin/api/users/1")
        .with_status(500)
        .with_body(r#"{"message":"constraint violation"}"#)
        .create_async()
        .await;

    let harness = Harness::new();
    let client = harness.client(&api_base(&server));

    let rejection = client.delete("/users/1").await.expect_err("500 rejects");

    let response = rejection.response().expect("a response arrived");
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message().as_deref(), Some("constraint violation"));
    assert!(harness.notifier.notifications().is_empty());
}

#[tokio::test]
async fn unreachable_host_while_offline_is_suppressed() {
    let harness = Harness::new();
    harness.connectivity.set_online(false);
    let client = harness.client("http://127.0.0.1:1/admin/api");

    let outcome = client.request(HttpRequest::get("/users")).await;

    assert_eq!(outcome, Outcome::Suppressed);
    assert!(!harness.session.network_reachable());
}

#[tokio::test]
async fn unreachable_host_while_online_is_rejected() {
    let harness = Harness::new();
    let client = harness.client("http://127.0.0.1:1/admin/api");

    let rejection = client.get("/users").await.expect_err("no server");

    match rejection {
        Rejection::Transport(e) => {
            assert_eq!(e.kind, TransportErrorKind::Connect);
            assert!(e.source().is_some());
            assert!(e.reqwest_error().is_some_and(|cause| cause.is_connect()));
        }
        other => panic!("Expected a transport rejection, got {other:?}"),
    }
    assert!(harness.session.network_reachable());
}

#[tokio::test]
async fn slow_server_while_online_times_out() {
    let harness = Harness::new();
    let client = harness.client(&silent_server().await);

    let outcome = client
        .request(HttpRequest::get("/reports").with_timeout(Duration::from_millis(50)))
        .await;

    match outcome {
        Outcome::Rejected(Rejection::Transport(e)) => {
            assert_eq!(e.kind, TransportErrorKind::Timeout);
            assert!(e.reqwest_error().is_some_and(|cause| cause.is_timeout()));
        }
        other => panic!("Expected a timeout, got {other:?}"),
    }
    assert!(harness.session.network_reachable());
}

#[tokio::test]
async fn slow_server_while_offline_is_suppressed() {
    let harness = Harness::new();
    harness.connectivity.set_online(false);
    let client = harness.client(&silent_server().await);

    let outcome = client
        .request(HttpRequest::get("/reports").with_timeout(Duration::from_millis(50)))
        .await;

    assert_eq!(outcome, Outcome::Suppressed);
    assert!(!harness.session.network_reachable());
}

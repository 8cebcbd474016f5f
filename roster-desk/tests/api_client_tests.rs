//! The HTTP adapter against a local axum stand-in for the users API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use roster_desk::infra::api_client::ApiClient;
use roster_desk::infra::services::{
    DirectoryOperation, UserDirectoryApiAdapter, UserDirectoryService,
};
use roster_model::{User, UserDraft, UserId};

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: &'static str,
    path: String,
    body: Option<Value>,
    api_key: Option<String>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, entry: Recorded) {
    log.lock().unwrap().push(entry);
}

fn api_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn list(
    State(log): State<Log>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record(
        &log,
        Recorded {
            method: "GET",
            path: format!("/users?page={}", query.get("page").cloned().unwrap_or_default()),
            body: None,
            api_key: api_key(&headers),
        },
    );
    Json(json!({
        "page": 2,
        "per_page": 6,
        "data": [
            {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Michael", "last_name": "Lawson", "avatar": "https://reqres.in/img/faces/7-image.jpg"},
            {"id": 8, "email": "lindsay.ferguson@reqres.in", "first_name": "Lindsay", "last_name": "Ferguson", "avatar": "https://reqres.in/img/faces/8-image.jpg"}
        ],
        "support": {"url": "https://reqres.in/#support-heading"}
    }))
}

async fn create(
    State(log): State<Log>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(
        &log,
        Recorded {
            method: "POST",
            path: "/users".into(),
            body: Some(body.clone()),
            api_key: None,
        },
    );
    let mut echoed = body;
    echoed["id"] = json!("101");
    echoed["createdAt"] = json!("2026-10-18T09:00:00.000Z");
    (StatusCode::CREATED, Json(echoed))
}

async fn replace(
    State(log): State<Log>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(
        &log,
        Recorded {
            method: "PUT",
            path: format!("/users/{id}"),
            body: Some(body.clone()),
            api_key: None,
        },
    );
    let mut echoed = body;
    echoed["updatedAt"] = json!("2026-10-18T09:00:00.000Z");
    Json(echoed)
}

async fn remove(State(log): State<Log>, Path(id): Path<String>) -> StatusCode {
    record(
        &log,
        Recorded {
            method: "DELETE",
            path: format!("/users/{id}"),
            body: None,
            api_key: None,
        },
    );
    if id == "404" {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn users_api() -> (String, Log) {
    let log: Log = Arc::default();
    let router = Router::new()
        .route("/api/users", get(list).post(create))
        .route("/api/users/{id}", axum::routing::put(replace).delete(remove))
        .with_state(log.clone());
    (serve(router).await, log)
}

fn adapter(base_url: &str, api_key: Option<&str>) -> UserDirectoryApiAdapter {
    let client = ApiClient::new(base_url, api_key.map(str::to_string)).unwrap();
    UserDirectoryApiAdapter::new(Arc::new(client))
}

#[tokio::test]
async fn list_requests_page_two_and_keeps_server_order() {
    let (base, log) = users_api().await;
    let directory = adapter(&base, Some("reqres-free-v1"));

    let users = directory.list_users().await.unwrap();

    let names: Vec<_> = users.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, ["Michael", "Lindsay"]);
    assert_eq!(users[0].id, UserId::from(7));

    let log = log.lock().unwrap();
    assert_eq!(log[0].path, "/users?page=2");
    assert_eq!(log[0].api_key.as_deref(), Some("reqres-free-v1"));
}

#[tokio::test]
async fn list_without_data_is_empty() {
    let router = Router::new().route(
        "/api/users",
        get(|| async { Json(json!({"page": 2, "total": 0})) }),
    );
    let directory = adapter(&serve(router).await, None);

    assert!(directory.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_fails_the_list() {
    let router = Router::new().route(
        "/api/users",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let directory = adapter(&serve(router).await, None);

    let err = directory.list_users().await.unwrap_err();

    assert_eq!(err.operation(), DirectoryOperation::List);
    let rendered = err.to_string();
    assert!(rendered.contains("500"), "{rendered}");
    assert!(rendered.contains("boom"), "{rendered}");
}

#[tokio::test]
async fn unreachable_host_fails_the_list() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let directory = adapter(&format!("http://{addr}/api"), None);

    let err = directory.list_users().await.unwrap_err();
    assert_eq!(err.operation(), DirectoryOperation::List);
}

#[tokio::test]
async fn create_posts_the_draft_and_returns_the_echo() {
    let (base, log) = users_api().await;
    let directory = adapter(&base, None);

    let created = directory
        .create_user(UserDraft::new("Ann", "Lee", "ann@x.com"))
        .await
        .unwrap();

    assert_eq!(
        created,
        User::from_draft(
            UserId::from("101"),
            UserDraft::new("Ann", "Lee", "ann@x.com")
        )
    );
    let log = log.lock().unwrap();
    assert_eq!(log[0].method, "POST");
    assert_eq!(
        log[0].body,
        Some(json!({"first_name": "Ann", "last_name": "Lee", "email": "ann@x.com"}))
    );
}

#[tokio::test]
async fn update_puts_the_full_record_to_the_item_path() {
    let (base, log) = users_api().await;
    let directory = adapter(&base, None);

    let updated = directory
        .update_user(UserId::from(7), UserDraft::new("Bo", "Diddley", "bo@x.com"))
        .await
        .unwrap();

    assert_eq!(updated.id, UserId::from(7));
    assert_eq!(updated.last_name, "Diddley");
    let log = log.lock().unwrap();
    assert_eq!(log[0].method, "PUT");
    assert_eq!(log[0].path, "/users/7");
    assert_eq!(
        log[0].body,
        Some(json!({
            "id": 7,
            "first_name": "Bo",
            "last_name": "Diddley",
            "email": "bo@x.com"
        }))
    );
}

#[tokio::test]
async fn update_with_text_id_uses_it_verbatim_in_the_path() {
    let (base, log) = users_api().await;
    let directory = adapter(&base, None);

    let updated = directory
        .update_user(UserId::from("101"), UserDraft::new("Ann", "Lee", "ann@x.com"))
        .await
        .unwrap();

    assert_eq!(updated.id, UserId::from("101"));
    assert_eq!(log.lock().unwrap()[0].path, "/users/101");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let (base, log) = users_api().await;
    let directory = adapter(&base, None);

    directory.delete_user(UserId::from(9)).await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log[0].method, "DELETE");
    assert_eq!(log[0].path, "/users/9");
}

#[tokio::test]
async fn delete_rejects_not_found() {
    let (base, _log) = users_api().await;
    let directory = adapter(&base, None);

    let err = directory.delete_user(UserId::from(404)).await.unwrap_err();

    assert_eq!(err.operation(), DirectoryOperation::Delete);
    assert!(err.to_string().contains("404"));
}

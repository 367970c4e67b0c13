use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use userql::config::ServerConfig;
use userql::graphql::{GRAPHQL_PATH, build_schema, router};
use userql::storage::UserRepository;

async fn setup_router() -> axum::Router {
    let config = ServerConfig::default().with_database_url(Some("sqlite::memory:".to_string()));
    let repo = UserRepository::connect(&config).await.unwrap();
    repo.migrate().await.unwrap();
    router(build_schema(repo))
}

async fn post_graphql(app: &axum::Router, query: &str, variables: Value) -> Value {
    let body = json!({ "query": query, "variables": variables }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri(GRAPHQL_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_serves_graphiql() {
    let app = setup_router().await;
    let request = Request::builder()
        .uri(GRAPHQL_PATH)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("graphiql"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = setup_router().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_lifecycle_over_http() {
    let app = setup_router().await;

    let created = post_graphql(
        &app,
        "mutation($n: String!, $e: String!, $p: String!) { createUser(name: $n, email: $e, password: $p) { id name email password } }",
        json!({ "n": "Ann", "e": "ann@x.com", "p": "pw1" }),
    )
    .await;
    let user = &created["data"]["createUser"];
    let id = user["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(user["name"], "Ann");

    let updated = post_graphql(
        &app,
        r#"mutation { updateUser(id: "unused", email: "ann@x.com", name: "Ann2", password: "pw2") { id name email password } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        updated["data"]["updateUser"],
        json!({ "id": id, "name": "Ann2", "email": "ann@x.com", "password": "pw2" })
    );

    let deleted = post_graphql(
        &app,
        "mutation($id: ID!) { deleteUser(id: $id) { id name } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(deleted["data"]["deleteUser"], json!({ "id": id, "name": "Ann2" }));

    let fetched = post_graphql(
        &app,
        "query($id: ID!) { user(id: $id) { id } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(fetched["data"]["user"], Value::Null);
    assert!(fetched.get("errors").is_none());
}

#[tokio::test]
async fn test_data_access_errors_surface_as_graphql_errors() {
    let app = setup_router().await;

    let response = post_graphql(
        &app,
        r#"mutation { updateUser(id: "x", email: "ghost@x.com", name: "G") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response["data"]["updateUser"], Value::Null);
    let message = response["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("ghost@x.com"));
}

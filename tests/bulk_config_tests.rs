//! Integration tests for bulk-config application.
//!
//! A bulk-config document carries optional `groups` and `projects`
//! arrays; elements without an `id` are created, elements with an `id`
//! are updated.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bln_api::{ApiError, Client};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .token_str("test-token")
        .unwrap()
        .endpoint(format!("{}/graphql", server.uri()))
        .build()
        .unwrap()
}

fn write_config(name: &str, contents: &serde_json::Value) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("bln-api-{}-{name}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_vec_pretty(contents).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_elements_route_to_create_or_update_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("CreateGroup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createGroup": {"ok": {"id": "g1", "name": "new group"}, "err": null}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("UpdateProject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateProject": {"ok": {"id": "p1", "name": "renamed"}, "err": null}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = json!({
        "groups": [
            {"name": "new group", "description": "created, no id"}
        ],
        "projects": [
            {"id": "p1", "name": "renamed"}
        ]
    });
    let config_path = write_config("routes", &config);

    let client = test_client(&server);
    client.apply_config(&config_path).await.unwrap();
}

#[tokio::test]
async fn test_element_failures_do_not_abort_the_rest() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("CreateGroup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createGroup": {"ok": null, "err": "name already taken"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("CreateProject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"createProject": {"ok": {"id": "p9", "name": "fresh"}, "err": null}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = json!({
        "groups": [{"name": "taken"}],
        "projects": [{"name": "fresh"}]
    });
    let config_path = write_config("partial", &config);

    // the failed group is logged, not returned; the project still runs
    let client = test_client(&server);
    client.apply_config(&config_path).await.unwrap();
}

#[tokio::test]
async fn test_missing_config_path_is_an_error() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let error = client
        .apply_config(std::path::Path::new("/nope/config.json"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Io(_)));
}

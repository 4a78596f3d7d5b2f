mod common;

use common::client_for;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn create_and_get() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/audiences")
                .json_body(json!({"name": "Newsletter"}));
            then.status(201).json_body(json!({
                "data": {"id": "aud_1", "name": "Newsletter", "createdAt": "2024-05-01T10:00:00Z"}
            }));
        })
        .await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path("/audiences/aud_1");
            then.status(200).json_body(json!({
                "data": {"id": "aud_1", "name": "Newsletter", "contactCount": 128}
            }));
        })
        .await;

    let client = client_for(&server);
    let created = client.audiences().create("Newsletter").await.unwrap();
    assert_eq!(created.id, "aud_1");
    assert_eq!(created.contact_count, 0);

    let fetched = client.audiences().get(&created.id).await.unwrap();
    assert_eq!(fetched.contact_count, 128);

    create.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn list_maps_every_entry() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/audiences");
            then.status(200).json_body(json!({
                "data": [
                    {"id": "aud_1", "name": "Newsletter", "contactCount": 3},
                    {"id": "aud_2", "name": "Beta"}
                ]
            }));
        })
        .await;

    let audiences = client_for(&server).audiences().list().await.unwrap();
    assert_eq!(audiences.len(), 2);
    assert_eq!(audiences[0].contact_count, 3);
    assert_eq!(audiences[1].name, "Beta");
}

#[tokio::test]
async fn list_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/audiences");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    assert!(client_for(&server).audiences().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_audience() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/audiences/aud_404");
            then.status(404)
                .json_body(json!({"error": {"message": "Audience not found"}}));
        })
        .await;

    let err = client_for(&server)
        .audiences()
        .delete("aud_404")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Audience not found");
    assert_eq!(err.code(), unosend::ErrorCode::Number(404));
    assert_eq!(err.status_code(), Some(404));
}

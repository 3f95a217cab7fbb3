//! Integration tests for the product CRUD surface.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::TestApp;

async fn admin_token(app: &TestApp) -> String {
    app.seed_user("Root", "admin@x.com", "admin123", true);
    app.login("admin@x.com", "admin123").await
}

async fn create_product(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .request(
            "POST",
            "/produtos",
            Some(json!({
                "nome": name,
                "descricao": "Descricao",
                "preco": 49.9,
                "estoque": 5,
                "tamanhos": ["M"],
            })),
            Some(token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    response.body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_listing_starts_empty() {
    let app = TestApp::new();

    let response = app.request("GET", "/produtos", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_and_fetch_by_id() {
    let app = TestApp::new();
    let token = admin_token(&app).await;
    let id = create_product(&app, &token, "Camiseta").await;

    let response = app
        .request("GET", &format!("/produtos/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["nome"], "Camiseta");
    assert_eq!(response.body["estoque"], 5);
}

#[tokio::test]
async fn test_fetch_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", &format!("/produtos/{}", Uuid::new_v4()), None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let app = TestApp::new();
    let token = admin_token(&app).await;
    let id = create_product(&app, &token, "Camiseta").await;

    let response = app
        .request(
            "PUT",
            &format!("/produtos/{id}"),
            Some(json!({
                "nome": "Camiseta Estampada",
                "descricao": "Nova descricao",
                "preco": 59.9,
                "estoque": 3,
                "tamanhos": ["P", "M"],
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("/produtos/{id}"), None, None)
        .await;
    assert_eq!(fetched.body["nome"], "Camiseta Estampada");
    assert_eq!(fetched.body["estoque"], 3);
    assert_eq!(fetched.body["tamanhos"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_of_unknown_id_still_succeeds() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            &format!("/produtos/{}", Uuid::new_v4()),
            Some(json!({
                "nome": "Fantasma",
                "preco": 9.9,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_removes_the_product() {
    let app = TestApp::new();
    let token = admin_token(&app).await;
    let id = create_product(&app, &token, "Camiseta").await;

    let response = app
        .request("DELETE", &format!("/produtos/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("/produtos/{id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_reflects_creations() {
    let app = TestApp::new();
    let token = admin_token(&app).await;
    create_product(&app, &token, "Camiseta").await;
    create_product(&app, &token, "Calca").await;

    let response = app.request("GET", "/produtos", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body.as_array().unwrap();
    assert_eq!(products.len(), 2);
}

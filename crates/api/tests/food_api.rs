//! HTTP-level integration tests for the food menu endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_multipart, Part};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_food_item(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_media(pool.clone(), media.path());

    let response = post_multipart(
        app,
        "/api/food/",
        &[
            Part::Text("name", "Garlic Naan"),
            Part::Text("category", "bread"),
            Part::Text("price", "3.25"),
            Part::File("image", "naan.jpeg", b"naan"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Garlic Naan");
    assert_eq!(json["category"], "bread");
    assert_eq!(json["price"], "3.25");
    let stored = json["image"].as_str().unwrap();
    assert!(stored.starts_with("food/"));
    assert!(media.path().join(stored).exists());

    let app = common::build_test_app_with_media(pool, media.path());
    let list = body_json(get(app, "/api/food/").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_food_form_reports_every_missing_field(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_media(pool, media.path());

    let response = post_multipart(app, "/api/food/", &[Part::Text("name", "  ")]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    for field in ["name", "category", "price", "image"] {
        assert_eq!(
            json["fields"][field][0], "This field is required.",
            "expected required error on {field}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_price_above_food_column_range_rejected(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_media(pool, media.path());

    let response = post_multipart(
        app,
        "/api/food/",
        &[
            Part::Text("name", "Gold Leaf Thali"),
            Part::Text("category", "veg"),
            Part::Text("price", "1000000"),
            Part::File("image", "thali.jpg", b"thali"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["price"].is_array());
    assert!(!media.path().join("food").exists());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_category_rejected_without_storing(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_media(pool, media.path());

    let response = post_multipart(
        app,
        "/api/food/",
        &[
            Part::Text("name", "Tomato Soup"),
            Part::Text("category", "soup"),
            Part::Text("price", "4"),
            Part::File("image", "soup.png", b"soup"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["category"].is_array());
    assert!(!media.path().join("food").exists());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_food_removes_stored_image(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_media(pool.clone(), media.path());
    let created = body_json(
        post_multipart(
            app,
            "/api/food/",
            &[
                Part::Text("name", "Lassi"),
                Part::Text("category", "drinks"),
                Part::Text("price", "2.00"),
                Part::File("image", "lassi.gif", b"lassi"),
            ],
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let stored = created["image"].as_str().unwrap().to_string();

    let app = common::build_test_app_with_media(pool.clone(), media.path());
    let response = delete(app, &format!("/api/food/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
    assert!(!media.path().join(&stored).exists());

    let app = common::build_test_app_with_media(pool, media.path());
    let list = body_json(get(app, "/api/food/").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

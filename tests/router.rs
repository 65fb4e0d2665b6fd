// tests/router.rs
//! End-to-end requests against the router with an in-memory workspace.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use notion_blogger::types::{DateValue, SelectOption};
use notion_blogger::{create_router, AppState, ChildrenPaging, PropertyValue, SiteMeta};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn app(repository: MockRepository) -> axum::Router {
    let state = AppState::new(
        Arc::new(repository),
        database_id(),
        ChildrenPaging::FirstPage,
        SiteMeta::default(),
    );
    create_router(Arc::new(state))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn dated(n: u32, title: &str, slug: &str, date: &str) -> notion_blogger::Page {
    post(n, title, slug)
        .with_property(
            "Date",
            PropertyValue::Date(Some(DateValue {
                start: date.parse().unwrap(),
                end: None,
                time_zone: None,
            })),
        )
        .with_property(
            "Tags",
            PropertyValue::MultiSelect(vec![SelectOption {
                id: "t".to_string(),
                name: "notes".to_string(),
                color: Default::default(),
            }]),
        )
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = get(app(MockRepository::new()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn index_lists_posts_newest_first_and_skips_archived() {
    let mut archived = dated(3, "Gone", "gone", "2024-05-01");
    archived.archived = true;
    let repository = MockRepository::new()
        .with_page(dated(1, "Older", "older", "2024-01-01"))
        .with_page(dated(2, "Newer", "newer", "2024-02-01"))
        .with_page(archived);

    let (status, body) = get(app(repository), "/").await;

    assert_eq!(status, StatusCode::OK);
    let newer = body.find(r#"href="/posts/newer""#).expect("newer listed");
    let older = body.find(r#"href="/posts/older""#).expect("older listed");
    assert!(newer < older);
    assert!(!body.contains("Gone"));
}

#[tokio::test]
async fn post_by_slug_renders_its_blocks() {
    let repository = MockRepository::new()
        .with_page(post(1, "Hello", "hello"))
        .with_children(id(1), vec![paragraph(2, "Body text"), bulleted(3, "point")]);

    let (status, body) = get(app(repository), "/posts/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Hello | Notion Blogger</title>"));
    assert!(body.contains("<p>Body text</p>"));
    assert!(body.contains(r#"<ul class="list-disc pl-6"><li>point</li></ul>"#));
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let (status, body) = get(app(MockRepository::new()), "/posts/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn page_by_id_accepts_dashed_ids() {
    let repository = MockRepository::new()
        .with_page(post(1, "Nested", "nested"))
        .with_children(id(1), vec![paragraph(2, "inside")]);

    let uri = format!("/pages/{}", id(1).to_dashed());
    let (status, body) = get(app(repository), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>inside</p>"));
}

#[tokio::test]
async fn malformed_or_missing_page_ids_are_404() {
    let (status, _) = get(app(MockRepository::new()), "/pages/not-an-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/pages/{}", raw_id(42));
    let (status, _) = get(app(MockRepository::new()), &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upstream_failure_is_500_without_leaking_details() {
    let repository = MockRepository::new().failing_database(rate_limited());

    let (status, body) = get(app(repository), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("<h1>500</h1>"));
    assert!(!body.contains("slow down"));
}

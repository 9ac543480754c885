//! HTTP 接口集成测试

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use common::{DEFAULT_BADGE_URL, app_with_profile_site, test_app};

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn generate(form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_says_hello() {
    let app = test_app().await;
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "hello world");
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "badge-web-service");
}

#[tokio::test]
async fn test_user_badge_for_ranked_user() {
    let app = test_app().await;
    let response = app.oneshot(get("/user/alice")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "user info");
    assert_eq!(json["userName"], "alice");
    assert_eq!(json["tier"], "master");
    assert_eq!(json["rank"], "500");
    assert_eq!(
        json["badgeUrl"],
        "https://img.shields.io/badge/Kaggle-master%2C%20500-0?color=F76629&style=flat-square"
    );
}

#[tokio::test]
async fn test_user_badge_fields_in_any_order() {
    let app = test_app().await;
    let response = app.oneshot(get("/user/erin")).await.unwrap();

    let json = body_json(response).await;
    assert_eq!(json["tier"], "expert");
    assert_eq!(json["rank"], "1234");

    let url = url::Url::parse(json["badgeUrl"].as_str().unwrap()).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("color".to_string(), "96508E".to_string()),
            ("style".to_string(), "flat-square".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unknown_user_falls_back_to_novice() {
    let app = test_app().await;
    let response = app.oneshot(get("/user/ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["userName"], "ghost");
    assert_eq!(json["tier"], "novice");
    assert_eq!(json["rank"], "");
    assert_eq!(
        json["badgeUrl"],
        "https://img.shields.io/badge/Kaggle-novice%2C%20-0?color=4FCB93&style=flat-square"
    );
}

#[tokio::test]
async fn test_page_without_fragment_falls_back() {
    let app = test_app().await;
    let response = app.oneshot(get("/user/plain")).await.unwrap();

    let json = body_json(response).await;
    assert_eq!(json["tier"], "novice");
    assert_eq!(json["rank"], "");
}

#[tokio::test]
async fn test_unreachable_profile_site_falls_back() {
    let app = app_with_profile_site("http://127.0.0.1:1");
    let response = app.oneshot(get("/user/alice")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tier"], "novice");
    assert_eq!(json["rank"], "");
}

#[tokio::test]
async fn test_main_page_shows_default_badge() {
    let app = test_app().await;
    let response = app.oneshot(get("/main")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains(&DEFAULT_BADGE_URL.replace('&', "&amp;")));
}

#[tokio::test]
async fn test_user_lookup_does_not_touch_main_page() {
    let app = test_app().await;
    let _ = app.clone().oneshot(get("/user/alice")).await.unwrap();

    let html = body_string(app.oneshot(get("/main")).await.unwrap()).await;
    assert!(html.contains(&DEFAULT_BADGE_URL.replace('&', "&amp;")));
}

#[tokio::test]
async fn test_generate_redirects_and_updates_main_page() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(generate(
            "username=alice&style_options=for-the-badge&logo_options=Off",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "/main");

    let html = body_string(app.oneshot(get("/main")).await.unwrap()).await;
    assert!(html.contains(
        "https://img.shields.io/badge/Kaggle-master%2C%20500-0?color=F76629&amp;style=for-the-badge"
    ));
}

#[tokio::test]
async fn test_generate_with_logo() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(generate("username=alice&style_options=flat&logo_options=On"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);

    let html = body_string(app.oneshot(get("/main")).await.unwrap()).await;
    assert!(html.contains("color=F76629&amp;logo=data%3Aimage%2Fpng%3Bbase64%2C"));
    assert!(html.contains("&amp;style=flat\""));
}

#[tokio::test]
async fn test_generate_with_empty_form() {
    let app = test_app().await;

    let response = app.clone().oneshot(generate("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[header::LOCATION], "/main");

    let html = body_string(app.oneshot(get("/main")).await.unwrap()).await;
    assert!(html.contains("https://img.shields.io/badge/Kaggle-novice%2C%20-0?color=4FCB93&amp;style="));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app().await;
    let response = app.oneshot(get("/nope/deeper")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_header() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

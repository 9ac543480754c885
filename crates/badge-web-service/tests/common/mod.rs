//! 集成测试公共设施：进程内的模拟资料站与待测应用

use axum::{
    Router,
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use badge_shared::config::AppConfig;
use badge_web_service::{AppState, build_app};
use tokio::net::TcpListener;

pub const DEFAULT_BADGE_URL: &str =
    "https://img.shields.io/badge/Kaggle-grandmaster-0?color=DDAA17&style=flat-square";

/// 构造带段位片段的资料页
pub fn profile_page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Kaggle</title></head>
<body>
<script class="kaggle-component">Kaggle.State.push({{"userId":7,{fragment}"performanceTier":"unranked"}});</script>
</body>
</html>"#
    )
}

async fn profile(Path(username): Path<String>) -> Response {
    match username.as_str() {
        "alice" => Html(profile_page(r#""tier":"master","rankCurrent":500,"#)).into_response(),
        "erin" => Html(profile_page(r#""rankCurrent":1234,"tier":"expert","#)).into_response(),
        "plain" => Html("<html><body><p>nothing here</p></body></html>").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 在随机端口启动模拟资料站，返回其基础地址
pub async fn spawn_profile_site() -> String {
    let app = Router::new().route("/{username}", get(profile));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// 指向给定资料站的应用
pub fn app_with_profile_site(base_url: &str) -> Router {
    let mut config = AppConfig::default();
    config.profile_site.base_url = base_url.to_string();
    config.profile_site.timeout_seconds = 5;
    build_app(AppState::from_config(&config).unwrap())
}

/// 指向模拟资料站的应用
pub async fn test_app() -> Router {
    let base_url = spawn_profile_site().await;
    app_with_profile_site(&base_url)
}

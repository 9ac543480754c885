//! 表单生成徽章

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use rank_badge::LogoOption;
use tracing::info;

use crate::dto::GenerateForm;
use crate::state::AppState;

/// 生成后跳转的结果页
pub const MAIN_PAGE_PATH: &str = "/main";

/// 生成徽章并写入最近徽章，随后 301 跳转到结果页
///
/// POST /generate
pub async fn generate_badge(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> impl IntoResponse {
    let logo = LogoOption::from_form(&form.logo_options);
    let badge = state
        .service
        .generate(&form.username, &form.style_options, logo)
        .await;

    info!(
        username = %form.username,
        style = %form.style_options,
        logo = logo.is_on(),
        url = %badge.url,
        "Badge generated"
    );
    state.last_badge.store(badge.url);

    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, MAIN_PAGE_PATH)],
    )
}

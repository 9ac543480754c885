//! 用户段位查询

use axum::Json;
use axum::extract::{Path, State};
use rank_badge::LogoOption;
use tracing::info;

use crate::dto::UserBadgeResponse;
use crate::state::AppState;

/// JSON 接口固定使用的徽章样式
pub const USER_BADGE_STYLE: &str = "flat-square";

/// 查询用户段位并返回徽章地址，不写入最近徽章
///
/// GET /user/{username}
pub async fn get_user_badge(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<UserBadgeResponse> {
    let badge = state
        .service
        .generate(&username, USER_BADGE_STYLE, LogoOption::Off)
        .await;

    info!(
        username = %username,
        tier = %badge.lookup.tier,
        rank = %badge.lookup.rank,
        "User badge resolved"
    );

    Json(UserBadgeResponse {
        message: "user info".to_string(),
        user_name: badge.lookup.username,
        tier: badge.lookup.tier,
        rank: badge.lookup.rank,
        badge_url: badge.url,
    })
}

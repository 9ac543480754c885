//! 结果页

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::templates::render_main_page;

/// GET /main
pub async fn main_page(State(state): State<AppState>) -> Html<String> {
    Html(render_main_page(&state.last_badge.current()))
}

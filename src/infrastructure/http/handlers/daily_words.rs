//! Daily Words Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetDailyWords;
use crate::infrastructure::http::dto::{ApiResponse, DailyWordsDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取当前每日选集；不存在时 data 为 null
pub async fn get_daily_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Option<DailyWordsDto>>>, ApiError> {
    let result = state.get_daily_words_handler.handle(GetDailyWords).await?;
    Ok(Json(ApiResponse::success(result.map(DailyWordsDto::from))))
}

//! HTTP Routes
//!
//! Endpoints:
//! - /parseSkyengWords      GET|POST  手动触发抓取并写入词典（纯文本响应）
//! - /api/ping              GET       健康检查
//! - /api/daily_words       GET       当前每日选集

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/parseSkyengWords",
            get(handlers::parse_skyeng_words).post(handlers::parse_skyeng_words),
        )
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/daily_words", get(handlers::get_daily_words))
}

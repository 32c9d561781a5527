//! Ping Handler
//!
//! 存活探测：只确认 HTTP 服务在监听，不访问源页面和文档存储

use axum::Json;
use serde::Serialize;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /api/ping，返回服务名与版本
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_reports_this_service() {
        let Json(response) = ping().await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.service, "daily_words");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}

//! Dictionary Handlers - 请求触发的词典更新

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::application::UpdateDictionary;
use crate::infrastructure::http::state::AppState;

pub const UPDATE_SUCCESS_BODY: &str = "Dictionary updated successfully!";
pub const UPDATE_FAILURE_BODY: &str = "Internal Server Error";

/// 同步执行抓取 → 提取 → 写入
///
/// 失败时只返回通用错误信息，细节记录在日志中
pub async fn parse_skyeng_words(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.update_dictionary_handler.handle(UpdateDictionary).await {
        Ok(response) => {
            tracing::info!(written = response.written, "Dictionary updated via request");
            (StatusCode::OK, UPDATE_SUCCESS_BODY)
        }
        Err(e) => {
            tracing::error!(error = %e, "Dictionary update request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILURE_BODY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Method, Request};
    use tower::util::ServiceExt;

    use crate::application::ports::{DocumentStorePort, FetchError, PageFetcherPort};
    use crate::domain::dictionary::DICTIONARY_COLLECTION;
    use crate::infrastructure::adapters::FakePageFetcher;
    use crate::infrastructure::http::create_routes;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    const PAGE: &str = "<table><tbody>\
        <tr><td></td><td>hello</td><td></td><td>a greeting</td></tr>\
        <tr><td></td><td>world</td><td></td><td>the planet</td></tr>\
        </tbody></table>";

    fn app(fetcher: FakePageFetcher, store: Arc<dyn DocumentStorePort>) -> axum::Router {
        let fetcher: Arc<dyn PageFetcherPort> = Arc::new(fetcher);
        create_routes().with_state(Arc::new(AppState::new(fetcher, store)))
    }

    async fn call(app: axum::Router, method: Method) -> (StatusCode, String, String) {
        let request = Request::builder()
            .method(method)
            .uri("/parseSkyengWords")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_success_returns_plain_text_200() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let (status, content_type, body) =
            call(app(FakePageFetcher::with_body(PAGE), store.clone()), Method::GET).await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, UPDATE_SUCCESS_BODY);
        assert_eq!(store.count(DICTIONARY_COLLECTION).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_post_is_accepted() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let (status, _, _) =
            call(app(FakePageFetcher::with_body(PAGE), store), Method::POST).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_failure_returns_generic_500() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let fetcher = FakePageFetcher::failing(FetchError::Network("connection refused".into()));
        let (status, _, body) = call(app(fetcher, store), Method::GET).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, UPDATE_FAILURE_BODY);
    }
}

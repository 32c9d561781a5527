//! Fetcher Adapter - 源页面抓取实现

mod fake_page_fetcher;
mod http_page_fetcher;

pub use fake_page_fetcher::FakePageFetcher;
pub use http_page_fetcher::*;

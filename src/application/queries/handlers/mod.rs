//! Query Handlers 实现

mod daily_words_handlers;

pub use daily_words_handlers::*;

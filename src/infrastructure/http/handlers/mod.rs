//! HTTP Handlers

mod daily_words;
mod dictionary;
mod ping;

pub use daily_words::*;
pub use dictionary::*;
pub use ping::*;

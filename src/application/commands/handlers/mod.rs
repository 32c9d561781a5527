//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod batch;
mod daily_selection_handler;
mod update_dictionary_handler;

pub use batch::{add_all, delete_all};
pub use daily_selection_handler::*;
pub use update_dictionary_handler::*;

//! Scheduler - 定时触发入口

mod daily_scheduler;

pub use daily_scheduler::*;

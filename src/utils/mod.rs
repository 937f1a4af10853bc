//! # 工具函数模块
//!
//! 提供美化输出、进度条和线程安全的消息报告器。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 模块使用
//! - 子模块: output, progress, reporter

pub mod output;
pub mod progress;
pub mod reporter;

pub use reporter::{ConsoleReporter, Level, Reporter};

//! # 批量处理模块
//!
//! 把变换流水线分发到单个文件或目录中的全部文件。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集目录下的普通文件
//! - 有界线程池并行处理
//! - 逐文件报告与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod dispatcher;
pub mod runner;

pub use collector::FileCollector;
pub use dispatcher::Dispatcher;
pub use runner::{BatchResult, BatchRunner, ProcessResult};

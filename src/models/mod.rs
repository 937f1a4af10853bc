//! # 数据模型模块
//!
//! 定义作业描述符、操作类型和算法选择器。
//!
//! ## 依赖关系
//! - 被 `cli/`, `transform/`, `batch/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::{
    CompressionAlgorithm, EncryptionAlgorithm, JobDescriptor, JobStats, Operation,
};

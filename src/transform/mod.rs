//! # 字节变换模块
//!
//! 提供可逆的字节级变换以及把它们串联起来的流水线。
//!
//! ## 子模块
//! - `rle`: 游程编码压缩/解压
//! - `cipher`: 重复密钥加法密码（仅保证可逆，不具备安全性）
//! - `pipeline`: 按规范顺序组合各阶段
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 使用
//! - 使用 `models/job.rs`

pub mod cipher;
pub mod pipeline;
pub mod rle;

pub use pipeline::apply;

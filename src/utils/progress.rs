//! # 进度条工具
//!
//! 封装 `indicatif` 提供批量处理的进度条。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

const BATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}";

/// 创建批量处理进度条
///
/// 输出不是终端时 `indicatif` 不会绘制。
pub fn create_batch_bar(files: usize, workers: usize) -> ProgressBar {
    let pb = ProgressBar::new(files as u64);
    let style = ProgressStyle::with_template(BATCH_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(format!("{} worker(s)", workers));
    pb
}

//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: process

pub mod process;

use crate::cli::process::ProcessArgs;
use crate::error::Result;

/// 执行命令
pub fn run(args: ProcessArgs) -> Result<()> {
    process::execute(args)
}

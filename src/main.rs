//! # gsea - 文件压缩与加密工具
//!
//! 对单个文件或目录中的每个普通文件执行可逆的字节变换：
//! RLE 压缩/解压与重复密钥加法密码的加密/解密。
//!
//! ## 执行顺序
//! 无论请求顺序如何，操作总是按 `解密 -> 解压 -> 压缩 -> 加密` 执行，
//! 因此归档（`-ce`）与还原（`-ud`）互为逆操作。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集、分发与并行执行)
//!   │     ├── transform/ (RLE、密码与流水线)
//!   │     ├── storage.rs (文件读写)
//!   │     └── models/    (作业数据模型)
//!   ├── utils/      (输出、进度条、报告器)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod storage;
mod transform;
mod utils;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::Cli;
use error::GseaError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.args) {
        if e.is_usage_error() {
            let kind = match &e {
                GseaError::MissingKey { .. } => ErrorKind::MissingRequiredArgument,
                _ => ErrorKind::ValueValidation,
            };
            Cli::command().error(kind, e.to_string()).exit();
        }
        utils::output::print_error(&e.detailed());
        std::process::exit(1);
    }
}

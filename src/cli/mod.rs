//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process

pub mod process;

use clap::Parser;

/// gsea - 文件压缩与加密工具
#[derive(Parser, Debug)]
#[command(name = "gsea")]
#[command(version)]
#[command(
    about = "Compress, decompress, encrypt and decrypt a file or every file in a directory",
    long_about = None
)]
#[command(after_help = "Examples:\n  \
    gsea -ce --comp-alg rle --enc-alg vigenere -i in.txt -o out.dat -k secret\n  \
    gsea -ud -i ./archived -o ./restored -k secret")]
pub struct Cli {
    #[command(flatten)]
    pub args: process::ProcessArgs,
}

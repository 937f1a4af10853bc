//! # 处理命令 CLI 定义
//!
//! 可组合的操作开关（`-c -d -e -u`，可合写为 `-ce`）、算法选择、输入输出路径和密钥。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use crate::error::Result;
use crate::models::{CompressionAlgorithm, EncryptionAlgorithm, JobDescriptor, Operation};

use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// 处理命令参数
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("operations")
        .required(true)
        .multiple(true)
        .args(["compress", "decompress", "encrypt", "decrypt"])
))]
pub struct ProcessArgs {
    /// Compress the input
    #[arg(short = 'c', long)]
    pub compress: bool,

    /// Decompress the input
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Encrypt the input (requires --key)
    #[arg(short = 'e', long)]
    pub encrypt: bool,

    /// Decrypt the input (requires --key)
    #[arg(short = 'u', long)]
    pub decrypt: bool,

    /// Compression algorithm
    #[arg(long = "comp-alg", value_enum, default_value_t = CompressionAlgorithm::Rle)]
    pub comp_alg: CompressionAlgorithm,

    /// Encryption algorithm
    #[arg(long = "enc-alg", value_enum, default_value_t = EncryptionAlgorithm::Vigenere)]
    pub enc_alg: EncryptionAlgorithm,

    /// Input file or directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file, or output directory when the input is a directory
    #[arg(short, long)]
    pub output: PathBuf,

    /// Key for encryption/decryption
    #[arg(short, long, env = "GSEA_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Number of parallel jobs for directory input (0 = auto)
    #[arg(short, long, env = "GSEA_JOBS", default_value_t = 0)]
    pub jobs: usize,
}

impl ProcessArgs {
    /// 请求的操作（顺序无关）
    pub fn operations(&self) -> Vec<Operation> {
        [
            (self.compress, Operation::Compress),
            (self.decompress, Operation::Decompress),
            (self.encrypt, Operation::Encrypt),
            (self.decrypt, Operation::Decrypt),
        ]
        .into_iter()
        .filter_map(|(requested, op)| requested.then_some(op))
        .collect()
    }

    /// 构造并校验作业模板
    pub fn to_job(&self) -> Result<JobDescriptor> {
        JobDescriptor::new(
            self.operations(),
            self.comp_alg,
            self.enc_alg,
            self.key.clone().map(String::into_bytes).unwrap_or_default(),
            self.input.clone(),
            self.output.clone(),
        )
    }
}

//! # 作业数据模型
//!
//! 描述一次文件变换作业：请求的操作集合、算法、密钥以及输入输出路径。
//!
//! ## 执行顺序
//! 操作集合按规范顺序执行，与请求顺序无关：
//! ```text
//! Decrypt -> Decompress -> Compress -> Encrypt
//! ```
//! 因此“还原”（解密 → 解压）与“归档”（压缩 → 加密）可同时请求而保持可逆。
//!
//! ## 依赖关系
//! - 被 `transform/pipeline.rs` 使用
//! - 被 `batch/dispatcher.rs` 克隆为每个文件的作业
//! - 被 `cli/mod.rs` 构造

use crate::error::{GseaError, Result};

use clap::ValueEnum;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::PathBuf;

/// 单个变换操作
///
/// 变体声明顺序即执行顺序，`BTreeSet<Operation>` 的迭代顺序依赖于此。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    Decrypt,
    Decompress,
    Compress,
    Encrypt,
}

impl Operation {
    /// 是否需要密钥
    pub fn requires_key(self) -> bool {
        matches!(self, Operation::Encrypt | Operation::Decrypt)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Decrypt => write!(f, "decrypt"),
            Operation::Decompress => write!(f, "decompress"),
            Operation::Compress => write!(f, "compress"),
            Operation::Encrypt => write!(f, "encrypt"),
        }
    }
}

/// 压缩算法
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CompressionAlgorithm {
    /// Run-length encoding, (count, value) byte pairs
    #[default]
    Rle,
}

impl std::fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionAlgorithm::Rle => write!(f, "rle"),
        }
    }
}

/// 加密算法
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum EncryptionAlgorithm {
    /// Repeating-key additive cipher over bytes (not secure)
    #[default]
    Vigenere,
}

impl std::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncryptionAlgorithm::Vigenere => write!(f, "vigenere"),
        }
    }
}

/// 作业描述符
///
/// 工作线程开始后不再修改；目录模式下由模板逐文件克隆。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    /// 请求的操作（去重，按执行顺序排列）
    pub operations: BTreeSet<Operation>,
    /// 压缩算法
    pub compression: CompressionAlgorithm,
    /// 加密算法
    pub encryption: EncryptionAlgorithm,
    /// 密钥字节（可以为空，但加密/解密时必须非空）
    pub key: Vec<u8>,
    /// 输入路径
    pub input: PathBuf,
    /// 输出路径
    pub output: PathBuf,
}

impl JobDescriptor {
    /// 创建并校验作业描述符
    pub fn new(
        operations: impl IntoIterator<Item = Operation>,
        compression: CompressionAlgorithm,
        encryption: EncryptionAlgorithm,
        key: Vec<u8>,
        input: PathBuf,
        output: PathBuf,
    ) -> Result<Self> {
        let operations: BTreeSet<Operation> = operations.into_iter().collect();

        if input.as_os_str().is_empty() {
            return Err(GseaError::InvalidArgument(
                "input path must not be empty".to_string(),
            ));
        }
        if output.as_os_str().is_empty() {
            return Err(GseaError::InvalidArgument(
                "output path must not be empty".to_string(),
            ));
        }

        if key.is_empty() {
            if let Some(op) = operations.iter().find(|op| op.requires_key()) {
                return Err(GseaError::MissingKey {
                    operation: op.to_string(),
                });
            }
        }

        Ok(Self {
            operations,
            compression,
            encryption,
            key,
            input,
            output,
        })
    }

    /// 以本描述符为模板，为目录中的单个文件生成作业
    pub fn for_file(&self, name: &OsStr) -> Self {
        Self {
            input: self.input.join(name),
            output: self.output.join(name),
            ..self.clone()
        }
    }

    /// 操作列表的简短描述，例如 `compress+encrypt`
    pub fn describe_operations(&self) -> String {
        self.operations
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// 单个成功作业的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    /// 读取的字节数
    pub input_bytes: usize,
    /// 写出的字节数
    pub output_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(ops: &[Operation], key: &[u8]) -> Result<JobDescriptor> {
        JobDescriptor::new(
            ops.iter().copied(),
            CompressionAlgorithm::Rle,
            EncryptionAlgorithm::Vigenere,
            key.to_vec(),
            PathBuf::from("in"),
            PathBuf::from("out"),
        )
    }

    #[test]
    fn test_operations_are_canonically_ordered() {
        let job = job(
            &[
                Operation::Encrypt,
                Operation::Compress,
                Operation::Decompress,
                Operation::Decrypt,
            ],
            b"k",
        )
        .unwrap();

        let order: Vec<Operation> = job.operations.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                Operation::Decrypt,
                Operation::Decompress,
                Operation::Compress,
                Operation::Encrypt
            ]
        );
    }

    #[test]
    fn test_duplicate_operations_collapse() {
        let job = job(
            &[Operation::Compress, Operation::Compress, Operation::Compress],
            b"",
        )
        .unwrap();
        assert_eq!(job.operations.len(), 1);
        assert!(job.operations.contains(&Operation::Compress));
        assert!(!job.operations.contains(&Operation::Encrypt));
    }

    #[test]
    fn test_key_required_for_cipher_operations() {
        let err = job(&[Operation::Compress, Operation::Encrypt], b"").unwrap_err();
        assert!(matches!(err, GseaError::MissingKey { ref operation } if operation == "encrypt"));

        let err = job(&[Operation::Decrypt], b"").unwrap_err();
        assert!(matches!(err, GseaError::MissingKey { ref operation } if operation == "decrypt"));

        assert!(job(&[Operation::Compress, Operation::Decompress], b"").is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let err = JobDescriptor::new(
            [Operation::Compress],
            CompressionAlgorithm::Rle,
            EncryptionAlgorithm::Vigenere,
            Vec::new(),
            PathBuf::new(),
            PathBuf::from("out"),
        )
        .unwrap_err();
        assert!(matches!(err, GseaError::InvalidArgument(_)));
    }

    #[test]
    fn test_for_file_substitutes_paths() {
        let template = job(&[Operation::Compress, Operation::Encrypt], b"key").unwrap();
        let child = template.for_file(OsStr::new("a.txt"));

        assert_eq!(child.input, PathBuf::from("in").join("a.txt"));
        assert_eq!(child.output, PathBuf::from("out").join("a.txt"));
        assert_eq!(child.key, template.key);
        assert_eq!(child.operations, template.operations);
    }

    #[test]
    fn test_describe_operations() {
        let job = job(&[Operation::Encrypt, Operation::Compress], b"k").unwrap();
        assert_eq!(job.describe_operations(), "compress+encrypt");
    }
}

//! # 变换流水线
//!
//! 按规范顺序依次执行作业请求的阶段，每个阶段消费上一阶段的输出：
//! ```text
//! Decrypt -> Decompress -> Compress -> Encrypt
//! ```
//! 不检查请求之间的语义冲突（例如同时压缩和解压），只执行被请求的阶段。
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 调用
//! - 使用 `transform/rle.rs`, `transform/cipher.rs`

use super::{cipher, rle};
use crate::error::Result;
use crate::models::{CompressionAlgorithm, EncryptionAlgorithm, JobDescriptor, Operation};

/// 对缓冲区执行作业的全部阶段
pub fn apply(job: &JobDescriptor, data: Vec<u8>) -> Result<Vec<u8>> {
    job.operations
        .iter()
        .try_fold(data, |buffer, &op| run_stage(job, op, &buffer))
}

/// 执行单个阶段
fn run_stage(job: &JobDescriptor, op: Operation, buffer: &[u8]) -> Result<Vec<u8>> {
    match op {
        Operation::Decrypt => Ok(match job.encryption {
            EncryptionAlgorithm::Vigenere => cipher::decrypt(buffer, &job.key),
        }),
        Operation::Decompress => match job.compression {
            CompressionAlgorithm::Rle => rle::decompress(buffer),
        },
        Operation::Compress => Ok(match job.compression {
            CompressionAlgorithm::Rle => rle::compress(buffer),
        }),
        Operation::Encrypt => Ok(match job.encryption {
            EncryptionAlgorithm::Vigenere => cipher::encrypt(buffer, &job.key),
        }),
    }
}

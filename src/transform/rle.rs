//! # RLE 编解码
//!
//! 每个游程编码为两个字节 `(count, value)`，单个游程最多 255 字节，
//! 更长的游程拆分为多个字节对。
//!
//! 无重复数据时输出为输入的两倍大小，这是该格式固有的限制。
//!
//! ## 依赖关系
//! - 被 `transform/pipeline.rs` 使用

use crate::error::{GseaError, Result};

/// 单个字节对可表示的最长游程
pub const MAX_RUN: usize = u8::MAX as usize;

/// 压缩字节序列
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(data.len());
    let mut pos = 0;

    while pos < data.len() {
        let value = data[pos];
        let run = data[pos..]
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == value)
            .count();

        output.push(run as u8);
        output.push(value);
        pos += run;
    }

    output
}

/// 解压字节序列
///
/// 奇数长度的输入视为损坏数据，返回 [`GseaError::CorruptData`]；
/// 空输入是合法的，解压结果为空。计数为 0 的字节对不产生输出。
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % 2 != 0 {
        return Err(GseaError::CorruptData {
            reason: format!(
                "RLE payload must contain (count, value) pairs, got {} bytes",
                data.len()
            ),
        });
    }

    let total: usize = data.chunks_exact(2).map(|pair| pair[0] as usize).sum();
    let mut output = Vec::with_capacity(total);

    for pair in data.chunks_exact(2) {
        let (count, value) = (pair[0] as usize, pair[1]);
        output.resize(output.len() + count, value);
    }

    Ok(output)
}

//! # 统一错误处理模块
//!
//! 定义 gsea 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 参数错误：在任何 I/O 之前终止程序
//! - 存储错误：只影响产生它的单个作业
//! - 数据损坏：RLE 数据长度非法
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// gsea 统一错误类型
#[derive(Error, Debug)]
pub enum GseaError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path not found: {path}")]
    PathNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Operation '{operation}' requires a key (-k/--key)")]
    MissingKey { operation: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Corrupt data: {reason}")]
    CorruptData { reason: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl GseaError {
    /// 是否属于命令行用法错误（需要打印 usage 并以非零码退出）
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            GseaError::MissingKey { .. } | GseaError::InvalidArgument(_)
        )
    }

    /// 包含底层原因的完整错误信息，例如 `Failed to read file: a.txt: No such file or directory`
    pub fn detailed(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GseaError>;

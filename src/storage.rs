//! # 文件存储
//!
//! 整文件读取与写入，以及输出目录的创建。
//!
//! 写入不是原子的：写入失败时可能留下不完整的输出文件。
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 使用

use crate::error::{GseaError, Result};

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// 输出文件权限 (rw-r--r--)
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// 输出目录权限 (rwxr-xr-x)
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// 读取整个文件
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| GseaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 创建或截断目标文件并写入全部数据
///
/// `write_all` 遇到被中断的写入会自动重试，直到全部字节写出或出现其他错误。
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let to_error = |e: std::io::Error| GseaError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let mut file = open_for_write(path).map_err(to_error)?;
    file.write_all(data).map_err(to_error)?;
    file.flush().map_err(to_error)
}

fn open_for_write(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options.open(path)
}

/// 确保目录存在（不存在时递归创建）
pub fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder.create(path).map_err(|e| GseaError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");

        write_file(&path, &[0, 1, 2, 255]).unwrap();
        assert_eq!(read_file(&path).unwrap(), vec![0, 1, 2, 255]);
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");

        write_file(&path, b"a much longer first version").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"short".to_vec());
    }

    #[test]
    fn test_empty_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty");

        write_file(&path, &[]).unwrap();
        assert!(read_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_file(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, GseaError::FileReadError { .. }));
    }

    #[test]
    fn test_write_into_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = write_file(dir.path(), b"x").unwrap_err();
        assert!(matches!(err, GseaError::FileWriteError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.bin");
        write_file(&path, b"x").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask 只会去掉权限位
        assert_eq!(mode & !FILE_MODE, 0);
    }

    #[test]
    fn test_ensure_dir_nested_and_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}

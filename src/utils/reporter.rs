//! # 消息报告器
//!
//! 工作线程通过注入的 [`Reporter`] 输出状态与错误消息，而不是直接写终端。
//! 实现必须保证来自不同线程的整行消息互不交错；不同线程之间的行顺序不作保证。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - `ConsoleReporter` 使用 `utils/output.rs`

use super::output;

use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// 消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// 线程安全的消息报告接口
pub trait Reporter: Send + Sync {
    /// 输出一整行消息
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// 终端报告器
///
/// 普通消息写到 `out`，错误写到 `err`，两者共用一把锁，每条消息作为整行写出。
/// 默认输出到 stdout/stderr。
pub struct ConsoleReporter<O: Write + Send = Stdout, E: Write + Send = Stderr> {
    sinks: Mutex<(O, E)>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_sinks(io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> ConsoleReporter<O, E> {
    /// 使用自定义输出目标
    pub fn with_sinks(out: O, err: E) -> Self {
        Self {
            sinks: Mutex::new((out, err)),
        }
    }

    /// 取回输出目标
    #[cfg(test)]
    pub fn into_sinks(self) -> (O, E) {
        self.sinks
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: Write + Send, E: Write + Send> Reporter for ConsoleReporter<O, E> {
    fn report(&self, level: Level, message: &str) {
        let line = output::format_line(level, message);

        // 持锁期间 panic 不影响后续输出
        let mut sinks = self.sinks.lock().unwrap_or_else(PoisonError::into_inner);
        let (out, err) = &mut *sinks;
        let sink: &mut dyn Write = match level {
            Level::Error => err as &mut dyn Write,
            _ => out as &mut dyn Write,
        };

        // 终端不可写时没有其他报告途径
        let _ = writeln!(sink, "{}", line).and_then(|_| sink.flush());
    }
}

/// 内存报告器，收集所有消息供测试检查
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收集的消息
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 指定级别的消息数量
    pub fn count(&self, level: Level) -> usize {
        self.lines().iter().filter(|(l, _)| *l == level).count()
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

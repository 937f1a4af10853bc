//! # 美化输出工具
//!
//! 提供统一的终端输出样式，每个消息级别对应一个彩色标签。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `utils/reporter.rs` 使用
//! - 使用 `colored` crate

use super::Level;

use colored::{ColoredString, Colorize};

/// 消息级别对应的标签
fn tag(level: Level) -> ColoredString {
    match level {
        Level::Info => "[*]".blue().bold(),
        Level::Success => "[OK]".green().bold(),
        Level::Warning => "[WARN]".yellow().bold(),
        Level::Error => "[ERR]".red().bold(),
    }
}

/// 带标签的一行消息（不含换行符）
pub fn format_line(level: Level, msg: &str) -> String {
    format!("{} {}", tag(level), msg)
}

/// 打印一行带标签的消息，错误写到 stderr
pub fn print(level: Level, msg: &str) {
    match level {
        Level::Error => eprintln!("{}", format_line(level, msg)),
        _ => println!("{}", format_line(level, msg)),
    }
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    print(Level::Error, msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    print(Level::Warning, msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印输入 -> 输出
pub fn print_transform(from: &str, to: &str) {
    println!("{} {} {} {}", tag(Level::Info), from.dimmed(), "->".cyan(), to);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

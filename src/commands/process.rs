//! # 处理命令实现
//!
//! 对单个文件或目录中的全部文件执行压缩/解压/加密/解密。
//!
//! ## 功能
//! - 参数校验（在任何 I/O 之前）
//! - 单文件与目录模式分发
//! - 汇总统计与逐文件结果表
//!
//! 单个作业失败只会被报告，命令本身仍然成功返回。
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/` 模块进行分发
//! - 使用 `utils/output.rs`, `utils/reporter.rs`

use crate::batch::{BatchResult, Dispatcher, ProcessResult};
use crate::cli::process::ProcessArgs;
use crate::error::Result;
use crate::utils::{output, ConsoleReporter};

use std::time::{Duration, Instant};
use tabled::{Table, Tabled};

/// 失败详情最多显示的条数
const MAX_LISTED_FAILURES: usize = 10;

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Input (bytes)")]
    input_bytes: String,
    #[tabled(rename = "Output (bytes)")]
    output_bytes: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行处理命令
pub fn execute(args: ProcessArgs) -> Result<()> {
    let job = args.to_job()?;

    output::print_header(&format!(
        "gsea: {} ({} / {})",
        job.describe_operations(),
        job.compression,
        job.encryption
    ));
    output::print_transform(
        &job.input.display().to_string(),
        &job.output.display().to_string(),
    );

    let reporter = ConsoleReporter::new();
    let dispatcher = Dispatcher::new(args.jobs, &reporter);

    let started = Instant::now();
    let result = dispatcher.dispatch(&job)?;

    print_summary(&result, started.elapsed());

    Ok(())
}

/// 打印统计与结果表
fn print_summary(result: &BatchResult, elapsed: Duration) {
    if result.total() == 0 {
        return;
    }

    output::print_separator();

    let mut outcomes = result.outcomes.clone();
    outcomes.sort_by(|a, b| a.path().cmp(b.path()));

    let rows: Vec<OutcomeRow> = outcomes.iter().map(outcome_row).collect();
    println!("{}", Table::new(&rows));

    output::print_done(&format!(
        "Processed {} file(s): {} success, {} failed in {:.2?}",
        result.total(),
        result.success,
        result.failed,
        elapsed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(MAX_LISTED_FAILURES) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > MAX_LISTED_FAILURES {
            output::print_warning(&format!(
                "  ... and {} more",
                result.failures.len() - MAX_LISTED_FAILURES
            ));
        }
    }
}

fn outcome_row(outcome: &ProcessResult) -> OutcomeRow {
    match outcome {
        ProcessResult::Success(path, stats) => OutcomeRow {
            file: path.clone(),
            input_bytes: stats.input_bytes.to_string(),
            output_bytes: stats.output_bytes.to_string(),
            status: "ok".to_string(),
        },
        ProcessResult::Failed(path, _) => OutcomeRow {
            file: path.clone(),
            input_bytes: "-".to_string(),
            output_bytes: "-".to_string(),
            status: "failed".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStats;

    #[test]
    fn test_outcome_rows() {
        let ok = outcome_row(&ProcessResult::Success(
            "a.txt".to_string(),
            JobStats {
                input_bytes: 10,
                output_bytes: 6,
            },
        ));
        assert_eq!(ok.file, "a.txt");
        assert_eq!(ok.input_bytes, "10");
        assert_eq!(ok.output_bytes, "6");
        assert_eq!(ok.status, "ok");

        let failed = outcome_row(&ProcessResult::Failed(
            "b.txt".to_string(),
            "Failed to read file: b.txt".to_string(),
        ));
        assert_eq!(failed.status, "failed");
        assert_eq!(failed.input_bytes, "-");
    }

    #[test]
    fn test_table_renders_headers() {
        let rows = vec![outcome_row(&ProcessResult::Success(
            "a.txt".to_string(),
            JobStats::default(),
        ))];
        let table = Table::new(&rows).to_string();
        assert!(table.contains("File"));
        assert!(table.contains("Status"));
        assert!(table.contains("a.txt"));
    }
}

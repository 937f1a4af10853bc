//! # 作业分发器
//!
//! 根据输入路径类型选择单文件模式或目录模式，并对每个文件执行完整作业：
//! ```text
//! 读取 -> transform::apply -> 写入 -> 报告
//! ```
//!
//! ## 功能
//! - 非目录输入（普通文件、设备等）：在当前线程同步执行
//! - 目录输入：收集普通文件，创建输出目录，交给 `BatchRunner` 并行执行
//! - 输出目录创建失败以及单个作业的读写失败只会被报告，不会中断批次
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/runner.rs`
//! - 使用 `storage.rs`, `transform/`

use super::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::error::{GseaError, Result};
use crate::models::{JobDescriptor, JobStats};
use crate::storage;
use crate::transform;
use crate::utils::Reporter;

/// 作业分发器
pub struct Dispatcher<'a> {
    /// 目录模式使用的执行器
    runner: BatchRunner,
    /// 注入的报告器
    reporter: &'a dyn Reporter,
}

impl<'a> Dispatcher<'a> {
    /// 创建分发器（`jobs` 为 0 时使用全部逻辑 CPU）
    pub fn new(jobs: usize, reporter: &'a dyn Reporter) -> Self {
        Self {
            runner: BatchRunner::new(jobs),
            reporter,
        }
    }

    /// 按模板执行：输入为目录时逐文件并行执行，其他存在的路径执行一次
    ///
    /// 只要批次跑完就返回 `Ok`，单个作业是否成功记录在 `BatchResult` 中。
    pub fn dispatch(&self, template: &JobDescriptor) -> Result<BatchResult> {
        let collector = FileCollector::new(template.input.clone());

        if collector.is_directory() {
            self.dispatch_directory(template, &collector)
        } else if template.input.exists() {
            // 普通文件、设备、FIFO 等都按单个作业处理
            let mut result = BatchResult::default();
            result.merge(run_job(template.clone(), self.reporter));
            Ok(result)
        } else {
            Err(GseaError::PathNotFound {
                path: template.input.display().to_string(),
            })
        }
    }

    /// 目录模式
    fn dispatch_directory(
        &self,
        template: &JobDescriptor,
        collector: &FileCollector,
    ) -> Result<BatchResult> {
        let files = collector.collect();

        if files.is_empty() {
            self.reporter.warning(&format!(
                "Input directory '{}' contains no regular files",
                template.input.display()
            ));
            return Ok(BatchResult::default());
        }

        // 创建失败只报告，由各作业的写入失败逐个体现
        if let Err(e) = storage::ensure_dir(&template.output) {
            self.reporter.error(&e.detailed());
        }

        let jobs: Vec<JobDescriptor> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| template.for_file(name))
            .collect();

        self.reporter.info(&format!(
            "Directory mode: {} file(s), {} worker thread(s)",
            jobs.len(),
            self.runner.jobs()
        ));

        self.runner.run(jobs, self.reporter, run_job)
    }
}

/// 执行单个作业并报告结果
pub fn run_job(job: JobDescriptor, reporter: &dyn Reporter) -> ProcessResult {
    let input = job.input.display().to_string();
    reporter.info(&format!("Processing: {} -> {}", input, job.output.display()));

    match execute_job(&job) {
        Ok(stats) => {
            reporter.success(&format!(
                "Finished: {} ({} -> {} bytes)",
                input, stats.input_bytes, stats.output_bytes
            ));
            ProcessResult::Success(input, stats)
        }
        Err(e) => {
            let message = e.detailed();
            reporter.error(&message);
            ProcessResult::Failed(input, message)
        }
    }
}

/// 读取、变换、写入
fn execute_job(job: &JobDescriptor) -> Result<JobStats> {
    let data = storage::read_file(&job.input)?;
    let input_bytes = data.len();

    let output = transform::apply(job, data)?;
    storage::write_file(&job.output, &output)?;

    Ok(JobStats {
        input_bytes,
        output_bytes: output.len(),
    })
}

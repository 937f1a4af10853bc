//! # 批量执行器
//!
//! 在固定大小的线程池中并行执行批量任务。
//!
//! ## 功能
//! - 基于 rayon 的有界线程池
//! - 任务按值移交给工作线程
//! - 进度条显示，工作线程消息通过进度条挂起输出
//! - 等待所有任务结束后汇总结果
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::Result;
use crate::models::JobStats;
use crate::utils::progress;
use crate::utils::{Level, Reporter};

use indicatif::ProgressBar;
use rayon::prelude::*;

/// 单个任务处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(String, JobStats), // (文件路径, 统计)
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

impl ProcessResult {
    /// 任务对应的文件路径
    pub fn path(&self) -> &str {
        match self {
            ProcessResult::Success(path, _) | ProcessResult::Failed(path, _) => path,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 全部任务结果
    pub outcomes: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result {
            ProcessResult::Success(..) => self.success += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path.clone(), err.clone()));
            }
        }
        self.outcomes.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用全部逻辑 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 工作线程数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表，所有任务结束后返回
    ///
    /// 单个任务的失败只体现在其 `ProcessResult` 中，不影响其他任务。
    pub fn run<T, F>(
        &self,
        tasks: Vec<T>,
        reporter: &dyn Reporter,
        processor: F,
    ) -> Result<BatchResult>
    where
        T: Send,
        F: Fn(T, &dyn Reporter) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_batch_bar(tasks.len(), self.jobs);
        let reporter: &dyn Reporter = &SuspendingReporter {
            inner: reporter,
            pb: &pb,
        };

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;

        let results: Vec<ProcessResult> = pool.install(|| {
            tasks
                .into_par_iter()
                .map(|task| {
                    let result = processor(task, reporter);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

/// 输出消息时暂时隐藏进度条，避免进度条重绘与消息行混在一起
struct SuspendingReporter<'a> {
    inner: &'a dyn Reporter,
    pb: &'a ProgressBar,
}

impl Reporter for SuspendingReporter<'_> {
    fn report(&self, level: Level, message: &str) {
        self.pb.suspend(|| self.inner.report(level, message));
    }
}

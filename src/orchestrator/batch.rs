//! 命令行模式 - 编排层
//!
//! 不打开窗口，依次审阅命令行给出的路径，把结果写到输出流。
//! 每个参数按拖放内容解析，与窗口模式走同一个 worker，一次只处理一份。

use std::io::Write;
use std::sync::mpsc::Receiver;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::orchestrator::worker::{ReviewOutcome, ReviewWorker, WorkerEvent, ERROR_MARKER};
use crate::utils::logging::print_final_stats;
use crate::workflow::select_submission;

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 命令行模式
pub struct HeadlessRunner {
    worker: ReviewWorker,
    events: Receiver<WorkerEvent>,
}

impl HeadlessRunner {
    pub fn new(worker: ReviewWorker, events: Receiver<WorkerEvent>) -> Self {
        Self { worker, events }
    }

    /// 依次审阅所有参数
    ///
    /// # 参数
    /// - `payloads`: 命令行参数，每个都是一段拖放内容
    /// - `out`: 结果输出
    pub fn run(&self, payloads: &[String], out: &mut impl Write) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats {
            total: payloads.len(),
            ..Default::default()
        };
        info!("✓ 共 {} 个待审阅文件", stats.total);

        for (idx, raw) in payloads.iter().enumerate() {
            info!("[文件 {}/{}] {}", idx + 1, stats.total, raw);

            let path = match select_submission(raw) {
                Ok(path) => path,
                Err(e) => {
                    warn!("[文件 {}] ⚠️ 跳过: {}", idx + 1, e);
                    writeln!(out, "{} {}", ERROR_MARKER, e)?;
                    stats.failed += 1;
                    continue;
                }
            };

            if let Err(e) = self.worker.submit(path) {
                error!("[文件 {}] ❌ 提交失败: {}", idx + 1, e);
                writeln!(out, "{} {}", ERROR_MARKER, e)?;
                stats.failed += 1;
                continue;
            }

            match self.wait_for_outcome(out)? {
                ReviewOutcome::Completed(_) => stats.success += 1,
                ReviewOutcome::Failed(_) => stats.failed += 1,
            }
        }

        print_final_stats(stats.success, stats.failed, stats.total);
        Ok(stats)
    }

    /// 阻塞等待当前这份审阅结束，过程中把事件写到输出
    fn wait_for_outcome(&self, out: &mut impl Write) -> Result<ReviewOutcome> {
        loop {
            let event = self
                .events
                .recv()
                .context("worker 事件通道已关闭")?;

            match event {
                WorkerEvent::Started { path } => {
                    writeln!(out, "Loading: {}", path.display())?;
                }
                WorkerEvent::Finished { outcome, .. } => {
                    writeln!(out, "\n{}\n", outcome.display_text())?;
                    out.flush()?;
                    return Ok(outcome);
                }
            }
        }
    }
}

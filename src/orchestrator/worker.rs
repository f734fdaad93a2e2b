//! 后台审阅 worker - 编排层
//!
//! 每次提交启动一个 tokio 任务执行审阅，结果通过 channel 交回 UI 线程。
//! UI 线程只从 channel 读取事件，worker 不直接修改 UI 状态。
//!
//! 同一时刻只允许一份审阅在进行，重叠的提交直接返回 `SubmitError::Busy`。

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::error::SubmitError;
use crate::services::Reviewer;

/// 错误结果在输出面板中的前缀
pub const ERROR_MARKER: &str = "[ERROR]";

/// 一次审阅的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// 审阅完成（可能是占位文本）
    Completed(String),
    /// 审阅失败，保存错误描述
    Failed(String),
}

impl ReviewOutcome {
    /// 输出面板中显示的文本
    pub fn display_text(&self) -> String {
        match self {
            ReviewOutcome::Completed(text) => text.clone(),
            ReviewOutcome::Failed(message) => format!("{} {}", ERROR_MARKER, message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ReviewOutcome::Completed(_))
    }
}

/// worker 发给 UI 线程的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    Started { path: PathBuf },
    Finished { path: PathBuf, outcome: ReviewOutcome },
}

/// 每发出一个事件后调用，UI 用它请求重绘
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// 后台审阅 worker
pub struct ReviewWorker {
    reviewer: Arc<Reviewer>,
    runtime: Handle,
    in_flight: Arc<Semaphore>,
    events: mpsc::Sender<WorkerEvent>,
    notifier: Option<Notifier>,
}

impl ReviewWorker {
    /// 创建 worker，返回事件接收端
    pub fn new(reviewer: Arc<Reviewer>, runtime: Handle) -> (Self, mpsc::Receiver<WorkerEvent>) {
        let (events, receiver) = mpsc::channel();
        let worker = Self {
            reviewer,
            runtime,
            in_flight: Arc::new(Semaphore::new(1)),
            events,
            notifier: None,
        };
        (worker, receiver)
    }

    /// 设置事件通知回调
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// 是否有审阅正在进行
    pub fn is_busy(&self) -> bool {
        self.in_flight.available_permits() == 0
    }

    /// 提交一个已校验的 PDF 路径
    ///
    /// 立即返回；结果通过事件送达。
    pub fn submit(&self, path: PathBuf) -> Result<(), SubmitError> {
        let permit = self
            .in_flight
            .clone()
            .try_acquire_owned()
            .map_err(|_| SubmitError::Busy)?;

        info!("📄 开始审阅: {}", path.display());
        emit(
            &self.events,
            self.notifier.as_ref(),
            WorkerEvent::Started { path: path.clone() },
        );

        let reviewer = self.reviewer.clone();
        let events = self.events.clone();
        let notifier = self.notifier.clone();
        let runtime = self.runtime.clone();

        self.runtime.spawn(async move {
            let review_path = path.clone();
            // 审阅放在单独的任务里，panic 也能转成错误结果
            let joined = runtime
                .spawn(async move { reviewer.run_review(&review_path).await })
                .await;

            let outcome = match joined {
                Ok(Ok(text)) => {
                    info!("✓ 审阅完成: {}", path.display());
                    ReviewOutcome::Completed(text)
                }
                Ok(Err(e)) => {
                    error!("❌ 审阅失败 {}: {}", path.display(), e);
                    ReviewOutcome::Failed(e.to_string())
                }
                Err(e) => {
                    error!("❌ 审阅任务异常退出 {}: {}", path.display(), e);
                    ReviewOutcome::Failed(format!("review task aborted: {}", e))
                }
            };

            // 先释放许可，收到 Finished 的一方可以马上提交下一份
            drop(permit);
            emit(&events, notifier.as_ref(), WorkerEvent::Finished { path, outcome });
        });

        Ok(())
    }
}

fn emit(events: &mpsc::Sender<WorkerEvent>, notifier: Option<&Notifier>, event: WorkerEvent) {
    // 接收端已关闭说明窗口已退出，丢弃即可
    if events.send(event).is_ok() {
        if let Some(notify) = notifier {
            notify();
        }
    }
}

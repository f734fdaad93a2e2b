//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `worker` - 后台审阅 worker
//! - 每次提交启动一个 tokio 任务
//! - 结果通过 channel 交回 UI 线程
//! - 同一时刻只允许一份审阅
//!
//! ### `batch` - 命令行模式
//! - 依次审阅命令行参数给出的文件
//! - 输出统计信息
//!
//! ## 层次关系
//!
//! ```text
//! ui / batch
//!     ↓
//! orchestrator::worker
//!     ↓
//! services::Reviewer
//!     ↓
//! api::ReviewGateway
//! ```

pub mod batch;
pub mod worker;

// 重新导出主要类型
pub use batch::{HeadlessRunner, ProcessingStats};
pub use worker::{ReviewOutcome, ReviewWorker, WorkerEvent, ERROR_MARKER};

//! # PDF IRB Review
//!
//! 把一个 PDF 拖进窗口，交给外部 LLM 服务做 IRB 机器学习伦理审阅，并显示返回的文本。
//!
//! ## 架构设计
//!
//! ### ① 接口层（API）
//! - `api/` - 外部 LLM 服务的窄接口 `ReviewGateway` 及其 HTTP 实现
//!
//! ### ② 业务能力层（Services）
//! - `Reviewer` - 上传 → 组装请求 → 发送 → 提取文本，一次往返
//! - `prompts` - 固定的提示词对
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/submission` - 拖放内容解析与路径校验
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/worker` - 后台审阅 worker，结果经 channel 交回 UI 线程
//! - `orchestrator/batch` - 命令行模式
//!
//! ### ⑤ 界面层（UI）
//! - `ui/` - eframe 窗口
//!
//! ## 模块结构

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod orchestrator;
pub mod prompts;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConfigError, InputError, ReviewError, ReviewResult, ServiceError, SubmitError};
pub use orchestrator::{HeadlessRunner, ReviewOutcome, ReviewWorker, WorkerEvent};
pub use prompts::PromptPair;
pub use services::{Reviewer, NO_TEXT_PLACEHOLDER};

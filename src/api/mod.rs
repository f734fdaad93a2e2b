//! API 模块
//!
//! 负责所有与外部 LLM 服务的交互

pub mod gateway;
pub mod openai;

#[cfg(test)]
pub(crate) mod fixtures;

// 重新导出常用类型
pub use gateway::ReviewGateway;
pub use openai::OpenAiGateway;

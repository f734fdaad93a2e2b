//! 错误类型
//!
//! 按层划分：配置错误、输入错误、外部服务错误，编排层统一汇总为 `ReviewError`。
//! 显示文本会原样出现在输出面板中，所以保持英文。

use async_openai::error::OpenAIError;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的凭据缺失
    #[error(
        "{var_name} is not set. On Windows run:\n  setx {var_name} \"sk-...\"\nThen close & reopen your terminal and try again."
    )]
    MissingApiKey { var_name: String },

    /// 提示词文件读取失败
    #[error("cannot read prompt file {path}: {source}")]
    PromptFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 提示词文件解析失败
    #[error("cannot parse prompt file {path}: {source}")]
    PromptFileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 输入错误（拖放 / 选择文件）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// 拖放内容为空
    #[error("nothing was dropped")]
    EmptyDrop,

    /// 不是 PDF
    #[error("Please drop a .pdf file.")]
    NotPdf { path: String },

    /// 文件不存在
    #[error("File not found:\n{path}")]
    NotFound { path: String },
}

/// 外部 LLM 服务错误
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 服务返回的错误对象（包括 5xx 的原始响应体）
    #[error("{endpoint} returned an error: {message}")]
    Api {
        endpoint: String,
        message: String,
        code: Option<String>,
    },

    /// 网络、解析或请求构造失败
    #[error("request to {endpoint} failed: {source}")]
    Client {
        endpoint: String,
        #[source]
        source: OpenAIError,
    },

    /// 桩实现或其他实现自定义的失败
    #[error("{0}")]
    Other(String),
}

/// 一次审阅过程中的错误
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 读取待上传文件失败
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// 提交到后台 worker 时的错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// 已有一份审阅在进行中
    #[error("a review is already in progress")]
    Busy,
}

// ========== 便捷构造函数 ==========

impl ServiceError {
    /// 把 async-openai 的错误归到对应端点
    ///
    /// `ApiError` 拆出消息和错误码，其余情况保留原始错误作为 source。
    pub fn from_openai(endpoint: impl Into<String>, err: OpenAIError) -> Self {
        let endpoint = endpoint.into();
        match err {
            OpenAIError::ApiError(api_error) => ServiceError::Api {
                endpoint,
                message: api_error.message,
                code: api_error.code,
            },
            source => ServiceError::Client { endpoint, source },
        }
    }
}

// ========== Result 类型别名 ==========

/// 审阅结果类型
pub type ReviewResult<T> = Result<T, ReviewError>;

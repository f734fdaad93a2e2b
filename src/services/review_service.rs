//! 审阅服务 - 业务能力层
//!
//! 把一个本地 PDF 变成一段审阅文本，只做一次往返：
//! 上传 → 组装请求 → 发送 → 提取文本。
//!
//! 内部不捕获错误，任何一步失败都原样交给调用方。

use std::path::Path;
use std::sync::Arc;

use async_openai::types::files::{CreateFileRequest, FileInput, FilePurpose};
use async_openai::types::responses::{
    CreateResponse, EasyInputContent, EasyInputMessage, InputContent, InputFileArgs, InputItem,
    InputParam, InputTextContent, MessageType, OutputItem, OutputMessageContent, Response, Role,
};
use tracing::{debug, info};

use crate::api::openai::RESPONSES_ENDPOINT;
use crate::api::{OpenAiGateway, ReviewGateway};
use crate::config::Config;
use crate::error::{ReviewError, ReviewResult, ServiceError};
use crate::prompts::PromptPair;
use crate::utils::logging::truncate_text;

/// 没有任何文本输出时的占位文本
pub const NO_TEXT_PLACEHOLDER: &str = "(No text received)";

/// 审阅服务
///
/// 进程内只构造一次，网关作为显式依赖传入。
pub struct Reviewer {
    gateway: Arc<dyn ReviewGateway>,
    prompts: PromptPair,
    config: Config,
}

impl Reviewer {
    /// 使用指定网关创建
    pub fn new(config: &Config, prompts: PromptPair, gateway: Arc<dyn ReviewGateway>) -> Self {
        Self {
            gateway,
            prompts,
            config: config.clone(),
        }
    }

    /// 使用 OpenAI 网关创建
    pub fn from_config(config: &Config, prompts: PromptPair) -> Self {
        let gateway = OpenAiGateway::new(config);
        Self::new(config, prompts, Arc::new(gateway))
    }

    /// 审阅一个 PDF 文件
    ///
    /// # 参数
    /// - `path`: 本地文件路径，调用方已检查扩展名
    ///
    /// # 返回
    /// 返回模型输出的文本；没有文本时返回占位文本
    pub async fn run_review(&self, path: &Path) -> ReviewResult<String> {
        // 先检查凭据，缺失时不发起任何请求
        self.config.require_api_key()?;

        let path_display = path.display().to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ReviewError::Io {
                path: path_display.clone(),
                source,
            })?;

        info!("📤 上传文件: {} ({} 字节)", path_display, bytes.len());
        let upload = CreateFileRequest {
            file: FileInput::from_vec_u8(file_name_of(path), bytes),
            purpose: FilePurpose::Assistants,
            expires_after: None,
        };
        let file = self.gateway.store_file(upload).await?;

        let request = self.compose_request(&file.id)?;
        info!("🤖 请求审阅，模型: {}", self.config.llm_model_name);
        let response = self.gateway.create_response(request).await?;

        let text = extract_text(&response);
        debug!("审阅结果: {}", truncate_text(&text, 80));
        Ok(text)
    }

    /// 组装请求：一条系统消息 + 一条带文件引用的用户消息
    pub fn compose_request(&self, file_id: &str) -> Result<CreateResponse, ServiceError> {
        let file_part = InputFileArgs::default()
            .file_id(file_id)
            .build()
            .map_err(|e| ServiceError::from_openai(RESPONSES_ENDPOINT, e))?;

        let system = EasyInputMessage {
            r#type: MessageType::Message,
            role: Role::System,
            content: EasyInputContent::Text(self.prompts.system_role.clone()),
        };
        let user = EasyInputMessage {
            r#type: MessageType::Message,
            role: Role::User,
            content: EasyInputContent::ContentList(vec![
                InputContent::InputText(InputTextContent {
                    text: self.prompts.user_task.clone(),
                }),
                InputContent::InputFile(file_part),
            ]),
        };

        Ok(CreateResponse {
            model: Some(self.config.llm_model_name.clone()),
            input: InputParam::Items(vec![
                InputItem::EasyMessage(system),
                InputItem::EasyMessage(user),
            ]),
            ..Default::default()
        })
    }
}

/// 提取响应中的全部文本
///
/// 按返回顺序收集所有 message 里的 output_text，换行拼接后去掉首尾空白。
pub fn extract_text(response: &Response) -> String {
    let chunks: Vec<&str> = response
        .output
        .iter()
        .filter_map(|item| match item {
            OutputItem::Message(message) => Some(&message.content),
            _ => None,
        })
        .flatten()
        .filter_map(|block| match block {
            OutputMessageContent::OutputText(output) => Some(output.text.as_str()),
            _ => None,
        })
        .collect();

    let text = chunks.join("\n").trim().to_string();
    if text.is_empty() {
        NO_TEXT_PLACEHOLDER.to_string()
    } else {
        text
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.pdf".to_string())
}

use async_openai::types::files::{CreateFileRequest, OpenAIFile};
use async_openai::types::responses::{CreateResponse, Response};
use async_trait::async_trait;

use crate::error::ServiceError;

/// 外部 LLM 服务的窄接口
///
/// 编排层只依赖这两个操作，测试里可以换成桩实现。
/// 凭据在实现构造时注入，编排层负责在调用前确认凭据存在。
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// 上传文件，返回服务端的文件对象
    async fn store_file(&self, request: CreateFileRequest) -> Result<OpenAIFile, ServiceError>;

    /// 发送一次 Responses 请求
    async fn create_response(&self, request: CreateResponse) -> Result<Response, ServiceError>;
}

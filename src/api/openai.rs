//! OpenAI 兼容服务的网关实现
//!
//! 基于 `async-openai`：
//! - `client.files().create(..)`：`POST {base}/files`，multipart 上传
//! - `client.responses().create(..)`：`POST {base}/responses`
//!
//! 不重试，不流式。

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::files::{CreateFileRequest, OpenAIFile};
use async_openai::types::responses::{CreateResponse, Response};
use async_openai::Client;
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use tracing::{debug, warn};

use crate::api::gateway::ReviewGateway;
use crate::config::Config;
use crate::error::ServiceError;

pub const FILES_ENDPOINT: &str = "/files";
pub const RESPONSES_ENDPOINT: &str = "/responses";

/// OpenAI 兼容服务网关
///
/// 客户端在构造时建好一次，之后所有审阅共用。
pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
}

impl OpenAiGateway {
    /// 创建新的网关
    ///
    /// 密钥缺失时仍可构造，调用前由编排层拦下。
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.as_deref().unwrap_or_default())
            .with_api_base(config.llm_api_base_url.trim_end_matches('/'));

        // 每个操作只发一次请求，5xx 和 429 也直接返回
        let single_attempt = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config).with_backoff(single_attempt);

        Self { client }
    }
}

#[async_trait]
impl ReviewGateway for OpenAiGateway {
    async fn store_file(&self, request: CreateFileRequest) -> Result<OpenAIFile, ServiceError> {
        debug!("上传文件，用途: {}", request.purpose);

        let file = self.client.files().create(request).await.map_err(|e| {
            warn!("⚠️ 上传失败: {}", e);
            ServiceError::from_openai(FILES_ENDPOINT, e)
        })?;

        debug!("上传完成，文件 ID: {} ({} 字节)", file.id, file.bytes);
        Ok(file)
    }

    async fn create_response(&self, request: CreateResponse) -> Result<Response, ServiceError> {
        debug!(
            "调用 Responses API，模型: {}",
            request.model.as_deref().unwrap_or("<default>")
        );

        self.client.responses().create(request).await.map_err(|e| {
            warn!("⚠️ Responses 请求失败: {}", e);
            ServiceError::from_openai(RESPONSES_ENDPOINT, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::error::OpenAIError;
    use async_openai::types::files::{FileInput, FilePurpose};
    use async_openai::types::responses::{EasyInputMessage, InputItem, InputParam};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::fixtures;

    fn gateway_for(base: String) -> OpenAiGateway {
        OpenAiGateway::new(&Config {
            llm_api_key: Some("sk-test".to_string()),
            llm_api_base_url: base,
            ..Config::default()
        })
    }

    fn sample_upload() -> CreateFileRequest {
        CreateFileRequest {
            file: FileInput::from_vec_u8("protocol.pdf".to_string(), b"%PDF-1.4 test".to_vec()),
            purpose: FilePurpose::Assistants,
            expires_after: None,
        }
    }

    fn sample_request() -> CreateResponse {
        CreateResponse {
            model: Some("gpt-4.1-mini".to_string()),
            input: InputParam::Items(vec![InputItem::EasyMessage(EasyInputMessage::from("persona"))]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_store_file_sends_multipart_with_purpose() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_string_contains("assistants"))
            .and(body_string_contains("protocol.pdf"))
            .and(body_string_contains("%PDF-1.4 test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::file_json("file-123")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1", mock_server.uri()));
        let file = gateway.store_file(sample_upload()).await.unwrap();

        assert_eq!(file.id, "file-123");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::file_json("file-slash")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1/", mock_server.uri()));
        let file = gateway.store_file(sample_upload()).await.unwrap();

        assert_eq!(file.id, "file-slash");
    }

    #[tokio::test]
    async fn test_store_file_maps_rejection() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1", mock_server.uri()));
        let err = gateway.store_file(sample_upload()).await.unwrap_err();

        match err {
            ServiceError::Api { endpoint, message, code } => {
                assert_eq!(endpoint, FILES_ENDPOINT);
                assert_eq!(message, "Incorrect API key provided");
                assert_eq!(code.as_deref(), Some("invalid_api_key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_response_posts_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"model": "gpt-4.1-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response_json(&["ok"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1", mock_server.uri()));
        let response = gateway.create_response(sample_request()).await.unwrap();

        assert_eq!(response.output.len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1", mock_server.uri()));
        let err = gateway.create_response(sample_request()).await.unwrap_err();

        match err {
            ServiceError::Api { endpoint, message, .. } => {
                assert_eq!(endpoint, RESPONSES_ENDPOINT);
                assert_eq!(message, "upstream overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_response_rejects_garbage_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let gateway = gateway_for(format!("{}/v1", mock_server.uri()));
        let err = gateway.create_response(sample_request()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Client {
                source: OpenAIError::JSONDeserialize(..),
                ..
            }
        ));
    }
}

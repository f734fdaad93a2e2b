//! 测试用的服务端响应
//!
//! 用 JSON 拼出 `OpenAIFile` / `Response`，桩网关和 wiremock 共用。

use async_openai::types::files::OpenAIFile;
use async_openai::types::responses::Response;
use serde_json::{json, Value};

pub fn file_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "file",
        "bytes": 15,
        "created_at": 1_700_000_000u64,
        "filename": "protocol.pdf",
        "purpose": "assistants"
    })
}

pub fn file_object(id: &str) -> OpenAIFile {
    serde_json::from_value(file_json(id)).unwrap()
}

/// 一条 assistant 消息，每段文本一个 output_text
pub fn response_json(texts: &[&str]) -> Value {
    let content: Vec<Value> = texts
        .iter()
        .map(|text| json!({"type": "output_text", "text": text, "annotations": []}))
        .collect();
    response_with_output(vec![json!({
        "type": "message",
        "id": "msg_1",
        "role": "assistant",
        "status": "completed",
        "content": content
    })])
}

pub fn response_with_output(output: Vec<Value>) -> Value {
    json!({
        "id": "resp_1",
        "object": "response",
        "created_at": 1_700_000_000u64,
        "model": "gpt-4.1-mini",
        "status": "completed",
        "output": output
    })
}

pub fn response_object(texts: &[&str]) -> Response {
    serde_json::from_value(response_json(texts)).unwrap()
}

//! Claude（Anthropic Messages API）プロバイダの実装

use crate::domain::ApiKey;
use crate::error::Error;
use crate::llm::provider::{api_error_message, http_client, GenerationOptions, LlmProvider};
use serde_json::{json, Value};

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-6";
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// Claudeプロバイダ
pub struct ClaudeProvider {
    model: String,
    api_key: ApiKey,
    temperature: Option<f32>,
}

impl ClaudeProvider {
    /// 新しいClaudeプロバイダを作成
    ///
    /// * `model` - モデル名（デフォルト: "claude-sonnet-4-6"）
    pub fn new(api_key: ApiKey, model: Option<String>, temperature: Option<f32>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string());
        Self {
            model,
            api_key,
            temperature,
        }
    }
}

impl LlmProvider for ClaudeProvider {
    fn name(&self) -> &str {
        "claude"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = http_client()?
            .post(MESSAGES_URL)
            .header("Content-Type", "application/json")
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = api_error_message(status, &response_text);
            return Err(Error::http(format!("Claude API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if v["type"] == "error" {
            let error_msg = v["error"]["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Claude API error: {}", error_msg)));
        }

        // content は block の配列。text block だけを結合する
        let text = v["content"]
            .as_array()
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|b| b["type"] == "text")
                    .filter_map(|b| b["text"].as_str())
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty());

        Ok(text)
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<Value, Error> {
        // Messages API に JSON モードは無い。JSON 指定はプロンプト側で行う
        let mut payload = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": query }],
        });

        if let Some(system) = system_instruction {
            payload["system"] = json!(system);
        }

        if let Some(t) = options.effective_temperature(self.temperature) {
            payload["temperature"] = json!(t);
        }

        Ok(payload)
    }
}

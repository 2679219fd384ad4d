//! Geminiプロバイダの実装

use crate::domain::ApiKey;
use crate::error::Error;
use crate::llm::provider::{api_error_message, http_client, GenerationOptions, LlmProvider};
use serde_json::{json, Value};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Geminiプロバイダ
pub struct GeminiProvider {
    model: String,
    api_key: ApiKey,
    temperature: Option<f32>,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `api_key` - API キー（起動時に解決済み）
    /// * `model` - モデル名（デフォルト: "gemini-2.5-flash"）
    /// * `temperature` - 温度（None のときは API のデフォルト）
    pub fn new(api_key: ApiKey, model: Option<String>, temperature: Option<f32>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        Self {
            model,
            api_key,
            temperature,
        }
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model,
            self.api_key.expose()
        );

        let response = http_client()?
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = api_error_message(status, &response_text);
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // 複数 part に分かれることがあるので全て結合する
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
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
        let mut payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": query}]
            }]
        });

        if let Some(system) = system_instruction {
            payload["systemInstruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        let mut generation = serde_json::Map::new();
        if options.json {
            generation.insert("responseMimeType".to_string(), json!("application/json"));
        }
        if let Some(t) = options.effective_temperature(self.temperature) {
            generation.insert("temperature".to_string(), json!(t));
        }
        if !generation.is_empty() {
            payload["generationConfig"] = Value::Object(generation);
        }

        Ok(payload)
    }
}

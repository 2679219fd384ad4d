//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::{GenerationOptions, LlmProvider};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにクエリを送信してレスポンスを取得
    ///
    /// # Arguments
    /// * `query` - ユーザークエリ
    /// * `system_instruction` - システム指示（オプション）
    /// * `options` - JSON モード・温度
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - ペイロード生成・HTTP・パースのいずれかの失敗、またはテキストが空
    pub fn query(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<String, Error> {
        let payload = self
            .provider
            .make_request_payload(query, system_instruction, options)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    enum Behavior {
        Ok,
        PayloadError,
        HttpError,
        ParseError,
        NoText,
    }

    // 振る舞いを切り替えられるモックプロバイダ
    struct MockProvider {
        behavior: Behavior,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Self {
            Self { behavior }
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            match self.behavior {
                Behavior::HttpError => Err(Error::http("HTTP request failed")),
                // リクエストをそのまま返して payload が届いたことを確認する
                _ => Ok(request_json.to_string()),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            match self.behavior {
                Behavior::ParseError => Err(Error::json("Failed to parse response")),
                Behavior::NoText => Ok(None),
                _ => {
                    let v: Value = serde_json::from_str(response_json)?;
                    let mut text = v["query"].as_str().unwrap_or_default().to_string();
                    if let Some(s) = v["system"].as_str() {
                        text = format!("{}|{}", s, text);
                    }
                    if v["json"] == true {
                        text.push_str("|json");
                    }
                    Ok(Some(text))
                }
            }
        }

        fn make_request_payload(
            &self,
            query: &str,
            system_instruction: Option<&str>,
            options: &GenerationOptions,
        ) -> Result<Value, Error> {
            match self.behavior {
                Behavior::PayloadError => Err(Error::json("Failed to create payload")),
                _ => Ok(serde_json::json!({
                    "query": query,
                    "system": system_instruction,
                    "json": options.json,
                })),
            }
        }
    }

    #[test]
    fn test_llm_driver_new() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::Ok));
        assert_eq!(driver.provider().name(), "mock");
        assert_eq!(driver.provider().model(), "mock-model");
    }

    #[test]
    fn test_llm_driver_query() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::Ok));
        assert_eq!(driver.query("hello", None, &GenerationOptions::default()).unwrap(), "hello");
    }

    #[test]
    fn test_llm_driver_query_with_system_instruction() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::Ok));
        let result = driver.query("hello", Some("strategist"), &GenerationOptions::default()).unwrap();
        assert_eq!(result, "strategist|hello");
    }

    #[test]
    fn test_llm_driver_query_passes_options() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::Ok));
        let result = driver.query("hello", None, &GenerationOptions::json()).unwrap();
        assert_eq!(result, "hello|json");
    }

    #[test]
    fn test_llm_driver_query_payload_error() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::PayloadError));
        let err = driver.query("test", None, &GenerationOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to create payload"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_llm_driver_query_http_error() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::HttpError));
        let err = driver.query("test", None, &GenerationOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[test]
    fn test_llm_driver_query_parse_error() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::ParseError));
        let err = driver.query("test", None, &GenerationOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse response"));
    }

    #[test]
    fn test_llm_driver_query_no_text() {
        let driver = LlmDriver::new(MockProvider::new(Behavior::NoText));
        let err = driver.query("test", None, &GenerationOptions::default()).unwrap_err();
        assert!(err.to_string().contains("No text in response"));
    }
}

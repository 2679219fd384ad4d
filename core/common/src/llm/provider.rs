//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 1 回の生成に付けるオプション
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    /// JSON だけを返させる（Gemini は responseMimeType、Claude はプロンプト任せ）
    pub json: bool,
    /// 呼び出し側の既定温度。settings.json の temperature があればそちらが勝つ
    pub temperature: Option<f32>,
}

impl GenerationOptions {
    pub fn json() -> Self {
        Self {
            json: true,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// 設定の温度 > 呼び出し側の既定
    pub fn effective_temperature(&self, configured: Option<f32>) -> Option<f32> {
        configured.or(self.temperature)
    }
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Claude、Geminiなど）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 使用するモデル名を返す
    fn model(&self) -> &str;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - ネットワークエラー・非 2xx ステータス
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - JSON が壊れている・API がエラーを返した
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザープロンプト
    /// * `system_instruction` - システム指示（オプション）
    /// * `options` - JSON モード・温度
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<Value, Error>;
}

/// タイムアウト無しの HTTP クライアント（応答が来るまで待つ）
pub(crate) fn http_client() -> Result<reqwest::blocking::Client, Error> {
    reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))
}

/// 非 2xx 応答の本文から API のエラーメッセージを取り出す
pub(crate) fn api_error_message(status: reqwest::StatusCode, response_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(response_text) {
        v["error"]["message"]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
    } else {
        format!("HTTP {}: {}", status, response_text)
    }
}

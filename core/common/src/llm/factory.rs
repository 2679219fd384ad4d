//! プロバイダファクトリー
//!
//! 解決済みの AiConfig から適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::claude::ClaudeProvider;
use crate::llm::config::{AiConfig, ProviderMode};
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::{GenerationOptions, LlmProvider};
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Anthropic Claude
    Claude,
    /// Google Gemini
    Gemini,
    /// 資格情報なしのデモモード
    Mock,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "claude" | "anthropic" => Some(Self::Claude),
            "gemini" => Some(Self::Gemini),
            "mock" | "demo" => Some(Self::Mock),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Gemini => "gemini",
            Self::Mock => "mock",
        }
    }

    /// 指定可能なプロバイダ名の一覧
    pub fn names() -> &'static [&'static str] {
        &["claude", "gemini", "mock"]
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Claude(ClaudeProvider),
    Gemini(GeminiProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Claude(p) => p.name(),
            Self::Gemini(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Claude(p) => p.model(),
            Self::Gemini(p) => p.model(),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Claude(p) => p.make_http_request(request_json),
            Self::Gemini(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Claude(p) => p.parse_response_text(response_json),
            Self::Gemini(p) => p.parse_response_text(response_json),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<Value, Error> {
        match self {
            Self::Claude(p) => p.make_request_payload(query, system_instruction, options),
            Self::Gemini(p) => p.make_request_payload(query, system_instruction, options),
        }
    }
}

/// プロバイダを作成する。Mock モードでは None（HTTP を一切使わない）。
pub fn create_provider(config: &AiConfig) -> Option<AnyProvider> {
    match &config.mode {
        ProviderMode::Claude { api_key, model } => Some(AnyProvider::Claude(ClaudeProvider::new(
            api_key.clone(),
            Some(model.clone()),
            config.temperature,
        ))),
        ProviderMode::Gemini { api_key, model } => Some(AnyProvider::Gemini(GeminiProvider::new(
            api_key.clone(),
            Some(model.clone()),
            config.temperature,
        ))),
        ProviderMode::Mock => None,
    }
}

//! settings.json 用の設定型と、起動時に一度だけ決まる AI 設定
//!
//! プロバイダ名・モデル名・温度を settings.json から読み、資格情報と合わせて
//! `AiConfig` に解決する（解決は resolver で行う）。

use crate::domain::ApiKey;
use serde::Deserialize;

/// settings.json のルート
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsConfig {
    /// 未指定時に使うプロバイダ名（claude | gemini | mock）
    pub provider: Option<String>,
    /// Claude のモデル名（省略時はデフォルト）
    pub claude_model: Option<String>,
    /// Gemini のモデル名（省略時はデフォルト）
    pub gemini_model: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct SettingsConfigRaw {
    #[serde(alias = "default_provider")]
    provider: Option<String>,
    models: Option<ModelsRaw>,
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ModelsRaw {
    #[serde(alias = "anthropic")]
    claude: Option<String>,
    gemini: Option<String>,
}

impl SettingsConfig {
    /// JSON 文字列からパース（ファイル読みは resolver で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: SettingsConfigRaw = serde_json::from_str(json)?;
        let (claude_model, gemini_model) = match raw.models {
            Some(m) => (m.claude, m.gemini),
            None => (None, None),
        };
        Ok(SettingsConfig {
            provider: raw.provider,
            claude_model,
            gemini_model,
            temperature: raw.temperature,
        })
    }
}

/// 起動時に固定されるプロバイダ選択
///
/// 実行中に切り替わることはない。Mock は資格情報が無いときのデモモード。
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderMode {
    Claude { api_key: ApiKey, model: String },
    Gemini { api_key: ApiKey, model: String },
    Mock,
}

impl ProviderMode {
    /// プロバイダ名（ログ・status 表示用）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Claude { .. } => "claude",
            Self::Gemini { .. } => "gemini",
            Self::Mock => "mock",
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }
}

/// 解決済みの AI 設定。usecase へ注入する。
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    pub mode: ProviderMode,
    pub temperature: Option<f32>,
}

impl AiConfig {
    /// 現在のプロバイダ状態
    pub fn status(&self) -> ProviderStatus {
        match &self.mode {
            ProviderMode::Claude { model, .. } | ProviderMode::Gemini { model, .. } => {
                ProviderStatus {
                    provider: self.mode.name().to_string(),
                    available: true,
                    model: model.clone(),
                }
            }
            ProviderMode::Mock => ProviderStatus {
                provider: "mock".to_string(),
                available: false,
                model: "mock (demo mode)".to_string(),
            },
        }
    }
}

/// status コマンドで表示するプロバイダ状態
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProviderStatus {
    pub provider: String,
    pub available: bool,
    pub model: String,
}

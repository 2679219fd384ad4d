//! settings.json の読み込みとプロバイダ解決

use crate::domain::{ApiKey, ProviderName};
use crate::error::Error;
use crate::llm::claude::DEFAULT_CLAUDE_MODEL;
use crate::llm::config::{AiConfig, ProviderMode, SettingsConfig};
use crate::llm::factory::ProviderType;
use crate::llm::gemini::DEFAULT_GEMINI_MODEL;
use crate::ports::outbound::{EnvResolver, FileSystem};

/// settings.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_settings(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<SettingsConfig>, Error> {
    let path = env.resolve_settings_path()?;
    if !fs.is_file(path.as_path()) {
        return Ok(None);
    }
    let contents = fs
        .read_to_string(path.as_path())
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
    SettingsConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn parse_provider_name(name: &str) -> Result<ProviderType, Error> {
    ProviderType::from_str(name).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown provider: '{}'. Available: {}",
            name,
            ProviderType::names().join(", ")
        ))
    })
}

fn missing_key(provider: ProviderType, vars: &str) -> Error {
    Error::invalid_argument(format!(
        "Provider '{}' requires {} to be set",
        provider.as_str(),
        vars
    ))
}

/// 起動時に一度だけ AI 設定を解決する。
///
/// 優先順位: 明示指定（-p） > settings.json の provider > 資格情報（Claude → Gemini → Mock）。
/// 明示したプロバイダの資格情報が無い場合は usage エラー。
pub fn resolve_ai_config(
    requested: Option<&ProviderName>,
    settings: Option<&SettingsConfig>,
    env: &dyn EnvResolver,
) -> Result<AiConfig, Error> {
    let explicit: Option<&str> = requested
        .map(|r| r.as_ref())
        .or_else(|| settings.and_then(|s| s.provider.as_deref()));

    let claude_model = settings
        .and_then(|s| s.claude_model.clone())
        .unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string());
    let gemini_model = settings
        .and_then(|s| s.gemini_model.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
    let temperature = settings.and_then(|s| s.temperature);

    let claude = |api_key: ApiKey| ProviderMode::Claude {
        api_key,
        model: claude_model.clone(),
    };
    let gemini = |api_key: ApiKey| ProviderMode::Gemini {
        api_key,
        model: gemini_model.clone(),
    };

    let mode = match explicit {
        Some(name) => match parse_provider_name(name)? {
            ProviderType::Claude => {
                let key = env
                    .anthropic_api_key()
                    .ok_or_else(|| missing_key(ProviderType::Claude, "ANTHROPIC_API_KEY"))?;
                claude(key)
            }
            ProviderType::Gemini => {
                let key = env
                    .gemini_api_key()
                    .ok_or_else(|| missing_key(ProviderType::Gemini, "API_KEY or GEMINI_API_KEY"))?;
                gemini(key)
            }
            ProviderType::Mock => ProviderMode::Mock,
        },
        None => {
            if let Some(key) = env.anthropic_api_key() {
                claude(key)
            } else if let Some(key) = env.gemini_api_key() {
                gemini(key)
            } else {
                ProviderMode::Mock
            }
        }
    };

    Ok(AiConfig { mode, temperature })
}

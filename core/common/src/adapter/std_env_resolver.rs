//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{ApiKey, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 空文字は未設定扱い
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("CONFLUATION_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        let mut path = config_base;
        path.push("confluation");
        Ok(HomeDir::new(path))
    }

    fn anthropic_api_key(&self) -> Option<ApiKey> {
        non_empty_var("ANTHROPIC_API_KEY").map(ApiKey::new)
    }

    fn gemini_api_key(&self) -> Option<ApiKey> {
        non_empty_var("API_KEY")
            .or_else(|| non_empty_var("GEMINI_API_KEY"))
            .map(ApiKey::new)
    }
}

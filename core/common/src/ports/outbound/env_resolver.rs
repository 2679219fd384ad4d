//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリと LLM の資格情報を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{ApiKey, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. CONFLUATION_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/confluation（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/confluation
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// Claude（Anthropic）の API キー。ANTHROPIC_API_KEY
    fn anthropic_api_key(&self) -> Option<ApiKey>;

    /// Gemini の API キー。API_KEY、無ければ GEMINI_API_KEY
    fn gemini_api_key(&self) -> Option<ApiKey>;

    /// settings.json のパス（ホームディレクトリ直下）
    fn resolve_settings_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("settings.json"))
    }

    /// JSONL ログのパス（$HOME_DIR/state/log.jsonl）
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("state").join("log.jsonl"))
    }
}

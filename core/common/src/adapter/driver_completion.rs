//! 単発 LLM 完了の標準実装
//!
//! ライブ: LlmDriver<AnyProvider> に 1 回問い合わせて全文を返す。
//! オフライン: 資格情報が無いデモモード。呼び出し側は is_live() を見てフォールバックする。

use crate::error::Error;
use crate::llm::{create_provider, AiConfig, AnyProvider, LlmDriver, LlmProvider};
use crate::ports::outbound::{CompletionRequest, LlmCompletion};
use std::sync::Arc;

/// ライブプロバイダへ問い合わせる完了アダプタ
pub struct DriverCompletion {
    driver: LlmDriver<AnyProvider>,
}

impl DriverCompletion {
    pub fn new(provider: AnyProvider) -> Self {
        Self {
            driver: LlmDriver::new(provider),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.driver.provider().name()
    }

    pub fn model(&self) -> &str {
        self.driver.provider().model()
    }
}

impl LlmCompletion for DriverCompletion {
    fn is_live(&self) -> bool {
        true
    }

    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, Error> {
        self.driver
            .query(request.user_message, request.system_instruction, &request.options)
    }
}

/// モック（デモ）モード用。HTTP は一切行わない。
#[derive(Debug, Clone, Default)]
pub struct OfflineCompletion;

impl LlmCompletion for OfflineCompletion {
    fn is_live(&self) -> bool {
        false
    }

    fn complete(&self, _request: &CompletionRequest<'_>) -> Result<String, Error> {
        Err(Error::env("No LLM credentials configured (mock mode)"))
    }
}

/// 解決済み設定から完了アダプタを作る（Mock なら OfflineCompletion）
pub fn completion_from_config(config: &AiConfig) -> Arc<dyn LlmCompletion> {
    match create_provider(config) {
        Some(provider) => Arc::new(DriverCompletion::new(provider)),
        None => Arc::new(OfflineCompletion),
    }
}

//! 単発 LLM 完了の Outbound ポート
//!
//! ストリーミングではなく 1 回のプロンプトで全文応答を取得する。
//! プロバイダ選択は起動時に 1 度だけ行われ、実装はその結果を保持する。

use crate::error::Error;
use crate::llm::GenerationOptions;

/// 1 回の問い合わせ（system + user + 生成オプション）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRequest<'a> {
    pub system_instruction: Option<&'a str>,
    pub user_message: &'a str,
    pub options: GenerationOptions,
}

impl<'a> CompletionRequest<'a> {
    /// 自由記述（markdown など）で答えさせる問い合わせ
    pub fn text(user_message: &'a str) -> Self {
        Self {
            system_instruction: None,
            user_message,
            options: GenerationOptions::default(),
        }
    }

    /// JSON だけを返させる問い合わせ
    pub fn json(user_message: &'a str) -> Self {
        Self {
            options: GenerationOptions::json(),
            ..Self::text(user_message)
        }
    }

    pub fn with_system(mut self, system_instruction: &'a str) -> Self {
        self.system_instruction = Some(system_instruction);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options = self.options.with_temperature(temperature);
        self
    }
}

pub trait LlmCompletion: Send + Sync {
    /// 実際のモデルに繋がっているか。false ならモック（デモ）モードで、呼び出し側はフォールバックを使う。
    fn is_live(&self) -> bool;

    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, Error>;
}
